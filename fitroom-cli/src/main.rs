use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "fitroom", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Composite an outfit onto a body image and write a PNG.
    Render(RenderArgs),
    /// Print the computed placement rectangle for one garment as JSON.
    Placements(PlacementsArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Body image (raster, or .svg silhouette).
    #[arg(long)]
    body: PathBuf,

    /// Landmark JSON file; defaults to `<body>.landmarks.json`.
    #[arg(long)]
    landmarks: Option<PathBuf>,

    /// Top garment image.
    #[arg(long)]
    top: Option<PathBuf>,

    /// Bottom garment image.
    #[arg(long)]
    bottom: Option<PathBuf>,

    /// One-piece garment image (supersedes top and bottom).
    #[arg(long = "one-piece")]
    one_piece: Option<PathBuf>,

    /// Placement configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PlacementsArgs {
    /// Body image defining the canvas size.
    #[arg(long)]
    body: PathBuf,

    /// Landmark JSON file.
    #[arg(long)]
    landmarks: PathBuf,

    /// Garment image (only its aspect ratio is used).
    #[arg(long)]
    garment: PathBuf,

    /// Garment category: top, bottom or one-piece.
    #[arg(long)]
    category: fitroom::GarmentCategory,

    /// Placement configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Placements(args) => cmd_placements(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let base = fitroom::load_base_image(&args.body)?;

    let sidecar = args.landmarks.unwrap_or_else(|| sidecar_path(&args.body));
    let mut session = fitroom::TryOnSession::new(fitroom::LandmarkFileDetector::new(sidecar));
    session.set_base(base)?;

    let mut closet = fitroom::Closet::new();
    for (path, category) in [
        (&args.top, fitroom::GarmentCategory::Top),
        (&args.bottom, fitroom::GarmentCategory::Bottom),
        (&args.one_piece, fitroom::GarmentCategory::OnePiece),
    ] {
        if let Some(path) = path {
            let id = closet.add_from_path(path, category)?.id;
            session.select(category, id);
        }
    }

    let config = load_config(args.config.as_deref())?;
    let pass = session.render_pass(&closet, &config)?;
    let frame = session
        .commit(pass)
        .context("render pass went stale before commit")?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_placements(args: PlacementsArgs) -> anyhow::Result<()> {
    let base = fitroom::load_base_image(&args.body)?;
    let canvas = fitroom::Canvas {
        width: base.width,
        height: base.height,
    };

    let bytes = std::fs::read(&args.landmarks)
        .with_context(|| format!("read landmark file '{}'", args.landmarks.display()))?;
    let landmarks = fitroom::PoseLandmarks::from_json(&bytes)?;

    let garment_bytes = std::fs::read(&args.garment)
        .with_context(|| format!("read garment image '{}'", args.garment.display()))?;
    let garment = fitroom::decode_image(&garment_bytes)?;

    let config = load_config(args.config.as_deref())?;
    let placement = fitroom::garment_placement(
        args.category,
        &landmarks,
        canvas,
        garment.aspect_ratio(),
        &config,
    );

    match placement {
        Some(p) => println!("{}", serde_json::to_string_pretty(&p)?),
        None => println!("null"),
    }
    Ok(())
}

fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<fitroom::PlacementConfig> {
    let Some(path) = path else {
        return Ok(fitroom::PlacementConfig::default());
    };
    let bytes = std::fs::read(path)
        .with_context(|| format!("read placement config '{}'", path.display()))?;
    Ok(fitroom::PlacementConfig::from_json(&bytes)?)
}

fn sidecar_path(body: &std::path::Path) -> PathBuf {
    let mut name = body.as_os_str().to_os_string();
    name.push(".landmarks.json");
    PathBuf::from(name)
}
