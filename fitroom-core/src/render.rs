pub(crate) mod blit;
