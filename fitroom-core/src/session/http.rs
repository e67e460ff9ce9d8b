use reqwest::StatusCode;

use crate::{
    closet::model::User,
    foundation::error::{FitroomError, FitroomResult},
    session::gate::{AuthApi, Credentials, Registration},
};

/// [`AuthApi`] over the REST identity service.
///
/// The session is carried by a cookie jar scoped to this client, so the
/// handle is the session: drop it and the session is gone locally.
#[derive(Debug)]
pub struct HttpAuthApi {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpAuthApi {
    /// Client for the API rooted at `base_url` (for example
    /// `http://localhost:5000/api`).
    pub fn new(base_url: impl Into<String>) -> FitroomResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| FitroomError::auth(format!("build http client: {e}")))?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl AuthApi for HttpAuthApi {
    fn login(&mut self, credentials: &Credentials) -> FitroomResult<()> {
        let resp = self
            .client
            .post(self.url("/auth/login"))
            .json(credentials)
            .send()
            .map_err(|e| FitroomError::auth(format!("login request failed: {e}")))?;
        if !resp.status().is_success() {
            return Err(FitroomError::auth("invalid credentials"));
        }
        Ok(())
    }

    fn register(&mut self, registration: &Registration) -> FitroomResult<()> {
        let resp = self
            .client
            .post(self.url("/auth/register"))
            .json(registration)
            .send()
            .map_err(|e| FitroomError::auth(format!("register request failed: {e}")))?;
        match resp.status() {
            s if s.is_success() => Ok(()),
            StatusCode::CONFLICT => Err(FitroomError::validation(
                "username or email already exists",
            )),
            StatusCode::BAD_REQUEST => Err(FitroomError::validation("missing required fields")),
            s => Err(FitroomError::auth(format!("register failed with {s}"))),
        }
    }

    fn current_user(&mut self) -> FitroomResult<Option<User>> {
        let resp = self
            .client
            .get(self.url("/auth/user"))
            .send()
            .map_err(|e| FitroomError::auth(format!("session check failed: {e}")))?;
        if resp.status() == StatusCode::UNAUTHORIZED {
            return Ok(None);
        }
        if !resp.status().is_success() {
            return Err(FitroomError::auth(format!(
                "session check failed with {}",
                resp.status()
            )));
        }
        let user = resp
            .json::<User>()
            .map_err(|e| FitroomError::serde(format!("parse session user: {e}")))?;
        Ok(Some(user))
    }

    fn logout(&mut self) -> FitroomResult<()> {
        let resp = self
            .client
            .post(self.url("/auth/logout"))
            .send()
            .map_err(|e| FitroomError::auth(format!("logout request failed: {e}")))?;
        if !resp.status().is_success() {
            return Err(FitroomError::auth(format!(
                "logout failed with {}",
                resp.status()
            )));
        }
        Ok(())
    }
}
