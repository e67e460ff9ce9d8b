use crate::{
    closet::model::User,
    foundation::error::{FitroomError, FitroomResult},
};

/// Login payload.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Credentials {
    /// Account name.
    pub username: String,
    /// Plain-text password, sent over the credentialed session only.
    pub password: String,
}

/// Registration payload.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Registration {
    /// Desired account name.
    pub username: String,
    /// Contact address.
    pub email: String,
    /// Plain-text password.
    pub password: String,
}

impl Registration {
    /// Reject empty fields and addresses without an `@`.
    pub fn validate(&self) -> FitroomResult<()> {
        if self.username.trim().is_empty() {
            return Err(FitroomError::validation("username must be non-empty"));
        }
        if self.password.is_empty() {
            return Err(FitroomError::validation("password must be non-empty"));
        }
        if self.email.trim().is_empty() || !self.email.contains('@') {
            return Err(FitroomError::validation("email must be a valid address"));
        }
        Ok(())
    }
}

/// The consumed identity API, treated as a black box.
///
/// A session cookie (or equivalent) is the implementation's concern; the
/// gate only observes whether calls succeed and what user the session maps
/// to.
pub trait AuthApi {
    /// Establish a session for `credentials`.
    fn login(&mut self, credentials: &Credentials) -> FitroomResult<()>;

    /// Create an account.
    fn register(&mut self, registration: &Registration) -> FitroomResult<()>;

    /// User bound to the current session, if any.
    fn current_user(&mut self) -> FitroomResult<Option<User>>;

    /// Tear down the current session.
    fn logout(&mut self) -> FitroomResult<()>;
}

/// Route classes used by the navigation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    /// Requires an authenticated user.
    Protected,
    /// Login/registration views, for unauthenticated visitors only.
    AuthOnly,
    /// No gating.
    Public,
}

/// Outcome of gating a route against the session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Show the requested view.
    Allow,
    /// Unauthenticated visitor on a protected view.
    RedirectToLogin,
    /// Authenticated user on an auth-only view.
    RedirectToDashboard,
}

/// Gate a route class against the current authentication state.
pub fn route_decision(access: RouteAccess, is_authenticated: bool) -> RouteDecision {
    match (access, is_authenticated) {
        (RouteAccess::Protected, false) => RouteDecision::RedirectToLogin,
        (RouteAccess::AuthOnly, true) => RouteDecision::RedirectToDashboard,
        _ => RouteDecision::Allow,
    }
}

/// Holds the process-wide current-user slot and drives the identity API.
///
/// Owned by the application rather than global; construct one per process
/// and pass it where needed.
#[derive(Debug)]
pub struct SessionGate<A: AuthApi> {
    api: A,
    current: Option<User>,
}

impl<A: AuthApi> SessionGate<A> {
    /// Gate over `api`, initially logged out.
    pub fn new(api: A) -> Self {
        Self { api, current: None }
    }

    /// Startup probe: adopt the user bound to an existing session.
    ///
    /// A failed probe leaves the gate logged out; the error is not
    /// surfaced because an unauthenticated start is a normal state.
    pub fn probe(&mut self) {
        match self.api.current_user() {
            Ok(user) => self.current = user,
            Err(e) => {
                tracing::warn!(error = %e, "session probe failed");
                self.current = None;
            }
        }
    }

    /// Log in and populate the current-user slot.
    ///
    /// On any failure the slot is left unchanged and the error surfaces to
    /// the caller.
    pub fn login(&mut self, credentials: &Credentials) -> FitroomResult<&User> {
        self.api.login(credentials)?;
        let user = self
            .api
            .current_user()?
            .ok_or_else(|| FitroomError::auth("login succeeded but session has no user"))?;
        Ok(self.current.insert(user))
    }

    /// Register a new account and log straight into it.
    pub fn register(&mut self, registration: &Registration) -> FitroomResult<&User> {
        registration.validate()?;
        self.api.register(registration)?;
        let credentials = Credentials {
            username: registration.username.clone(),
            password: registration.password.clone(),
        };
        self.login(&credentials)
    }

    /// Log out.
    ///
    /// The local slot is always cleared, whether or not the remote call
    /// succeeds.
    pub fn logout(&mut self) {
        if let Err(e) = self.api.logout() {
            tracing::warn!(error = %e, "remote logout failed, clearing local session anyway");
        }
        self.current = None;
    }

    /// Currently authenticated user, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    /// `true` when a user is logged in.
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Gate a route class against this session.
    pub fn route_decision(&self, access: RouteAccess) -> RouteDecision {
        route_decision(access, self.is_authenticated())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/gate.rs"]
mod tests;
