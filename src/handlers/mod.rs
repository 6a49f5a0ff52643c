pub mod admin;
pub mod auth;
pub mod browse;
pub mod owner;

use astra::Response;

use crate::auth::session::Session;
use crate::domain::role::Role;
use crate::errors::ServerError;
use crate::responses::redirect;

/// Outcome of a dashboard guard.
pub enum Access<'a> {
    Granted(&'a Session),
    /// Not signed in: send them to the login page.
    SignIn(Response),
}

/// Signed-out visitors are redirected to `/login`; a signed-in user with
/// another role gets `Forbidden`.
pub fn require_role(session: Option<&Session>, role: Role) -> Result<Access<'_>, ServerError> {
    match session {
        None => Ok(Access::SignIn(redirect("/login")?)),
        Some(s) if s.user.role == role => Ok(Access::Granted(s)),
        Some(s) => {
            tracing::warn!(user_id = %s.user.id, have = %s.user.role, need = %role, "role check failed");
            Err(ServerError::Forbidden(format!(
                "This page is only for {} accounts.",
                role.as_str()
            )))
        }
    }
}
