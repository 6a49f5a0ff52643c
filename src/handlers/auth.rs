use astra::Request;

use crate::app::{now_unix, AppState};
use crate::auth::credentials::{authenticate, LoginCredentials};
use crate::auth::session::{expired_cookie, session_cookie, Session};
use crate::errors::ServerError;
use crate::params::FormParams;
use crate::responses::{html_response, html_with_status, redirect, redirect_with_cookie, ResultResp};
use crate::templates::pages::login_page;

pub fn login_page_handler(session: Option<&Session>) -> ResultResp {
    match session {
        Some(s) => redirect(s.user.role.dashboard_path()),
        None => html_response(login_page("", None)),
    }
}

pub fn login(req: Request, state: &AppState) -> ResultResp {
    let params = FormParams::from_body(req)?;
    let creds = LoginCredentials {
        email: params.text("email"),
        password: params.get("password").unwrap_or("").to_string(),
    };

    match state.db.with_conn(|conn| authenticate(conn, &creds)) {
        Ok(user) => {
            let dashboard = user.role.dashboard_path();
            let session = state.sessions.start(user, now_unix())?;
            let cookie = session_cookie(&session.token, state.sessions.ttl_secs());
            redirect_with_cookie(dashboard, &cookie)
        }
        Err(ServerError::Unauthorized(message)) => {
            html_with_status(401, login_page(&creds.email, Some(&message)))
        }
        Err(other) => Err(other),
    }
}

pub fn logout(state: &AppState, session: Option<&Session>) -> ResultResp {
    if let Some(s) = session {
        state.sessions.end(&s.token)?;
        tracing::info!(user_id = %s.user.id, "signed out");
    }
    redirect_with_cookie("/?notice=signed-out", &expired_cookie())
}
