use crate::app::{now_unix, AppState};
use crate::auth::session::{token_from_request, Session};
use crate::errors::ServerError;
use crate::handlers::{admin, auth, browse, owner};
use crate::responses::{css_response, ResultResp};
use astra::Request;

const MAIN_CSS: &str = include_str!("../static/main.css");

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let session = current_session(&req, state)?;
    tracing::debug!(%method, %path, signed_in = session.is_some(), "request");
    let session = session.as_ref();

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => browse::home(&req, state, session),
        ("GET", ["rooms"]) => browse::all_rooms(&req, state, session),
        ("GET", ["rooms", id]) => browse::room_detail(state, session, id),
        ("GET", ["searcher"]) => browse::searcher_dashboard(&req, state, session),

        ("GET", ["login"]) => auth::login_page_handler(session),
        ("POST", ["login"]) => auth::login(req, state),
        ("POST", ["logout"]) => auth::logout(state, session),

        ("GET", ["owner"]) => owner::dashboard(&req, state, session),
        ("GET", ["owner", "rooms", "new"]) => owner::new_room(session),
        ("POST", ["owner", "rooms"]) => owner::create_room(req, state, session),

        ("GET", ["admin"]) => admin::dashboard(&req, state, session),
        ("POST", ["admin", "rooms", id, action]) => admin::moderate(state, session, id, action),

        ("GET", ["static", "main.css"]) => css_response(MAIN_CSS),
        _ => Err(ServerError::NotFound),
    }
}

/// Resolves the session cookie once per request. A stale cookie is treated as signed out.
fn current_session(req: &Request, state: &AppState) -> Result<Option<Session>, ServerError> {
    match token_from_request(req) {
        Some(token) => state.sessions.resume(&state.db, &token, now_unix()),
        None => Ok(None),
    }
}
