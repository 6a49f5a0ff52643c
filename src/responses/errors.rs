use crate::errors::ServerError;
use crate::templates::components::error_page;
use astra::{Body, Response, ResponseBuilder};

/// Renders a `ServerError` as an HTML page with its mapped status.
pub fn error_response(err: &ServerError) -> Response {
    let status = err.status();
    let message = match err {
        ServerError::NotFound => "We couldn't find that page.".to_string(),
        ServerError::BadRequest(msg)
        | ServerError::Unauthorized(msg)
        | ServerError::Forbidden(msg)
        | ServerError::Conflict(msg) => msg.clone(),
        ServerError::Validation(_) => "Some fields need attention.".to_string(),
        // Details stay in the log.
        ServerError::DbError(_) | ServerError::InternalError => {
            "Something went wrong on our side.".to_string()
        }
    };

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(error_page(status, &message).into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
