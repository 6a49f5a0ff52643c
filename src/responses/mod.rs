pub mod errors;
pub mod html;

pub use errors::error_response;
pub use html::{css_response, html_response, html_with_status, redirect, redirect_with_cookie};

pub use crate::errors::ResultResp;
