use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::{error, info, warn};

use crate::api::views;
use crate::error::CourtsideError;

/// A handler failure rendered as an HTML error page
#[derive(Debug)]
pub struct PageError(pub CourtsideError);

impl From<CourtsideError> for PageError {
    fn from(err: CourtsideError) -> Self {
        PageError(err)
    }
}

pub fn status_for(err: &CourtsideError) -> StatusCode {
    match err {
        CourtsideError::Validation(_) => StatusCode::BAD_REQUEST,
        CourtsideError::NotFound(_) => StatusCode::NOT_FOUND,
        CourtsideError::Stat(_) => StatusCode::UNPROCESSABLE_ENTITY,
        CourtsideError::UpstreamUnavailable { .. } | CourtsideError::Http(_) => {
            StatusCode::BAD_GATEWAY
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        match status {
            StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND => info!(%status, "{}", self.0),
            StatusCode::INTERNAL_SERVER_ERROR => error!(%status, "{}", self.0),
            _ => warn!(%status, "{}", self.0),
        }

        // Upstream internals stay in the log
        let message = match &self.0 {
            CourtsideError::UpstreamUnavailable { service, .. } => {
                format!("The {} service is unavailable right now. Try again later.", service)
            }
            CourtsideError::Http(_) => {
                "An upstream service is unavailable right now. Try again later.".to_string()
            }
            CourtsideError::Validation(m) | CourtsideError::NotFound(m) => m.clone(),
            CourtsideError::Stat(e) => e.to_string(),
            _ => "Internal error".to_string(),
        };

        (status, Html(views::error_page(status.as_u16(), &message))).into_response()
    }
}
