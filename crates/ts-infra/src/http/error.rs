use reqwest::{Response, StatusCode};
use ts_core::ports::RequestError;

pub(crate) fn transport_error(err: reqwest::Error) -> RequestError {
    if err.is_decode() {
        RequestError::Decode(err.to_string())
    } else {
        RequestError::Transport(err.to_string())
    }
}

/// Passes 2xx responses through and turns everything else into a
/// [`RequestError`], using the response body as the message.
pub(crate) async fn check_status(response: Response) -> Result<Response, RequestError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(RequestError::NotFound);
    }

    let message = response
        .text()
        .await
        .ok()
        .filter(|body| !body.trim().is_empty())
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("").to_string());

    Err(RequestError::Status {
        status: status.as_u16(),
        message,
    })
}
