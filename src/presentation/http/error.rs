use crate::application::{
    ApplicationResult,
    error::{ApplicationError, ErrorKind},
};
use crate::presentation::http::response::ErrorResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

const INTERNAL_MESSAGE: &str = "internal server error";

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        let status = match err.kind() {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::IncorrectCredential => StatusCode::UNAUTHORIZED,
            ErrorKind::Unexpected => {
                tracing::error!(error = %err, "request failed");
                return Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.into());
            }
        };
        Self::new(status, err.message().to_string())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message.into())
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorResponse::new(self.message))).into_response()
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;

    #[test]
    fn statuses_follow_the_error_kind() {
        let cases = [
            (ApplicationError::from(DomainError::validation("bad age")), StatusCode::BAD_REQUEST),
            (ApplicationError::not_found("user not found"), StatusCode::NOT_FOUND),
            (
                ApplicationError::from(DomainError::Conflict("taken".into())),
                StatusCode::CONFLICT,
            ),
            (
                ApplicationError::incorrect_credential("old password is incorrect"),
                StatusCode::UNAUTHORIZED,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(HttpError::from_error(err).status(), status);
        }
    }

    #[test]
    fn unexpected_failures_hide_their_detail() {
        let err = HttpError::from_error(ApplicationError::from(DomainError::Persistence(
            "relation \"users\" does not exist".into(),
        )));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "internal server error");
    }

    #[test]
    fn client_errors_carry_the_bare_reason() {
        let err = HttpError::from_error(DomainError::validation("name cannot be empty").into());
        assert_eq!(err.message(), "name cannot be empty");
    }
}
