use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "analytical-engine", min_length = 8)]
    pub password: String,
    #[schema(example = 36, minimum = 0, maximum = 150)]
    pub age: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub name: String,
    pub email: String,
    #[schema(minimum = 0, maximum = 150)]
    pub age: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    #[schema(min_length = 8)]
    pub new_password: String,
}

/// Query string for the list endpoint. Every field is read as text and
/// interpreted leniently: values that do not parse are ignored.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersParams {
    /// Case-insensitive substring of name or email.
    pub search: Option<String>,
    /// Inclusive lower age bound; 0 or less means unset.
    pub age_min: Option<String>,
    /// Inclusive upper age bound; 0 or less means unset.
    pub age_max: Option<String>,
    /// One of `id`, `name`, `email`, `age`, `created_at`. Defaults to `id`.
    pub sort: Option<String>,
    /// `asc` or `desc`. Defaults to `asc`.
    pub order: Option<String>,
    /// 1-based page number.
    pub page: Option<String>,
    /// Page size, capped at 100.
    pub limit: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchUsersParams {
    /// Required keyword matched against name or email.
    pub q: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

pub(crate) fn lenient_int(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
}
