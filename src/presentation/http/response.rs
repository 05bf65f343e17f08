// src/presentation/http/response.rs
//! Response envelopes. Every body carries `status` plus either `data` or
//! `message`.

use crate::application::dto::{PaginatedResult, UserDto};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_ERROR: &str = "error";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = "success")]
    pub status: String,
    pub data: UserDto,
}

impl UserResponse {
    pub fn new(data: UserDto) -> Self {
        Self {
            status: STATUS_SUCCESS.into(),
            data,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserListResponse {
    #[schema(example = "success")]
    pub status: String,
    pub data: Vec<UserDto>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u64,
}

impl From<PaginatedResult<UserDto>> for UserListResponse {
    fn from(page: PaginatedResult<UserDto>) -> Self {
        Self {
            status: STATUS_SUCCESS.into(),
            data: page.items,
            total: page.total,
            page: page.page,
            limit: page.limit,
            total_pages: page.total_pages,
        }
    }
}

/// Success without a payload, e.g. after a delete.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "success")]
    pub status: String,
    pub message: String,
}

impl MessageResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_SUCCESS.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "error")]
    pub status: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR.into(),
            message: message.into(),
        }
    }
}
