// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod cache;
pub mod security;
pub mod time;
pub mod user_repo;

pub use cache::InMemoryUserCache;
pub use security::StrictPasswordHasher;
pub use time::{TestClock, fixed_now};
pub use user_repo::InMemoryUserRepo;
