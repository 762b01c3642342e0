//! HTTP surface: a JSON API under `/api` plus the embedded browser UI.

pub mod api;
pub mod error;
pub mod pages;
pub mod server;

pub use api::AppState;
pub use error::ApiErr;
pub use server::{router, serve};
