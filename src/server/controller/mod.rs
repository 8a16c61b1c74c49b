//! HTTP controller endpoints for the Yaazoru web API.
//!
//! Axum handlers for every resource under `/api`. Handlers extract path, query and body
//! values, turning extractor rejections into validation errors so every failure answers
//! with the same `ErrorDto` body, call the matching service and pick the status code.
//! Each handler carries its utoipa OpenAPI description.

pub mod billing;
pub mod branch;
pub mod comment;
pub mod customer;
pub mod device;
pub mod import;
pub mod integration;
pub mod sim_card;
pub mod user;
