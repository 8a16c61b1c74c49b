//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors to check status codes and bodies.
//! The `router` tests go through the assembled router to cover routing, extractor
//! rejections and multipart uploads.

mod billing;
mod comment;
mod customer;
mod device;
mod import;
mod integration;
mod router;
mod sim_card;
mod user;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use yaazoru_test_utils::prelude::*;

use crate::{
    util::{into_response, json_body},
    TestContextExt,
};
