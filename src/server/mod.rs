//! Server application core modules.
//!
//! HTTP routing, controllers, services, repositories and third-party integrations of the
//! Yaazoru business-management backend.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod integration;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
