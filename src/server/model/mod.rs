//! Server application models.
//!
//! Application state shared by every handler and aliases for the database models.

pub mod app;
pub mod db;
