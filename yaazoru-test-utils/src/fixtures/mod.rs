//! Test fixture modules for database rows and HTTP mock creation.
//!
//! - `factory` - pure functions producing valid identifiers and in-memory models
//! - `customer` - customer rows
//! - `inventory` - branches, users, devices, SIM cards and device assignments
//! - `billing` - monthly payments with credit details, items and installments
//! - `comment` - comment thread rows
//! - `mockito` - payment gateway and Samsung API mock endpoints

pub mod billing;
pub mod comment;
pub mod customer;
pub mod factory;
pub mod inventory;
pub mod mockito;
