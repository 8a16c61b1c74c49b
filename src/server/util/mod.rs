//! Utility functions shared by services and controllers.
//!
//! Field validators (Israeli ID, IMEI, ICCID, card numbers), pagination of SeaORM selects
//! and billing schedule date calculations.

pub mod pagination;
pub mod time;
pub mod validate;
