//! Data access layer repositories.
//!
//! One repository per table. Every repository is generic over `ConnectionTrait` so the same
//! code runs against the connection pool or inside a transaction.

pub mod billing;
pub mod branch;
pub mod comment;
pub mod customer;
pub mod customer_device;
pub mod device;
pub mod sim_card;
pub mod user;
