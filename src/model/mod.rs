//! JSON data transfer objects exchanged with API clients.

pub mod api;
pub mod billing;
pub mod branch;
pub mod comment;
pub mod customer;
pub mod customer_device;
pub mod device;
pub mod import;
pub mod integration;
pub mod sim_card;
pub mod status;
pub mod user;
