//! Service layer for business logic.
//!
//! Services validate and normalize client input, check referenced records and unique
//! values, open transactions where a write spans several tables, and convert database
//! models into DTOs. Repositories are only called from here.

pub mod billing;
pub mod branch;
pub mod comment;
pub mod customer;
pub mod customer_device;
pub mod device;
pub mod import;
pub mod integration;
pub mod sim_card;
pub mod user;
