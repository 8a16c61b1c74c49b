//! SeaORM entity definitions for the Yaazoru database.

pub mod prelude;

pub mod branch;
pub mod comment;
pub mod credit_details;
pub mod customer;
pub mod customer_device;
pub mod device;
pub mod item;
pub mod monthly_payment;
pub mod payment_credit_link;
pub mod payments;
pub mod sim_card;
pub mod user;
