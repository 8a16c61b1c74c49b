//! Repositories of the monthly payment aggregate.

pub mod credit_details;
pub mod item;
pub mod monthly_payment;
pub mod payment_credit_link;
pub mod payments;
