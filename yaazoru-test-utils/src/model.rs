//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main crate so fixtures and tests read the same.

pub type BranchModel = entity::branch::Model;
pub type UserModel = entity::user::Model;
pub type CustomerModel = entity::customer::Model;
pub type DeviceModel = entity::device::Model;
pub type CustomerDeviceModel = entity::customer_device::Model;
pub type SimCardModel = entity::sim_card::Model;
pub type MonthlyPaymentModel = entity::monthly_payment::Model;
pub type CreditDetailsModel = entity::credit_details::Model;
pub type PaymentCreditLinkModel = entity::payment_credit_link::Model;
pub type PaymentModel = entity::payments::Model;
pub type ItemModel = entity::item::Model;
pub type CommentModel = entity::comment::Model;
