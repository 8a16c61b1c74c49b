//! Database model type aliases.
//!
//! Short names for the SeaORM models of the `entity` crate used across repositories and
//! services.

pub type BranchModel = entity::branch::Model;
pub type UserModel = entity::user::Model;
pub type CustomerModel = entity::customer::Model;
pub type DeviceModel = entity::device::Model;
pub type CustomerDeviceModel = entity::customer_device::Model;
pub type SimCardModel = entity::sim_card::Model;

/// Recurring billing plan of a customer
pub type MonthlyPaymentModel = entity::monthly_payment::Model;
/// Tokenized payment card
pub type CreditDetailsModel = entity::credit_details::Model;
/// Join row recording which card a monthly payment charges
pub type PaymentCreditLinkModel = entity::payment_credit_link::Model;
/// Installment of a monthly payment
pub type PaymentModel = entity::payments::Model;
pub type ItemModel = entity::item::Model;

pub type CommentModel = entity::comment::Model;
