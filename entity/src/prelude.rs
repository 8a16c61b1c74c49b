pub use super::branch::Entity as Branch;
pub use super::comment::Entity as Comment;
pub use super::credit_details::Entity as CreditDetails;
pub use super::customer::Entity as Customer;
pub use super::customer_device::Entity as CustomerDevice;
pub use super::device::Entity as Device;
pub use super::item::Entity as Item;
pub use super::monthly_payment::Entity as MonthlyPayment;
pub use super::payment_credit_link::Entity as PaymentCreditLink;
pub use super::payments::Entity as Payments;
pub use super::sim_card::Entity as SimCard;
pub use super::user::Entity as User;
