use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "customer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub id_number: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone_number: String,
    pub additional_phone: Option<String>,
    pub address: String,
    pub city: String,
    pub status: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::customer_device::Entity")]
    CustomerDevice,
    #[sea_orm(has_many = "super::sim_card::Entity")]
    SimCard,
    #[sea_orm(has_many = "super::monthly_payment::Entity")]
    MonthlyPayment,
    #[sea_orm(has_many = "super::credit_details::Entity")]
    CreditDetails,
}

impl Related<super::customer_device::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CustomerDevice.def()
    }
}

impl Related<super::sim_card::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SimCard.def()
    }
}

impl Related<super::monthly_payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MonthlyPayment.def()
    }
}

impl Related<super::credit_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CreditDetails.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
