use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "payment_credit_link")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub monthly_payment_id: i32,
    pub credit_details_id: i32,
    pub status: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::monthly_payment::Entity",
        from = "Column::MonthlyPaymentId",
        to = "super::monthly_payment::Column::Id"
    )]
    MonthlyPayment,
    #[sea_orm(
        belongs_to = "super::credit_details::Entity",
        from = "Column::CreditDetailsId",
        to = "super::credit_details::Column::Id"
    )]
    CreditDetails,
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
