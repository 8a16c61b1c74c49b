use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub monthly_payment_id: i32,
    pub description: String,
    pub quantity: i32,
    pub price: f64,
    pub total: f64,
    pub payment_type: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::monthly_payment::Entity",
        from = "Column::MonthlyPaymentId",
        to = "super::monthly_payment::Column::Id"
    )]
    MonthlyPayment,
}

impl Related<super::monthly_payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MonthlyPayment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
