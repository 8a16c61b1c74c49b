use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "device")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub device_number: String,
    #[sea_orm(unique)]
    pub imei: String,
    pub model: String,
    pub serial_number: Option<String>,
    pub purchase_date: Option<Date>,
    pub plan_type: Option<String>,
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

impl ActiveModelBehavior for ActiveModel {}
