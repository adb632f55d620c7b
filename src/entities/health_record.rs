use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "health_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub buffalo_id: i32,
    pub date: Date,
    pub record_type: String,
    pub disease_name: Option<String>,
    pub symptoms: Option<String>,
    pub treatment: Option<String>,
    pub medicine: Option<String>,
    pub veterinarian: Option<String>,
    pub cost: Decimal,
    pub follow_up_date: Option<Date>,
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::buffalo::Entity",
        from = "Column::BuffaloId",
        to = "super::buffalo::Column::Id"
    )]
    Buffalo,
}

impl Related<super::buffalo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Buffalo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
