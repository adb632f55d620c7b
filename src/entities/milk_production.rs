use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One milking session record. `total_yield` is always derived server-side
/// as morning + evening; clients cannot set it. There is deliberately no
/// uniqueness on (buffalo_id, date): same-day duplicates are permitted.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "milk_production")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub buffalo_id: i32,
    pub date: Date,
    pub morning_yield: f64,
    pub evening_yield: f64,
    pub total_yield: f64,
    pub fat_percentage: f64,
    pub snf_percentage: Option<f64>,
    pub price_per_liter: Decimal,
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
