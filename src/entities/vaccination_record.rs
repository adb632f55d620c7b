use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// `next_due_date` is derived at write time from the vaccine template
/// frequency (months x 30 days).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vaccination_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub buffalo_id: i32,
    pub vaccine: String,
    pub date: Date,
    pub next_due_date: Date,
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
