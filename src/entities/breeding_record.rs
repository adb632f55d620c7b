use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A breeding event. `expected_calving_date` is derived from the breeding
/// date with the fixed gestation offset; `status` holds a
/// [`crate::models::BreedingStatus`] string.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "breeding_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub buffalo_id: i32,
    pub breeding_date: Date,
    pub breeding_type: String,
    pub bull_details: Option<String>,
    pub expected_calving_date: Date,
    pub actual_calving_date: Option<Date>,
    pub calf_gender: Option<String>,
    pub status: String,
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
