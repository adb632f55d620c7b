use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "calf_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    /// The dam (mother buffalo).
    pub mother_id: i32,
    #[sea_orm(unique)]
    pub tag_number: String,
    pub date_of_birth: Date,
    pub gender: String,
    pub birth_weight_kg: Option<f64>,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::buffalo::Entity",
        from = "Column::MotherId",
        to = "super::buffalo::Column::Id"
    )]
    Mother,
}

impl Related<super::buffalo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mother.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
