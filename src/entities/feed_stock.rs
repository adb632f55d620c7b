use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-farm feed stock level, keyed by feed name within a user. This is the
/// only entity with an update path (upsert-by-name). Low stock when
/// `current_stock_kg <= reorder_level_kg`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "feed_stock")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub feed_type: String,
    pub current_stock_kg: f64,
    pub reorder_level_kg: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
