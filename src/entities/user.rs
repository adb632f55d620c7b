use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    /// Argon2 hash; the clear password is never stored.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub full_name: String,
    pub mobile: String,
    pub email: Option<String>,
    pub district: String,
    pub village: String,
    pub user_type: String,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::buffalo::Entity")]
    Buffaloes,
}

impl Related<super::buffalo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Buffaloes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
