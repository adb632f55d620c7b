use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A buffalo in the herd. `status` holds a [`crate::models::AnimalStatus`]
/// as its string form.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "buffaloes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    #[sea_orm(unique)]
    pub tag_number: String,
    pub name: Option<String>,
    pub breed: String,
    pub date_of_birth: Date,
    pub purchase_date: Option<Date>,
    pub purchase_price: Option<Decimal>,
    pub current_lactation: i32,
    pub status: String,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::milk_production::Entity")]
    MilkProduction,
    #[sea_orm(has_many = "super::breeding_record::Entity")]
    BreedingRecords,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::milk_production::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MilkProduction.def()
    }
}

impl Related<super::breeding_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BreedingRecords.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
