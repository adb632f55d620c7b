#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use buffalomitra_api::entities::{buffalo, user};
use buffalomitra_api::migrator::Migrator;
use buffalomitra_api::services::herd::{AddBuffaloInput, HerdService};
use buffalomitra_api::services::users::{RegisterInput, UserService};

/// Fresh in-memory database with all migrations applied.
pub async fn setup_db() -> Arc<DatabaseConnection> {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    Migrator::up(&db, None).await.expect("migrations");
    Arc::new(db)
}

pub async fn seed_user(db: &Arc<DatabaseConnection>, username: &str) -> user::Model {
    UserService::new(db.clone())
        .register(RegisterInput {
            username: username.to_string(),
            password: "secret123".to_string(),
            full_name: "Test Farmer".to_string(),
            mobile: "9876543210".to_string(),
            email: None,
            district: "Kheda".to_string(),
            village: "Anand".to_string(),
            user_type: None,
        })
        .await
        .expect("seed user")
}

pub async fn seed_buffalo(
    db: &Arc<DatabaseConnection>,
    user_id: i32,
    tag: &str,
) -> buffalo::Model {
    HerdService::new(db.clone())
        .add_buffalo(
            user_id,
            AddBuffaloInput {
                tag_number: tag.to_string(),
                name: Some("Ganga".to_string()),
                breed: "Murrah".to_string(),
                date_of_birth: date(2020, 6, 1),
                purchase_date: None,
                purchase_price: Some(dec!(85000)),
                current_lactation: 2,
            },
        )
        .await
        .expect("seed buffalo")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}
