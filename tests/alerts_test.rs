mod common;

use chrono::Duration;
use sea_orm::{ActiveModelTrait, Set};

use buffalomitra_api::entities::breeding_record;
use buffalomitra_api::rules::alerts::{generate_alerts, AlertPriority, AlertType};
use buffalomitra_api::rules::GESTATION_DAYS;
use buffalomitra_api::services::feed::{FeedService, UpsertFeedStockInput};
use buffalomitra_api::services::health::{HealthService, RecordVaccinationInput};
use common::{date, seed_buffalo, seed_user, setup_db};

async fn insert_pregnancy(
    db: &std::sync::Arc<sea_orm::DatabaseConnection>,
    user_id: i32,
    buffalo_id: i32,
    expected_calving: chrono::NaiveDate,
) {
    breeding_record::ActiveModel {
        user_id: Set(user_id),
        buffalo_id: Set(buffalo_id),
        breeding_date: Set(expected_calving - Duration::days(GESTATION_DAYS)),
        breeding_type: Set("AI".to_string()),
        bull_details: Set(None),
        expected_calving_date: Set(expected_calving),
        actual_calving_date: Set(None),
        calf_gender: Set(None),
        status: Set("Pregnant".to_string()),
        notes: Set(None),
        ..Default::default()
    }
    .insert(&**db)
    .await
    .expect("pregnancy row");
}

#[tokio::test]
async fn calving_alert_windows_and_priorities() {
    let db = setup_db().await;
    let farmer = seed_user(&db, "alerts1").await;
    let animal = seed_buffalo(&db, farmer.id, "ALB-001").await;
    let today = date(2024, 6, 1);

    // Due in 5 days: high. Due in 20 days: medium. Due in 31 days: silent.
    insert_pregnancy(&db, farmer.id, animal.id, today + Duration::days(5)).await;
    insert_pregnancy(&db, farmer.id, animal.id, today + Duration::days(20)).await;
    insert_pregnancy(&db, farmer.id, animal.id, today + Duration::days(31)).await;

    let alerts = generate_alerts(&db, farmer.id, today).await.unwrap();
    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0].priority, AlertPriority::High);
    assert_eq!(alerts[0].due_date, Some(today + Duration::days(5)));
    assert_eq!(alerts[1].priority, AlertPriority::Medium);
    assert!(alerts.iter().all(|a| a.alert_type == AlertType::Calving));
}

#[tokio::test]
async fn vaccination_alert_windows() {
    let db = setup_db().await;
    let farmer = seed_user(&db, "alerts2").await;
    let animal = seed_buffalo(&db, farmer.id, "ALB-002").await;
    let health = HealthService::new(db.clone());
    let today = date(2024, 6, 1);

    // Deworming repeats every 3 months (90 days). Dose 88 days ago comes
    // due in 2 days: high priority.
    health
        .record_vaccination(
            farmer.id,
            RecordVaccinationInput {
                buffalo_id: animal.id,
                vaccine: "Deworming".to_string(),
                date: today - Duration::days(88),
            },
        )
        .await
        .unwrap();
    // Dose 80 days ago comes due in 10 days: medium priority.
    health
        .record_vaccination(
            farmer.id,
            RecordVaccinationInput {
                buffalo_id: animal.id,
                vaccine: "Deworming".to_string(),
                date: today - Duration::days(80),
            },
        )
        .await
        .unwrap();
    // Dose 60 days ago is 30 days out: outside the 15-day window.
    health
        .record_vaccination(
            farmer.id,
            RecordVaccinationInput {
                buffalo_id: animal.id,
                vaccine: "Deworming".to_string(),
                date: today - Duration::days(60),
            },
        )
        .await
        .unwrap();

    let alerts = generate_alerts(&db, farmer.id, today).await.unwrap();
    assert_eq!(alerts.len(), 2);
    assert!(alerts.iter().all(|a| a.alert_type == AlertType::Vaccination));
    assert_eq!(alerts[0].priority, AlertPriority::High);
    assert_eq!(alerts[1].priority, AlertPriority::Medium);
}

#[tokio::test]
async fn feed_stock_at_or_below_reorder_is_high_priority() {
    let db = setup_db().await;
    let farmer = seed_user(&db, "alerts3").await;
    let feed = FeedService::new(db.clone());

    feed.upsert_stock(
        farmer.id,
        UpsertFeedStockInput {
            name: "Berseem".to_string(),
            feed_type: "Green Fodder".to_string(),
            current_stock_kg: 100.0,
            reorder_level_kg: 100.0,
        },
    )
    .await
    .unwrap();
    feed.upsert_stock(
        farmer.id,
        UpsertFeedStockInput {
            name: "Wheat Straw".to_string(),
            feed_type: "Dry Fodder".to_string(),
            current_stock_kg: 500.0,
            reorder_level_kg: 100.0,
        },
    )
    .await
    .unwrap();

    let alerts = generate_alerts(&db, farmer.id, date(2024, 6, 1)).await.unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].alert_type, AlertType::Feed);
    assert_eq!(alerts[0].priority, AlertPriority::High);
    assert!(alerts[0].due_date.is_none());
    assert!(alerts[0].message.contains("Berseem"));
}

#[tokio::test]
async fn alert_generation_is_idempotent_and_scoped_to_farmer() {
    let db = setup_db().await;
    let farmer = seed_user(&db, "alerts4").await;
    let neighbor = seed_user(&db, "alerts5").await;
    let animal = seed_buffalo(&db, farmer.id, "ALB-003").await;
    let today = date(2024, 6, 1);

    insert_pregnancy(&db, farmer.id, animal.id, today + Duration::days(10)).await;

    let first = generate_alerts(&db, farmer.id, today).await.unwrap();
    let second = generate_alerts(&db, farmer.id, today).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 1);

    let other = generate_alerts(&db, neighbor.id, today).await.unwrap();
    assert!(other.is_empty());
}
