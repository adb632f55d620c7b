mod common;

use assert_matches::assert_matches;
use rust_decimal_macros::dec;

use buffalomitra_api::errors::ServiceError;
use buffalomitra_api::services::analytics::AnalyticsService;
use buffalomitra_api::services::herd::{AddBuffaloInput, HerdService};
use buffalomitra_api::services::production::{DateRange, ProductionService, RecordProductionInput};
use common::{date, seed_buffalo, seed_user, setup_db};

#[tokio::test]
async fn duplicate_tag_number_conflicts_and_keeps_original() {
    let db = setup_db().await;
    let farmer = seed_user(&db, "farmer1").await;
    let service = HerdService::new(db.clone());
    let first = seed_buffalo(&db, farmer.id, "BUF-001").await;

    let result = service
        .add_buffalo(
            farmer.id,
            AddBuffaloInput {
                tag_number: "BUF-001".to_string(),
                name: Some("Yamuna".to_string()),
                breed: "Jaffarabadi".to_string(),
                date_of_birth: date(2021, 1, 10),
                purchase_date: None,
                purchase_price: None,
                current_lactation: 0,
            },
        )
        .await;
    assert_matches!(result, Err(ServiceError::Duplicate(_)));

    // The original record is untouched.
    let kept = service.get_buffalo(farmer.id, first.id).await.unwrap();
    assert_eq!(kept.name.as_deref(), Some("Ganga"));
    assert_eq!(kept.breed, "Murrah");
    assert_eq!(service.list_buffaloes(farmer.id, None).await.unwrap().len(), 1);
}

#[tokio::test]
async fn unknown_breed_rejected() {
    let db = setup_db().await;
    let farmer = seed_user(&db, "farmer2").await;
    let result = HerdService::new(db.clone())
        .add_buffalo(
            farmer.id,
            AddBuffaloInput {
                tag_number: "BUF-002".to_string(),
                name: None,
                breed: "Holstein".to_string(),
                date_of_birth: date(2021, 1, 10),
                purchase_date: None,
                purchase_price: None,
                current_lactation: 0,
            },
        )
        .await;
    assert_matches!(result, Err(ServiceError::Validation(_)));
}

#[tokio::test]
async fn production_total_is_derived_server_side() {
    let db = setup_db().await;
    let farmer = seed_user(&db, "farmer3").await;
    let animal = seed_buffalo(&db, farmer.id, "BUF-003").await;

    let record = ProductionService::new(db.clone())
        .record(
            farmer.id,
            RecordProductionInput {
                buffalo_id: animal.id,
                date: date(2024, 3, 1),
                morning_yield: 6.5,
                evening_yield: 5.0,
                fat_percentage: 7.2,
                snf_percentage: Some(9.1),
                price_per_liter: dec!(70),
                notes: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(record.total_yield, 11.5);
}

#[tokio::test]
async fn cannot_record_against_another_farmers_buffalo() {
    let db = setup_db().await;
    let owner = seed_user(&db, "owner").await;
    let intruder = seed_user(&db, "intruder").await;
    let animal = seed_buffalo(&db, owner.id, "BUF-004").await;

    let result = ProductionService::new(db.clone())
        .record(
            intruder.id,
            RecordProductionInput {
                buffalo_id: animal.id,
                date: date(2024, 3, 1),
                morning_yield: 4.0,
                evening_yield: 4.0,
                fat_percentage: 7.0,
                snf_percentage: None,
                price_per_liter: dec!(70),
                notes: None,
            },
        )
        .await;
    assert_matches!(result, Err(ServiceError::NotFound(_)));
}

#[tokio::test]
async fn daily_series_groups_by_date_and_is_empty_for_no_data() {
    let db = setup_db().await;
    let farmer = seed_user(&db, "farmer4").await;
    let animal = seed_buffalo(&db, farmer.id, "BUF-005").await;
    let production = ProductionService::new(db.clone());
    let analytics = AnalyticsService::new(db.clone());

    let empty = analytics
        .daily_production_series(farmer.id, date(2024, 1, 1), date(2024, 1, 31))
        .await
        .unwrap();
    assert!(empty.is_empty());

    for (day, morning, evening) in [(1, 6.0, 5.0), (1, 2.0, 1.0), (2, 7.0, 6.0)] {
        production
            .record(
                farmer.id,
                RecordProductionInput {
                    buffalo_id: animal.id,
                    date: date(2024, 3, day),
                    morning_yield: morning,
                    evening_yield: evening,
                    fat_percentage: 7.0,
                    snf_percentage: None,
                    price_per_liter: dec!(70),
                    notes: None,
                },
            )
            .await
            .unwrap();
    }

    let series = analytics
        .daily_production_series(farmer.id, date(2024, 3, 1), date(2024, 3, 31))
        .await
        .unwrap();
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].date, date(2024, 3, 1));
    assert_eq!(series[0].total_yield, 14.0);
    assert_eq!(series[1].total_yield, 13.0);
}

#[tokio::test]
async fn csv_export_contains_header_and_rows() {
    let db = setup_db().await;
    let farmer = seed_user(&db, "farmer5").await;
    let animal = seed_buffalo(&db, farmer.id, "BUF-006").await;
    let production = ProductionService::new(db.clone());

    production
        .record(
            farmer.id,
            RecordProductionInput {
                buffalo_id: animal.id,
                date: date(2024, 3, 5),
                morning_yield: 6.0,
                evening_yield: 5.5,
                fat_percentage: 7.4,
                snf_percentage: Some(9.0),
                price_per_liter: dec!(72),
                notes: Some("morning shed, \"B\" line".to_string()),
            },
        )
        .await
        .unwrap();

    let csv = production
        .export_csv(
            farmer.id,
            DateRange {
                start_date: None,
                end_date: None,
            },
        )
        .await
        .unwrap();
    let mut lines = csv.lines();
    assert!(lines.next().unwrap().starts_with("date,"));
    assert!(csv.contains("2024-03-05"));
}
