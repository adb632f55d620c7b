mod common;

use assert_matches::assert_matches;
use chrono::Duration;
use rust_decimal_macros::dec;

use buffalomitra_api::errors::ServiceError;
use buffalomitra_api::rules::GESTATION_DAYS;
use buffalomitra_api::services::breeding::{BreedingService, RecordBreedingInput, RecordHeatInput};
use buffalomitra_api::services::health::{
    AddHealthRecordInput, HealthService, RecordVaccinationInput,
};
use common::{date, seed_buffalo, seed_user, setup_db};

#[tokio::test]
async fn breeding_derives_expected_calving_date() {
    let db = setup_db().await;
    let farmer = seed_user(&db, "breed1").await;
    let animal = seed_buffalo(&db, farmer.id, "BRD-001").await;

    let record = BreedingService::new(db.clone())
        .record(
            farmer.id,
            RecordBreedingInput {
                buffalo_id: animal.id,
                breeding_date: date(2024, 1, 1),
                breeding_type: "AI".to_string(),
                bull_details: Some("Murrah stud #12".to_string()),
                status: None,
                notes: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(
        record.expected_calving_date,
        date(2024, 1, 1) + Duration::days(GESTATION_DAYS)
    );
    assert_eq!(record.status, "Bred");
}

#[tokio::test]
async fn breeding_list_filters_by_status() {
    let db = setup_db().await;
    let farmer = seed_user(&db, "breed2").await;
    let animal = seed_buffalo(&db, farmer.id, "BRD-002").await;
    let breeding = BreedingService::new(db.clone());

    for (month, status) in [(1, Some("Pregnant")), (2, None)] {
        breeding
            .record(
                farmer.id,
                RecordBreedingInput {
                    buffalo_id: animal.id,
                    breeding_date: date(2024, month, 1),
                    breeding_type: "Natural".to_string(),
                    bull_details: None,
                    status: status.map(str::to_string),
                    notes: None,
                },
            )
            .await
            .unwrap();
    }

    let pregnant = breeding
        .list(farmer.id, Some("Pregnant".to_string()))
        .await
        .unwrap();
    assert_eq!(pregnant.len(), 1);

    let all = breeding.list(farmer.id, None).await.unwrap();
    assert_eq!(all.len(), 2);
    // Soonest expected calving first.
    assert!(all[0].expected_calving_date <= all[1].expected_calving_date);

    let bad_status = breeding.list(farmer.id, Some("Expecting".to_string())).await;
    assert_matches!(bad_status, Err(ServiceError::Validation(_)));
}

#[tokio::test]
async fn heat_events_require_known_intensity() {
    let db = setup_db().await;
    let farmer = seed_user(&db, "breed3").await;
    let animal = seed_buffalo(&db, farmer.id, "BRD-003").await;
    let breeding = BreedingService::new(db.clone());

    breeding
        .record_heat(
            farmer.id,
            RecordHeatInput {
                buffalo_id: animal.id,
                date: date(2024, 5, 1),
                intensity: "Strong".to_string(),
                bred: true,
                notes: None,
            },
        )
        .await
        .unwrap();

    let rejected = breeding
        .record_heat(
            farmer.id,
            RecordHeatInput {
                buffalo_id: animal.id,
                date: date(2024, 5, 2),
                intensity: "Extreme".to_string(),
                bred: false,
                notes: None,
            },
        )
        .await;
    assert_matches!(rejected, Err(ServiceError::Validation(_)));

    assert_eq!(breeding.list_heat_events(farmer.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn vaccination_due_date_follows_template_frequency() {
    let db = setup_db().await;
    let farmer = seed_user(&db, "health1").await;
    let animal = seed_buffalo(&db, farmer.id, "HLT-001").await;
    let health = HealthService::new(db.clone());

    // FMD repeats every 6 months, counted as 180 days.
    let record = health
        .record_vaccination(
            farmer.id,
            RecordVaccinationInput {
                buffalo_id: animal.id,
                vaccine: "FMD".to_string(),
                date: date(2024, 1, 15),
            },
        )
        .await
        .unwrap();
    assert_eq!(record.next_due_date, date(2024, 7, 13));

    let unknown = health
        .record_vaccination(
            farmer.id,
            RecordVaccinationInput {
                buffalo_id: animal.id,
                vaccine: "Rinderpest".to_string(),
                date: date(2024, 1, 15),
            },
        )
        .await;
    assert_matches!(unknown, Err(ServiceError::Validation(_)));
}

#[tokio::test]
async fn health_records_round_trip_and_export() {
    let db = setup_db().await;
    let farmer = seed_user(&db, "health2").await;
    let animal = seed_buffalo(&db, farmer.id, "HLT-002").await;
    let health = HealthService::new(db.clone());

    health
        .add_record(
            farmer.id,
            AddHealthRecordInput {
                buffalo_id: animal.id,
                date: date(2024, 2, 20),
                record_type: "Treatment".to_string(),
                disease_name: Some("Mastitis".to_string()),
                symptoms: Some("Swollen udder".to_string()),
                treatment: Some("Intramammary antibiotics".to_string()),
                medicine: None,
                veterinarian: Some("Dr. Patel".to_string()),
                cost: dec!(800),
                follow_up_date: Some(date(2024, 2, 27)),
                notes: None,
            },
        )
        .await
        .unwrap();

    let records = health.list(farmer.id).await.unwrap();
    assert_eq!(records.len(), 1);

    let csv = health.export_csv(farmer.id).await.unwrap();
    assert!(csv.contains("Mastitis"));
    assert!(csv.lines().next().unwrap().contains("record_type"));
}
