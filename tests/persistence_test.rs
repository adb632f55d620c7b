use std::sync::Arc;

use buffalomitra_api::config::{AdvisorConfig, AppConfig};
use buffalomitra_api::db::{establish_connection, run_migrations};
use buffalomitra_api::services::users::{RegisterInput, UserService};

fn file_config(database_url: String) -> AppConfig {
    AppConfig {
        database_url,
        host: "127.0.0.1".to_string(),
        port: 0,
        environment: "test".to_string(),
        log_level: "warn".to_string(),
        log_json: false,
        auto_migrate: false,
        cors_allowed_origins: None,
        advisor: AdvisorConfig::default(),
    }
}

#[tokio::test]
async fn records_survive_a_reconnect_on_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("farm.db");
    let cfg = file_config(format!("sqlite://{}?mode=rwc", path.display()));

    let db = establish_connection(&cfg).await.expect("connect");
    run_migrations(&db).await.expect("migrations");

    let created = UserService::new(Arc::new(db))
        .register(RegisterInput {
            username: "ramesh".to_string(),
            password: "secret123".to_string(),
            full_name: "Ramesh Patel".to_string(),
            mobile: "9876543210".to_string(),
            email: None,
            district: "Kheda".to_string(),
            village: "Anand".to_string(),
            user_type: None,
        })
        .await
        .expect("register");

    let reopened = establish_connection(&cfg).await.expect("reconnect");
    let fetched = UserService::new(Arc::new(reopened))
        .get(created.id)
        .await
        .expect("fetch after reconnect");
    assert_eq!(fetched.username, "ramesh");
    assert_eq!(fetched.village, "Anand");
}
