mod common;

use assert_matches::assert_matches;
use buffalomitra_api::errors::ServiceError;
use buffalomitra_api::services::users::{LoginInput, RegisterInput, UserService};
use common::{seed_user, setup_db};

fn register_input(username: &str) -> RegisterInput {
    RegisterInput {
        username: username.to_string(),
        password: "secret123".to_string(),
        full_name: "Test Farmer".to_string(),
        mobile: "9876543210".to_string(),
        email: Some("farmer@example.com".to_string()),
        district: "Kheda".to_string(),
        village: "Anand".to_string(),
        user_type: None,
    }
}

#[tokio::test]
async fn register_then_login_roundtrip() {
    let db = setup_db().await;
    let service = UserService::new(db.clone());

    let created = service.register(register_input("ramesh")).await.unwrap();
    assert_eq!(created.username, "ramesh");
    assert_eq!(created.user_type, "Dairy Farmer");
    assert_ne!(created.password_hash, "secret123");

    let authenticated = service
        .authenticate(LoginInput {
            username: "ramesh".to_string(),
            password: "secret123".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(authenticated.id, created.id);
}

#[tokio::test]
async fn duplicate_username_is_conflict() {
    let db = setup_db().await;
    let service = UserService::new(db.clone());

    service.register(register_input("suresh")).await.unwrap();
    let result = service.register(register_input("suresh")).await;
    assert_matches!(result, Err(ServiceError::Duplicate(_)));
}

#[tokio::test]
async fn wrong_password_and_unknown_user_both_unauthorized() {
    let db = setup_db().await;
    let service = UserService::new(db.clone());
    seed_user(&db, "mahesh").await;

    let wrong_password = service
        .authenticate(LoginInput {
            username: "mahesh".to_string(),
            password: "not-the-password".to_string(),
        })
        .await;
    assert_matches!(wrong_password, Err(ServiceError::Unauthorized(_)));

    let unknown_user = service
        .authenticate(LoginInput {
            username: "nobody".to_string(),
            password: "secret123".to_string(),
        })
        .await;
    assert_matches!(unknown_user, Err(ServiceError::Unauthorized(_)));
}

#[tokio::test]
async fn short_password_and_bad_mobile_rejected() {
    let db = setup_db().await;
    let service = UserService::new(db.clone());

    let mut short = register_input("a1");
    short.password = "abc".to_string();
    assert_matches!(
        service.register(short).await,
        Err(ServiceError::Validation(_))
    );

    let mut bad_mobile = register_input("a2");
    bad_mobile.mobile = "12345".to_string();
    assert_matches!(
        service.register(bad_mobile).await,
        Err(ServiceError::Validation(_))
    );
}
