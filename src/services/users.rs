use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};
use utoipa::ToSchema;

use crate::entities::user;
use crate::errors::ServiceError;

const MIN_PASSWORD_LEN: usize = 6;
const MOBILE_DIGITS: usize = 10;
const DEFAULT_USER_TYPE: &str = "Dairy Farmer";

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterInput {
    pub username: String,
    pub password: String,
    pub full_name: String,
    /// 10-digit mobile number.
    pub mobile: String,
    pub email: Option<String>,
    pub district: String,
    pub village: String,
    /// Defaults to "Dairy Farmer".
    pub user_type: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Account management: registration and credential checks. No session or
/// token protocol; callers pass the user id explicitly on every request.
#[derive(Clone)]
pub struct UserService {
    db: Arc<DatabaseConnection>,
}

impl UserService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Create an account. All input checks run before any persistence call;
    /// a taken username surfaces as `Duplicate`.
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn register(&self, input: RegisterInput) -> Result<user::Model, ServiceError> {
        validate_registration(&input)?;

        let password_hash = hash_password(&input.password)?;
        let model = user::ActiveModel {
            username: Set(input.username.trim().to_string()),
            password_hash: Set(password_hash),
            full_name: Set(input.full_name.trim().to_string()),
            mobile: Set(input.mobile),
            email: Set(input.email),
            district: Set(input.district),
            village: Set(input.village),
            user_type: Set(input
                .user_type
                .unwrap_or_else(|| DEFAULT_USER_TYPE.to_string())),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let created = model
            .insert(&*self.db)
            .await
            .map_err(|e| ServiceError::from_db_err(e, "username already exists"))?;
        info!(user_id = created.id, "user registered");
        Ok(created)
    }

    /// Verify credentials and return the profile. The failure message does
    /// not distinguish unknown username from wrong password.
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn authenticate(&self, input: LoginInput) -> Result<user::Model, ServiceError> {
        let found = user::Entity::find()
            .filter(user::Column::Username.eq(input.username.trim()))
            .one(&*self.db)
            .await?;

        let Some(account) = found else {
            return Err(ServiceError::Unauthorized("invalid credentials".to_string()));
        };

        if verify_password(&input.password, &account.password_hash)? {
            Ok(account)
        } else {
            Err(ServiceError::Unauthorized("invalid credentials".to_string()))
        }
    }

    /// Fetch a profile by id.
    pub async fn get(&self, user_id: i32) -> Result<user::Model, ServiceError> {
        user::Entity::find_by_id(user_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("user {user_id} not found")))
    }
}

fn validate_registration(input: &RegisterInput) -> Result<(), ServiceError> {
    let required = [
        ("username", &input.username),
        ("full_name", &input.full_name),
        ("district", &input.district),
        ("village", &input.village),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(ServiceError::Validation(format!("{field} is required")));
        }
    }
    if input.password.len() < MIN_PASSWORD_LEN {
        return Err(ServiceError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    if input.mobile.len() != MOBILE_DIGITS || !input.mobile.chars().all(|c| c.is_ascii_digit()) {
        return Err(ServiceError::Validation(
            "mobile must be a 10-digit number".to_string(),
        ));
    }
    Ok(())
}

fn hash_password(password: &str) -> Result<String, ServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| ServiceError::Internal(format!("password hashing failed: {e}")))
}

fn verify_password(password: &str, stored_hash: &str) -> Result<bool, ServiceError> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| ServiceError::Internal(format!("stored password hash invalid: {e}")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> RegisterInput {
        RegisterInput {
            username: "ramesh".into(),
            password: "secret1".into(),
            full_name: "Ramesh Patil".into(),
            mobile: "9876543210".into(),
            email: None,
            district: "Pune".into(),
            village: "Shirur".into(),
            user_type: None,
        }
    }

    #[test]
    fn registration_validation_catches_bad_input() {
        let mut short_pw = input();
        short_pw.password = "abc".into();
        assert!(validate_registration(&short_pw).is_err());

        let mut bad_mobile = input();
        bad_mobile.mobile = "12345".into();
        assert!(validate_registration(&bad_mobile).is_err());

        let mut alpha_mobile = input();
        alpha_mobile.mobile = "987654321x".into();
        assert!(validate_registration(&alpha_mobile).is_err());

        assert!(validate_registration(&input()).is_ok());
    }

    #[test]
    fn password_hash_round_trip() {
        let hash = hash_password("secret1").unwrap();
        assert_ne!(hash, "secret1");
        assert!(verify_password("secret1", &hash).unwrap());
        assert!(!verify_password("wrong", &hash).unwrap());
    }
}
