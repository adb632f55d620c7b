use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};
use utoipa::ToSchema;

use crate::entities::{buffalo, calf_record};
use crate::errors::ServiceError;
use crate::models::{parse_enum, AnimalStatus, CalfGender};
use crate::reference;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddBuffaloInput {
    pub tag_number: String,
    pub name: Option<String>,
    /// Must name a breed from the reference catalog.
    pub breed: String,
    pub date_of_birth: NaiveDate,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_price: Option<Decimal>,
    #[serde(default)]
    pub current_lactation: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddCalfInput {
    pub mother_id: i32,
    pub tag_number: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub birth_weight_kg: Option<f64>,
}

/// Herd inventory: buffaloes and their calves.
#[derive(Clone)]
pub struct HerdService {
    db: Arc<DatabaseConnection>,
}

impl HerdService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    #[instrument(skip(self, input), fields(tag = %input.tag_number))]
    pub async fn add_buffalo(
        &self,
        user_id: i32,
        input: AddBuffaloInput,
    ) -> Result<buffalo::Model, ServiceError> {
        if input.tag_number.trim().is_empty() {
            return Err(ServiceError::Validation("tag_number is required".to_string()));
        }
        if reference::find_breed(&input.breed).is_none() {
            return Err(ServiceError::Validation(format!(
                "unknown breed '{}'",
                input.breed
            )));
        }
        if input.current_lactation < 0 {
            return Err(ServiceError::Validation(
                "current_lactation must be non-negative".to_string(),
            ));
        }

        let model = buffalo::ActiveModel {
            user_id: Set(user_id),
            tag_number: Set(input.tag_number.trim().to_string()),
            name: Set(input.name),
            breed: Set(input.breed),
            date_of_birth: Set(input.date_of_birth),
            purchase_date: Set(input.purchase_date),
            purchase_price: Set(input.purchase_price),
            current_lactation: Set(input.current_lactation),
            status: Set(AnimalStatus::Active.to_string()),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let created = model
            .insert(&*self.db)
            .await
            .map_err(|e| ServiceError::from_db_err(e, "tag number already exists"))?;
        info!(buffalo_id = created.id, "buffalo added");
        Ok(created)
    }

    /// List the farmer's buffaloes, optionally filtered by status, ordered
    /// by tag number.
    pub async fn list_buffaloes(
        &self,
        user_id: i32,
        status: Option<String>,
    ) -> Result<Vec<buffalo::Model>, ServiceError> {
        let mut query = buffalo::Entity::find().filter(buffalo::Column::UserId.eq(user_id));
        if let Some(status) = status {
            let status: AnimalStatus = parse_enum(&status, "status")?;
            query = query.filter(buffalo::Column::Status.eq(status.to_string()));
        }
        Ok(query
            .order_by_asc(buffalo::Column::TagNumber)
            .all(&*self.db)
            .await?)
    }

    /// Fetch one buffalo, enforcing ownership.
    pub async fn get_buffalo(
        &self,
        user_id: i32,
        buffalo_id: i32,
    ) -> Result<buffalo::Model, ServiceError> {
        buffalo::Entity::find_by_id(buffalo_id)
            .filter(buffalo::Column::UserId.eq(user_id))
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("buffalo {buffalo_id} not found")))
    }

    #[instrument(skip(self, input), fields(tag = %input.tag_number))]
    pub async fn add_calf(
        &self,
        user_id: i32,
        input: AddCalfInput,
    ) -> Result<calf_record::Model, ServiceError> {
        // The dam must exist and belong to this farmer.
        self.get_buffalo(user_id, input.mother_id).await?;
        let gender: CalfGender = parse_enum(&input.gender, "gender")?;

        let model = calf_record::ActiveModel {
            user_id: Set(user_id),
            mother_id: Set(input.mother_id),
            tag_number: Set(input.tag_number.trim().to_string()),
            date_of_birth: Set(input.date_of_birth),
            gender: Set(gender.to_string()),
            birth_weight_kg: Set(input.birth_weight_kg),
            status: Set(AnimalStatus::Active.to_string()),
            ..Default::default()
        };

        model
            .insert(&*self.db)
            .await
            .map_err(|e| ServiceError::from_db_err(e, "calf tag number already exists"))
    }

    pub async fn list_calves(&self, user_id: i32) -> Result<Vec<calf_record::Model>, ServiceError> {
        Ok(calf_record::Entity::find()
            .filter(calf_record::Column::UserId.eq(user_id))
            .order_by_asc(calf_record::Column::TagNumber)
            .all(&*self.db)
            .await?)
    }
}
