use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};
use utoipa::ToSchema;

use crate::entities::{buffalo, health_record, vaccination_record};
use crate::errors::ServiceError;
use crate::export;
use crate::rules;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddHealthRecordInput {
    pub buffalo_id: i32,
    pub date: NaiveDate,
    /// e.g. "Treatment", "Checkup", "Deworming".
    pub record_type: String,
    pub disease_name: Option<String>,
    pub symptoms: Option<String>,
    pub treatment: Option<String>,
    pub medicine: Option<String>,
    pub veterinarian: Option<String>,
    #[serde(default)]
    pub cost: Decimal,
    pub follow_up_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RecordVaccinationInput {
    pub buffalo_id: i32,
    /// Must name a template from the vaccination catalog (e.g. "FMD").
    pub vaccine: String,
    pub date: NaiveDate,
}

/// Health and vaccination record keeping.
#[derive(Clone)]
pub struct HealthService {
    db: Arc<DatabaseConnection>,
}

impl HealthService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn owned_buffalo(
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

    #[instrument(skip(self, input), fields(buffalo_id = input.buffalo_id))]
    pub async fn add_record(
        &self,
        user_id: i32,
        input: AddHealthRecordInput,
    ) -> Result<health_record::Model, ServiceError> {
        let animal = self.owned_buffalo(user_id, input.buffalo_id).await?;
        if input.record_type.trim().is_empty() {
            return Err(ServiceError::Validation("record_type is required".to_string()));
        }
        if input.cost < Decimal::ZERO {
            return Err(ServiceError::Validation(
                "cost must be non-negative".to_string(),
            ));
        }

        let model = health_record::ActiveModel {
            user_id: Set(user_id),
            buffalo_id: Set(animal.id),
            date: Set(input.date),
            record_type: Set(input.record_type),
            disease_name: Set(input.disease_name),
            symptoms: Set(input.symptoms),
            treatment: Set(input.treatment),
            medicine: Set(input.medicine),
            veterinarian: Set(input.veterinarian),
            cost: Set(input.cost),
            follow_up_date: Set(input.follow_up_date),
            notes: Set(input.notes),
            ..Default::default()
        };

        let created = model.insert(&*self.db).await?;
        info!(record_id = created.id, "health record saved");
        Ok(created)
    }

    pub async fn list(&self, user_id: i32) -> Result<Vec<health_record::Model>, ServiceError> {
        Ok(health_record::Entity::find()
            .filter(health_record::Column::UserId.eq(user_id))
            .order_by_desc(health_record::Column::Date)
            .all(&*self.db)
            .await?)
    }

    pub async fn export_csv(&self, user_id: i32) -> Result<String, ServiceError> {
        let records = self.list(user_id).await?;
        let rows: Vec<Vec<String>> = records
            .iter()
            .map(|r| {
                vec![
                    r.date.to_string(),
                    r.buffalo_id.to_string(),
                    r.record_type.clone(),
                    r.disease_name.clone().unwrap_or_default(),
                    r.treatment.clone().unwrap_or_default(),
                    r.cost.to_string(),
                ]
            })
            .collect();
        Ok(export::to_csv(
            &["date", "buffalo_id", "record_type", "disease", "treatment", "cost"],
            &rows,
        ))
    }

    /// Record a vaccination dose. The next due date is derived from the
    /// template frequency; an unknown vaccine fails validation.
    #[instrument(skip(self, input), fields(buffalo_id = input.buffalo_id, vaccine = %input.vaccine))]
    pub async fn record_vaccination(
        &self,
        user_id: i32,
        input: RecordVaccinationInput,
    ) -> Result<vaccination_record::Model, ServiceError> {
        let animal = self.owned_buffalo(user_id, input.buffalo_id).await?;
        let next_due = rules::vaccination_due_date(input.date, &input.vaccine)?;

        let model = vaccination_record::ActiveModel {
            user_id: Set(user_id),
            buffalo_id: Set(animal.id),
            vaccine: Set(input.vaccine),
            date: Set(input.date),
            next_due_date: Set(next_due),
            ..Default::default()
        };

        let created = model.insert(&*self.db).await?;
        info!(record_id = created.id, next_due = %next_due, "vaccination recorded");
        Ok(created)
    }

    pub async fn list_vaccinations(
        &self,
        user_id: i32,
    ) -> Result<Vec<vaccination_record::Model>, ServiceError> {
        Ok(vaccination_record::Entity::find()
            .filter(vaccination_record::Column::UserId.eq(user_id))
            .order_by_asc(vaccination_record::Column::NextDueDate)
            .all(&*self.db)
            .await?)
    }
}
