use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};
use utoipa::ToSchema;

use crate::entities::{breeding_record, buffalo, heat_event};
use crate::errors::ServiceError;
use crate::models::{parse_enum, BreedingStatus, BreedingType, HeatIntensity};
use crate::rules;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RecordBreedingInput {
    pub buffalo_id: i32,
    pub breeding_date: NaiveDate,
    /// "Natural" or "AI".
    pub breeding_type: String,
    pub bull_details: Option<String>,
    /// Defaults to "Bred".
    pub status: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RecordHeatInput {
    pub buffalo_id: i32,
    pub date: NaiveDate,
    /// "Mild", "Moderate", or "Strong".
    pub intensity: String,
    #[serde(default)]
    pub bred: bool,
    pub notes: Option<String>,
}

/// Breeding calendar and heat observation log.
#[derive(Clone)]
pub struct BreedingService {
    db: Arc<DatabaseConnection>,
}

impl BreedingService {
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

    /// Record a breeding. The expected calving date is derived with the
    /// fixed gestation offset, never taken from the client.
    #[instrument(skip(self, input), fields(buffalo_id = input.buffalo_id))]
    pub async fn record(
        &self,
        user_id: i32,
        input: RecordBreedingInput,
    ) -> Result<breeding_record::Model, ServiceError> {
        let animal = self.owned_buffalo(user_id, input.buffalo_id).await?;
        let breeding_type: BreedingType = parse_enum(&input.breeding_type, "breeding_type")?;
        let status: BreedingStatus = match input.status.as_deref() {
            Some(s) => parse_enum(s, "status")?,
            None => BreedingStatus::Bred,
        };
        let expected = rules::expected_calving_date(input.breeding_date);

        let model = breeding_record::ActiveModel {
            user_id: Set(user_id),
            buffalo_id: Set(animal.id),
            breeding_date: Set(input.breeding_date),
            breeding_type: Set(breeding_type.to_string()),
            bull_details: Set(input.bull_details),
            expected_calving_date: Set(expected),
            actual_calving_date: Set(None),
            calf_gender: Set(None),
            status: Set(status.to_string()),
            notes: Set(input.notes),
            ..Default::default()
        };

        let created = model.insert(&*self.db).await?;
        info!(
            record_id = created.id,
            expected_calving = %expected,
            "breeding recorded"
        );
        Ok(created)
    }

    /// Breeding calendar, soonest expected calving first.
    pub async fn list(
        &self,
        user_id: i32,
        status: Option<String>,
    ) -> Result<Vec<breeding_record::Model>, ServiceError> {
        let mut query =
            breeding_record::Entity::find().filter(breeding_record::Column::UserId.eq(user_id));
        if let Some(status) = status {
            let status: BreedingStatus = parse_enum(&status, "status")?;
            query = query.filter(breeding_record::Column::Status.eq(status.to_string()));
        }
        Ok(query
            .order_by_asc(breeding_record::Column::ExpectedCalvingDate)
            .all(&*self.db)
            .await?)
    }

    #[instrument(skip(self, input), fields(buffalo_id = input.buffalo_id))]
    pub async fn record_heat(
        &self,
        user_id: i32,
        input: RecordHeatInput,
    ) -> Result<heat_event::Model, ServiceError> {
        let animal = self.owned_buffalo(user_id, input.buffalo_id).await?;
        let intensity: HeatIntensity = parse_enum(&input.intensity, "intensity")?;

        let model = heat_event::ActiveModel {
            user_id: Set(user_id),
            buffalo_id: Set(animal.id),
            date: Set(input.date),
            intensity: Set(intensity.to_string()),
            bred: Set(input.bred),
            notes: Set(input.notes),
            ..Default::default()
        };
        Ok(model.insert(&*self.db).await?)
    }

    pub async fn list_heat_events(
        &self,
        user_id: i32,
    ) -> Result<Vec<heat_event::Model>, ServiceError> {
        Ok(heat_event::Entity::find()
            .filter(heat_event::Column::UserId.eq(user_id))
            .order_by_desc(heat_event::Column::Date)
            .all(&*self.db)
            .await?)
    }
}
