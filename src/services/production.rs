use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};
use utoipa::ToSchema;

use crate::entities::{buffalo, milk_production};
use crate::errors::ServiceError;
use crate::export;
use crate::rules;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RecordProductionInput {
    pub buffalo_id: i32,
    pub date: NaiveDate,
    pub morning_yield: f64,
    pub evening_yield: f64,
    pub fat_percentage: f64,
    pub snf_percentage: Option<f64>,
    pub price_per_liter: Decimal,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
pub struct DateRange {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Milk production record keeping.
#[derive(Clone)]
pub struct ProductionService {
    db: Arc<DatabaseConnection>,
}

impl ProductionService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Record one day's milking for a buffalo. The total is derived here;
    /// the client never supplies it. Duplicate same-day records are allowed.
    #[instrument(skip(self, input), fields(buffalo_id = input.buffalo_id))]
    pub async fn record(
        &self,
        user_id: i32,
        input: RecordProductionInput,
    ) -> Result<milk_production::Model, ServiceError> {
        // Ownership check before any write.
        let animal = buffalo::Entity::find_by_id(input.buffalo_id)
            .filter(buffalo::Column::UserId.eq(user_id))
            .one(&*self.db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("buffalo {} not found", input.buffalo_id))
            })?;

        let total = rules::total_yield(input.morning_yield, input.evening_yield)?;
        if input.fat_percentage < 0.0 {
            return Err(ServiceError::Validation(
                "fat percentage must be non-negative".to_string(),
            ));
        }

        let model = milk_production::ActiveModel {
            user_id: Set(user_id),
            buffalo_id: Set(animal.id),
            date: Set(input.date),
            morning_yield: Set(input.morning_yield),
            evening_yield: Set(input.evening_yield),
            total_yield: Set(total),
            fat_percentage: Set(input.fat_percentage),
            snf_percentage: Set(input.snf_percentage),
            price_per_liter: Set(input.price_per_liter),
            notes: Set(input.notes),
            ..Default::default()
        };

        let created = model.insert(&*self.db).await?;
        info!(record_id = created.id, total_yield = total, "production recorded");
        Ok(created)
    }

    /// List records over an optional date range, newest first.
    pub async fn list(
        &self,
        user_id: i32,
        range: DateRange,
    ) -> Result<Vec<milk_production::Model>, ServiceError> {
        let mut query =
            milk_production::Entity::find().filter(milk_production::Column::UserId.eq(user_id));
        if let Some(start) = range.start_date {
            query = query.filter(milk_production::Column::Date.gte(start));
        }
        if let Some(end) = range.end_date {
            query = query.filter(milk_production::Column::Date.lte(end));
        }
        Ok(query
            .order_by_desc(milk_production::Column::Date)
            .all(&*self.db)
            .await?)
    }

    /// Render records over a range as CSV for download.
    pub async fn export_csv(&self, user_id: i32, range: DateRange) -> Result<String, ServiceError> {
        let records = self.list(user_id, range).await?;
        let rows: Vec<Vec<String>> = records
            .iter()
            .map(|r| {
                vec![
                    r.date.to_string(),
                    r.buffalo_id.to_string(),
                    format!("{:.1}", r.morning_yield),
                    format!("{:.1}", r.evening_yield),
                    format!("{:.1}", r.total_yield),
                    format!("{:.2}", r.fat_percentage),
                    r.price_per_liter.to_string(),
                ]
            })
            .collect();
        Ok(export::to_csv(
            &[
                "date",
                "buffalo_id",
                "morning_yield",
                "evening_yield",
                "total_yield",
                "fat_percentage",
                "price_per_liter",
            ],
            &rows,
        ))
    }
}
