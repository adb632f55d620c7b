use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use crate::entities::{buffalo, milk_production};
use crate::errors::ServiceError;
use crate::models::AnimalStatus;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DailyProduction {
    pub date: NaiveDate,
    pub total_yield: f64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BuffaloPerformance {
    pub buffalo_id: i32,
    pub tag_number: String,
    pub name: Option<String>,
    pub breed: String,
    pub avg_yield: f64,
    pub avg_fat: f64,
    pub record_count: u64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BreedComparison {
    pub breed: String,
    pub animal_count: u64,
    pub avg_yield: f64,
    pub avg_fat: f64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MonthlyTrend {
    /// "YYYY-MM".
    pub year_month: String,
    pub total_milk: f64,
    pub avg_fat: f64,
    pub active_animals: u64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DashboardSummary {
    pub total_buffaloes: u64,
    pub lactating: u64,
    pub today_milk: f64,
    /// Mean total yield per record over the trailing 30 days.
    pub avg_daily_30d: f64,
    pub monthly_revenue: Decimal,
}

/// Read-only aggregations over production and herd records. Every query is
/// idempotent and returns empty output for empty data.
#[derive(Clone)]
pub struct AnalyticsService {
    db: Arc<DatabaseConnection>,
}

impl AnalyticsService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn production_between(
        &self,
        user_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<milk_production::Model>, ServiceError> {
        Ok(milk_production::Entity::find()
            .filter(milk_production::Column::UserId.eq(user_id))
            .filter(milk_production::Column::Date.gte(start))
            .filter(milk_production::Column::Date.lte(end))
            .all(&*self.db)
            .await?)
    }

    /// Grouped daily totals over an inclusive date range, ascending.
    #[instrument(skip(self))]
    pub async fn daily_production_series(
        &self,
        user_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyProduction>, ServiceError> {
        let records = self.production_between(user_id, start, end).await?;

        let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for record in records {
            *by_date.entry(record.date).or_insert(0.0) += record.total_yield;
        }

        Ok(by_date
            .into_iter()
            .map(|(date, total_yield)| DailyProduction { date, total_yield })
            .collect())
    }

    /// Per-animal performance over a trailing window. Only animals with at
    /// least one record appear; averages are arithmetic means over records.
    #[instrument(skip(self))]
    pub async fn buffalo_performance(
        &self,
        user_id: i32,
        as_of: NaiveDate,
        window_days: u32,
    ) -> Result<Vec<BuffaloPerformance>, ServiceError> {
        let start = as_of - Duration::days(i64::from(window_days));
        let records = self.production_between(user_id, start, as_of).await?;

        let mut grouped: HashMap<i32, (f64, f64, u64)> = HashMap::new();
        for record in records {
            let entry = grouped.entry(record.buffalo_id).or_insert((0.0, 0.0, 0));
            entry.0 += record.total_yield;
            entry.1 += record.fat_percentage;
            entry.2 += 1;
        }

        let animals: HashMap<i32, buffalo::Model> = buffalo::Entity::find()
            .filter(buffalo::Column::UserId.eq(user_id))
            .all(&*self.db)
            .await?
            .into_iter()
            .map(|b| (b.id, b))
            .collect();

        let mut result: Vec<BuffaloPerformance> = grouped
            .into_iter()
            .filter_map(|(id, (yield_sum, fat_sum, count))| {
                let animal = animals.get(&id)?;
                let n = count as f64;
                Some(BuffaloPerformance {
                    buffalo_id: id,
                    tag_number: animal.tag_number.clone(),
                    name: animal.name.clone(),
                    breed: animal.breed.clone(),
                    avg_yield: yield_sum / n,
                    avg_fat: fat_sum / n,
                    record_count: count,
                })
            })
            .collect();
        result.sort_by(|a, b| b.avg_yield.total_cmp(&a.avg_yield));
        Ok(result)
    }

    /// Herd performance grouped by breed over a trailing window.
    #[instrument(skip(self))]
    pub async fn breed_comparison(
        &self,
        user_id: i32,
        as_of: NaiveDate,
        window_days: u32,
    ) -> Result<Vec<BreedComparison>, ServiceError> {
        let per_animal = self
            .buffalo_performance(user_id, as_of, window_days)
            .await?;

        let mut grouped: BTreeMap<String, (f64, f64, u64, u64)> = BTreeMap::new();
        for perf in per_animal {
            let entry = grouped.entry(perf.breed).or_insert((0.0, 0.0, 0, 0));
            let n = perf.record_count as f64;
            entry.0 += perf.avg_yield * n;
            entry.1 += perf.avg_fat * n;
            entry.2 += perf.record_count;
            entry.3 += 1;
        }

        Ok(grouped
            .into_iter()
            .map(|(breed, (yield_sum, fat_sum, records, animals))| {
                let n = records as f64;
                BreedComparison {
                    breed,
                    animal_count: animals,
                    avg_yield: yield_sum / n,
                    avg_fat: fat_sum / n,
                }
            })
            .collect())
    }

    /// Month-by-month totals over a trailing number of months, ascending by
    /// year-month.
    #[instrument(skip(self))]
    pub async fn monthly_trends(
        &self,
        user_id: i32,
        as_of: NaiveDate,
        months: u32,
    ) -> Result<Vec<MonthlyTrend>, ServiceError> {
        let start = as_of - Duration::days(i64::from(months) * 30);
        let records = self.production_between(user_id, start, as_of).await?;

        let mut grouped: BTreeMap<String, (f64, f64, u64, HashSet<i32>)> = BTreeMap::new();
        for record in records {
            let key = format!("{:04}-{:02}", record.date.year(), record.date.month());
            let entry = grouped
                .entry(key)
                .or_insert_with(|| (0.0, 0.0, 0, HashSet::new()));
            entry.0 += record.total_yield;
            entry.1 += record.fat_percentage;
            entry.2 += 1;
            entry.3.insert(record.buffalo_id);
        }

        Ok(grouped
            .into_iter()
            .map(|(year_month, (total, fat_sum, count, animals))| MonthlyTrend {
                year_month,
                total_milk: total,
                avg_fat: fat_sum / count as f64,
                active_animals: animals.len() as u64,
            })
            .collect())
    }

    /// Headline numbers for the landing dashboard.
    #[instrument(skip(self))]
    pub async fn dashboard(
        &self,
        user_id: i32,
        today: NaiveDate,
    ) -> Result<DashboardSummary, ServiceError> {
        let herd = buffalo::Entity::find()
            .filter(buffalo::Column::UserId.eq(user_id))
            .filter(buffalo::Column::Status.eq(AnimalStatus::Active.to_string()))
            .all(&*self.db)
            .await?;
        let total_buffaloes = herd.len() as u64;
        let lactating = herd.iter().filter(|b| b.current_lactation > 0).count() as u64;

        let month_start = today - Duration::days(30);
        let records = self.production_between(user_id, month_start, today).await?;

        let today_milk: f64 = records
            .iter()
            .filter(|r| r.date == today)
            .map(|r| r.total_yield)
            .sum();
        let avg_daily_30d = if records.is_empty() {
            0.0
        } else {
            records.iter().map(|r| r.total_yield).sum::<f64>() / records.len() as f64
        };
        let monthly_revenue: Decimal = records
            .iter()
            .map(|r| {
                Decimal::from_f64_retain(r.total_yield).unwrap_or(Decimal::ZERO)
                    * r.price_per_liter
            })
            .sum();

        Ok(DashboardSummary {
            total_buffaloes,
            lactating,
            today_milk,
            avg_daily_30d,
            monthly_revenue,
        })
    }
}
