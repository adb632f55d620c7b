//! Stateless planning calculators: pure computations over query parameters,
//! nothing persisted.

use axum::{extract::Query, response::Json};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::ServiceError;
use crate::rules::{self, FeedRequirement, InsuranceEstimate, ProfitProjection};
use crate::{ApiResponse, ApiResult};

#[derive(Debug, Deserialize, ToSchema)]
pub struct FeedCalcQuery {
    pub num_animals: u32,
    pub avg_milk_yield: f64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct MilkPriceQuery {
    pub fat_percent: f64,
    pub snf_percent: f64,
    /// Optional quantity in liters to also return a total.
    pub quantity_liters: Option<f64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MilkPriceResult {
    pub price_per_liter: f64,
    pub total_amount: Option<f64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ProfitCalcQuery {
    pub lactating_count: u32,
    pub avg_milk_per_day: Decimal,
    pub milk_price_per_liter: Decimal,
    pub feed_cost_per_head_per_day: Decimal,
    #[serde(default)]
    pub medicine_monthly: Decimal,
    #[serde(default)]
    pub labor_monthly: Decimal,
    #[serde(default)]
    pub other_monthly: Decimal,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct InsuranceCalcQuery {
    pub num_animals: u32,
    pub avg_value: Decimal,
}

pub async fn feed_requirement(
    Query(query): Query<FeedCalcQuery>,
) -> ApiResult<FeedRequirement> {
    let requirement = rules::feed_requirement(query.num_animals, query.avg_milk_yield)?;
    Ok(Json(ApiResponse::success(requirement)))
}

pub async fn milk_price(Query(query): Query<MilkPriceQuery>) -> ApiResult<MilkPriceResult> {
    let price = rules::milk_price(query.fat_percent, query.snf_percent)?;
    let total_amount = match query.quantity_liters {
        Some(qty) if qty < 0.0 => {
            return Err(ServiceError::Validation(
                "quantity must be non-negative".to_string(),
            ))
        }
        Some(qty) => Some(price * qty),
        None => None,
    };
    Ok(Json(ApiResponse::success(MilkPriceResult {
        price_per_liter: price,
        total_amount,
    })))
}

pub async fn profit_projection(
    Query(query): Query<ProfitCalcQuery>,
) -> ApiResult<ProfitProjection> {
    let projection = rules::profit_projection(
        query.lactating_count,
        query.avg_milk_per_day,
        query.milk_price_per_liter,
        query.feed_cost_per_head_per_day,
        query.medicine_monthly,
        query.labor_monthly,
        query.other_monthly,
    )?;
    Ok(Json(ApiResponse::success(projection)))
}

pub async fn insurance_estimate(
    Query(query): Query<InsuranceCalcQuery>,
) -> ApiResult<InsuranceEstimate> {
    let estimate = rules::insurance_estimate(query.num_animals, query.avg_value)?;
    Ok(Json(ApiResponse::success(estimate)))
}
