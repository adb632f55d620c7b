//! OpenAPI document for the HTTP surface, served at `/openapi.json`.

use axum::response::Json;
use utoipa::OpenApi;

use crate::errors::ErrorResponse;
use crate::handlers;
use crate::rules;
use crate::services;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "BuffaloMitra API",
        version = "0.1.0",
        description = "Farm-management backend for buffalo dairy farms: herd \
            registry, milk production, breeding and heat tracking, health and \
            vaccination records, feed stock, finances, alerts, analytics, and \
            an advisory chat."
    ),
    components(schemas(
        ErrorResponse,
        services::users::RegisterInput,
        services::users::LoginInput,
        services::herd::AddBuffaloInput,
        services::herd::AddCalfInput,
        services::production::RecordProductionInput,
        services::breeding::RecordBreedingInput,
        services::breeding::RecordHeatInput,
        services::health::AddHealthRecordInput,
        services::health::RecordVaccinationInput,
        services::feed::UpsertFeedStockInput,
        services::finance::AddTransactionInput,
        services::finance::AddBuyerInput,
        services::finance::AddLaborInput,
        services::finance::FinancialSummary,
        services::analytics::DailyProduction,
        services::analytics::BuffaloPerformance,
        services::analytics::BreedComparison,
        services::analytics::MonthlyTrend,
        services::analytics::DashboardSummary,
        services::advisor::AskAdvisorInput,
        services::advisor::AdvisorReply,
        handlers::calculators::FeedCalcQuery,
        handlers::calculators::MilkPriceQuery,
        handlers::calculators::MilkPriceResult,
        handlers::calculators::ProfitCalcQuery,
        handlers::calculators::InsuranceCalcQuery,
        rules::FeedRequirement,
        rules::ProfitProjection,
        rules::InsuranceEstimate,
        rules::alerts::Alert,
    )),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "herd", description = "Buffalo and calf registry"),
        (name = "production", description = "Milk production records"),
        (name = "breeding", description = "Breeding calendar and heat log"),
        (name = "health", description = "Health and vaccination records"),
        (name = "feed", description = "Feed stock levels"),
        (name = "finance", description = "Transactions, buyers, and labor"),
        (name = "analytics", description = "Reports, dashboard, and alerts"),
        (name = "reference", description = "Built-in catalogs"),
        (name = "calculators", description = "Stateless planning calculators"),
        (name = "advisor", description = "Advisory chat"),
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
