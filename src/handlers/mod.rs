pub mod advisor;
pub mod analytics;
pub mod breeding;
pub mod calculators;
pub mod feed;
pub mod finance;
pub mod health;
pub mod herd;
pub mod production;
pub mod reference;
pub mod users;

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::config::AdvisorConfig;
use crate::errors::ServiceError;
use crate::services;

/// One instance of every domain service, shared through the app state.
#[derive(Clone)]
pub struct AppServices {
    pub users: services::users::UserService,
    pub herd: services::herd::HerdService,
    pub production: services::production::ProductionService,
    pub breeding: services::breeding::BreedingService,
    pub health: services::health::HealthService,
    pub feed: services::feed::FeedService,
    pub finance: services::finance::FinanceService,
    pub analytics: services::analytics::AnalyticsService,
    pub advisor: services::advisor::AdvisorService,
}

impl AppServices {
    pub fn new(
        db: Arc<DatabaseConnection>,
        advisor_config: AdvisorConfig,
    ) -> Result<Self, ServiceError> {
        Ok(Self {
            users: services::users::UserService::new(db.clone()),
            herd: services::herd::HerdService::new(db.clone()),
            production: services::production::ProductionService::new(db.clone()),
            breeding: services::breeding::BreedingService::new(db.clone()),
            health: services::health::HealthService::new(db.clone()),
            feed: services::feed::FeedService::new(db.clone()),
            finance: services::finance::FinanceService::new(db.clone()),
            analytics: services::analytics::AnalyticsService::new(db),
            advisor: services::advisor::AdvisorService::new(advisor_config)?,
        })
    }
}
