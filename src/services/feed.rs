use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};
use utoipa::ToSchema;

use crate::entities::feed_stock;
use crate::errors::ServiceError;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpsertFeedStockInput {
    /// Upsert key within the farm (e.g. "Berseem", "Wheat Straw").
    pub name: String,
    /// Category, e.g. "Green Fodder", "Concentrate".
    pub feed_type: String,
    pub current_stock_kg: f64,
    pub reorder_level_kg: f64,
}

/// Feed stock levels. The single entity with an update path: writes are
/// upserts keyed by feed name within the farm.
#[derive(Clone)]
pub struct FeedService {
    db: Arc<DatabaseConnection>,
}

impl FeedService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    #[instrument(skip(self, input), fields(feed = %input.name))]
    pub async fn upsert_stock(
        &self,
        user_id: i32,
        input: UpsertFeedStockInput,
    ) -> Result<feed_stock::Model, ServiceError> {
        if input.name.trim().is_empty() {
            return Err(ServiceError::Validation("feed name is required".to_string()));
        }
        if input.current_stock_kg < 0.0 || input.reorder_level_kg < 0.0 {
            return Err(ServiceError::Validation(
                "stock quantities must be non-negative".to_string(),
            ));
        }

        let name = input.name.trim().to_string();
        let existing = feed_stock::Entity::find()
            .filter(feed_stock::Column::UserId.eq(user_id))
            .filter(feed_stock::Column::Name.eq(name.clone()))
            .one(&*self.db)
            .await?;

        let saved = match existing {
            Some(row) => {
                let mut active = row.into_active_model();
                active.feed_type = Set(input.feed_type);
                active.current_stock_kg = Set(input.current_stock_kg);
                active.reorder_level_kg = Set(input.reorder_level_kg);
                active.update(&*self.db).await?
            }
            None => {
                let model = feed_stock::ActiveModel {
                    user_id: Set(user_id),
                    name: Set(name),
                    feed_type: Set(input.feed_type),
                    current_stock_kg: Set(input.current_stock_kg),
                    reorder_level_kg: Set(input.reorder_level_kg),
                    ..Default::default()
                };
                model.insert(&*self.db).await?
            }
        };

        info!(
            feed = %saved.name,
            stock_kg = saved.current_stock_kg,
            "feed stock updated"
        );
        Ok(saved)
    }

    pub async fn list_stock(&self, user_id: i32) -> Result<Vec<feed_stock::Model>, ServiceError> {
        Ok(feed_stock::Entity::find()
            .filter(feed_stock::Column::UserId.eq(user_id))
            .order_by_asc(feed_stock::Column::Name)
            .all(&*self.db)
            .await?)
    }
}
