//! On-demand alert generation. Alerts are derived, never persisted: each
//! call rescans the current records against the date windows and stock
//! thresholds defined in the parent module.

use chrono::{Duration, NaiveDate};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use serde::Serialize;
use std::collections::HashMap;
use tracing::instrument;
use utoipa::ToSchema;

use super::{
    CALVING_ALERT_WINDOW_DAYS, CALVING_HIGH_PRIORITY_DAYS, VACCINATION_ALERT_WINDOW_DAYS,
    VACCINATION_HIGH_PRIORITY_DAYS,
};
use crate::entities::{breeding_record, buffalo, feed_stock, vaccination_record};
use crate::errors::ServiceError;
use crate::models::BreedingStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    Calving,
    Vaccination,
    Feed,
}

/// Ordered so that sorting puts high priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AlertPriority {
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Alert {
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub priority: AlertPriority,
    pub message: String,
    /// Absent for stock alerts, which have no date component.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

fn animal_label(buffaloes: &HashMap<i32, buffalo::Model>, id: i32) -> String {
    match buffaloes.get(&id) {
        Some(b) => match &b.name {
            Some(name) => format!("{} ({})", b.tag_number, name),
            None => b.tag_number.clone(),
        },
        None => format!("#{id}"),
    }
}

/// Scan breeding, vaccination, and feed records for the given farmer and
/// produce the merged alert list, sorted by priority then due date. The
/// three scans are independent and results are not deduplicated across
/// sources. Idempotent for fixed data and `as_of`.
#[instrument(skip(db))]
pub async fn generate_alerts(
    db: &DatabaseConnection,
    user_id: i32,
    as_of: NaiveDate,
) -> Result<Vec<Alert>, ServiceError> {
    let buffaloes: HashMap<i32, buffalo::Model> = buffalo::Entity::find()
        .filter(buffalo::Column::UserId.eq(user_id))
        .all(db)
        .await?
        .into_iter()
        .map(|b| (b.id, b))
        .collect();

    let mut alerts = Vec::new();

    // Calving: pregnant animals expected to calve within the window.
    let calving_horizon = as_of + Duration::days(CALVING_ALERT_WINDOW_DAYS);
    let pregnancies = breeding_record::Entity::find()
        .filter(breeding_record::Column::UserId.eq(user_id))
        .filter(breeding_record::Column::Status.eq(BreedingStatus::Pregnant.to_string()))
        .filter(breeding_record::Column::ExpectedCalvingDate.gte(as_of))
        .filter(breeding_record::Column::ExpectedCalvingDate.lte(calving_horizon))
        .all(db)
        .await?;

    for record in pregnancies {
        let days_until = (record.expected_calving_date - as_of).num_days();
        let priority = if days_until <= CALVING_HIGH_PRIORITY_DAYS {
            AlertPriority::High
        } else {
            AlertPriority::Medium
        };
        alerts.push(Alert {
            alert_type: AlertType::Calving,
            priority,
            message: format!(
                "Buffalo {} expected to calve in {} days ({})",
                animal_label(&buffaloes, record.buffalo_id),
                days_until,
                record.expected_calving_date
            ),
            due_date: Some(record.expected_calving_date),
        });
    }

    // Vaccination: doses coming due within the window.
    let vaccination_horizon = as_of + Duration::days(VACCINATION_ALERT_WINDOW_DAYS);
    let due_vaccinations = vaccination_record::Entity::find()
        .filter(vaccination_record::Column::UserId.eq(user_id))
        .filter(vaccination_record::Column::NextDueDate.gte(as_of))
        .filter(vaccination_record::Column::NextDueDate.lte(vaccination_horizon))
        .all(db)
        .await?;

    for record in due_vaccinations {
        let days_until = (record.next_due_date - as_of).num_days();
        let priority = if days_until <= VACCINATION_HIGH_PRIORITY_DAYS {
            AlertPriority::High
        } else {
            AlertPriority::Medium
        };
        alerts.push(Alert {
            alert_type: AlertType::Vaccination,
            priority,
            message: format!(
                "{} vaccination due for buffalo {} in {} days ({})",
                record.vaccine,
                animal_label(&buffaloes, record.buffalo_id),
                days_until,
                record.next_due_date
            ),
            due_date: Some(record.next_due_date),
        });
    }

    // Feed: anything at or below its reorder level. Always high priority.
    let stock_items = feed_stock::Entity::find()
        .filter(feed_stock::Column::UserId.eq(user_id))
        .all(db)
        .await?;

    for item in stock_items {
        if item.current_stock_kg <= item.reorder_level_kg {
            alerts.push(Alert {
                alert_type: AlertType::Feed,
                priority: AlertPriority::High,
                message: format!(
                    "{} stock low: {:.1} kg on hand, reorder at {:.1} kg",
                    item.name, item.current_stock_kg, item.reorder_level_kg
                ),
                due_date: None,
            });
        }
    }

    // Sort for deterministic responses.
    alerts.sort_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then_with(|| a.due_date.cmp(&b.due_date))
            .then_with(|| a.message.cmp(&b.message))
    });

    Ok(alerts)
}
