use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};
use utoipa::ToSchema;

use crate::entities::{financial_record, labor_record, milk_buyer};
use crate::errors::ServiceError;
use crate::models::{parse_enum, TransactionType};
use crate::rules;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddTransactionInput {
    pub date: NaiveDate,
    /// e.g. "Milk Sale", "Feed", "Veterinary", "Labor".
    pub category: String,
    /// "Income" or "Expense".
    pub transaction_type: String,
    pub amount: Decimal,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddBuyerInput {
    pub buyer_name: String,
    pub contact: String,
    pub price_per_liter: Decimal,
    pub payment_terms: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddLaborInput {
    pub worker_name: String,
    pub role: String,
    pub monthly_salary: Decimal,
    pub join_date: NaiveDate,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FinancialSummary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub net_profit: Decimal,
}

/// Financial ledger, milk buyers, and labor roster.
#[derive(Clone)]
pub struct FinanceService {
    db: Arc<DatabaseConnection>,
}

impl FinanceService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    #[instrument(skip(self, input), fields(category = %input.category))]
    pub async fn add_transaction(
        &self,
        user_id: i32,
        input: AddTransactionInput,
    ) -> Result<financial_record::Model, ServiceError> {
        let transaction_type: TransactionType =
            parse_enum(&input.transaction_type, "transaction_type")?;
        if input.category.trim().is_empty() {
            return Err(ServiceError::Validation("category is required".to_string()));
        }
        if input.amount < Decimal::ZERO {
            return Err(ServiceError::Validation(
                "amount must be non-negative".to_string(),
            ));
        }

        let model = financial_record::ActiveModel {
            user_id: Set(user_id),
            date: Set(input.date),
            category: Set(input.category),
            transaction_type: Set(transaction_type.to_string()),
            amount: Set(input.amount),
            description: Set(input.description),
            ..Default::default()
        };

        let created = model.insert(&*self.db).await?;
        info!(record_id = created.id, "transaction added");
        Ok(created)
    }

    pub async fn list_transactions(
        &self,
        user_id: i32,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<financial_record::Model>, ServiceError> {
        let mut query =
            financial_record::Entity::find().filter(financial_record::Column::UserId.eq(user_id));
        if let Some(start) = start_date {
            query = query.filter(financial_record::Column::Date.gte(start));
        }
        if let Some(end) = end_date {
            query = query.filter(financial_record::Column::Date.lte(end));
        }
        Ok(query
            .order_by_desc(financial_record::Column::Date)
            .all(&*self.db)
            .await?)
    }

    /// Income and expense totals over an optional range. Empty data yields
    /// zero totals, not an error.
    pub async fn summary(
        &self,
        user_id: i32,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<FinancialSummary, ServiceError> {
        let records = self.list_transactions(user_id, start_date, end_date).await?;

        let mut total_income = Decimal::ZERO;
        let mut total_expense = Decimal::ZERO;
        for record in &records {
            if record.transaction_type == TransactionType::Income.to_string() {
                total_income += record.amount;
            } else {
                total_expense += record.amount;
            }
        }

        Ok(FinancialSummary {
            total_income,
            total_expense,
            net_profit: rules::net_profit(total_income, total_expense),
        })
    }

    #[instrument(skip(self, input), fields(buyer = %input.buyer_name))]
    pub async fn add_buyer(
        &self,
        user_id: i32,
        input: AddBuyerInput,
    ) -> Result<milk_buyer::Model, ServiceError> {
        if input.buyer_name.trim().is_empty() || input.contact.trim().is_empty() {
            return Err(ServiceError::Validation(
                "buyer_name and contact are required".to_string(),
            ));
        }

        let model = milk_buyer::ActiveModel {
            user_id: Set(user_id),
            buyer_name: Set(input.buyer_name),
            contact: Set(input.contact),
            price_per_liter: Set(input.price_per_liter),
            payment_terms: Set(input.payment_terms),
            active: Set(true),
            ..Default::default()
        };
        Ok(model.insert(&*self.db).await?)
    }

    pub async fn list_buyers(&self, user_id: i32) -> Result<Vec<milk_buyer::Model>, ServiceError> {
        Ok(milk_buyer::Entity::find()
            .filter(milk_buyer::Column::UserId.eq(user_id))
            .order_by_asc(milk_buyer::Column::BuyerName)
            .all(&*self.db)
            .await?)
    }

    #[instrument(skip(self, input), fields(worker = %input.worker_name))]
    pub async fn add_labor(
        &self,
        user_id: i32,
        input: AddLaborInput,
    ) -> Result<labor_record::Model, ServiceError> {
        if input.worker_name.trim().is_empty() {
            return Err(ServiceError::Validation("worker_name is required".to_string()));
        }
        if input.monthly_salary < Decimal::ZERO {
            return Err(ServiceError::Validation(
                "monthly_salary must be non-negative".to_string(),
            ));
        }

        let model = labor_record::ActiveModel {
            user_id: Set(user_id),
            worker_name: Set(input.worker_name),
            role: Set(input.role),
            monthly_salary: Set(input.monthly_salary),
            join_date: Set(input.join_date),
            active: Set(true),
            ..Default::default()
        };
        Ok(model.insert(&*self.db).await?)
    }

    pub async fn list_labor(&self, user_id: i32) -> Result<Vec<labor_record::Model>, ServiceError> {
        Ok(labor_record::Entity::find()
            .filter(labor_record::Column::UserId.eq(user_id))
            .order_by_asc(labor_record::Column::WorkerName)
            .all(&*self.db)
            .await?)
    }
}
