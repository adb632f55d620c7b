//! Domain rules: derived values computed at write time and on-demand
//! calculators. Everything here is a pure function over validated inputs;
//! persistence is the caller's concern.

pub mod alerts;

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use utoipa::ToSchema;

use crate::errors::ServiceError;
use crate::reference;

/// Fixed gestation offset applied to every breeding record. Breed profiles
/// quote gestation ranges of 280-310 days, but scheduling deliberately uses
/// this single constant for all breeds.
pub const GESTATION_DAYS: i64 = 310;

/// Days ahead a pregnant buffalo's expected calving triggers an alert.
pub const CALVING_ALERT_WINDOW_DAYS: i64 = 30;
/// Days-until at or below which a calving alert is high priority.
pub const CALVING_HIGH_PRIORITY_DAYS: i64 = 7;
/// Days ahead a due vaccination triggers an alert.
pub const VACCINATION_ALERT_WINDOW_DAYS: i64 = 15;
/// Days-until at or below which a vaccination alert is high priority.
pub const VACCINATION_HIGH_PRIORITY_DAYS: i64 = 3;

/// Total daily yield is always morning + evening; both must be non-negative.
pub fn total_yield(morning: f64, evening: f64) -> Result<f64, ServiceError> {
    if morning < 0.0 || evening < 0.0 {
        return Err(ServiceError::Validation(
            "milk yields must be non-negative".to_string(),
        ));
    }
    Ok(morning + evening)
}

/// Expected calving date: breeding date plus the fixed gestation offset.
pub fn expected_calving_date(breeding_date: NaiveDate) -> NaiveDate {
    breeding_date + Duration::days(GESTATION_DAYS)
}

/// Next due date for a vaccination: date + template frequency in months,
/// where a month counts as 30 days.
pub fn vaccination_due_date(date: NaiveDate, vaccine: &str) -> Result<NaiveDate, ServiceError> {
    let template = reference::find_vaccine(vaccine).ok_or_else(|| {
        ServiceError::Validation(format!("unknown vaccine type '{vaccine}'"))
    })?;
    Ok(date + Duration::days(i64::from(template.frequency_months) * 30))
}

/// Daily feed plan for a herd, with per-kg policy rates.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FeedRequirement {
    pub green_fodder_kg: f64,
    pub dry_fodder_kg: f64,
    pub concentrate_kg: f64,
    pub mineral_kg: f64,
    pub daily_cost: f64,
    pub monthly_cost: f64,
}

/// Herd feed requirement. Quantities per head: 30 kg green, 10 kg dry,
/// concentrate at 1 kg per 2.5 L of milk, 75 g mineral mix. Costs use fixed
/// policy rates per kg (green 3, dry 4, concentrate 25, mineral 50).
pub fn feed_requirement(
    num_animals: u32,
    avg_milk_yield: f64,
) -> Result<FeedRequirement, ServiceError> {
    if num_animals == 0 {
        return Err(ServiceError::Validation(
            "herd size must be at least 1".to_string(),
        ));
    }
    if avg_milk_yield < 0.0 {
        return Err(ServiceError::Validation(
            "average milk yield must be non-negative".to_string(),
        ));
    }

    let n = f64::from(num_animals);
    let green_fodder_kg = 30.0 * n;
    let dry_fodder_kg = 10.0 * n;
    let concentrate_kg = (avg_milk_yield / 2.5) * n;
    let mineral_kg = 0.075 * n;
    let daily_cost =
        green_fodder_kg * 3.0 + dry_fodder_kg * 4.0 + concentrate_kg * 25.0 + mineral_kg * 50.0;

    Ok(FeedRequirement {
        green_fodder_kg,
        dry_fodder_kg,
        concentrate_kg,
        mineral_kg,
        daily_cost,
        monthly_cost: daily_cost * 30.0,
    })
}

/// Per-liter milk price from quality measures: 40 base + 8/fat point +
/// 6/SNF point.
pub fn milk_price(fat_percent: f64, snf_percent: f64) -> Result<f64, ServiceError> {
    if fat_percent < 0.0 || snf_percent < 0.0 {
        return Err(ServiceError::Validation(
            "fat and SNF percentages must be non-negative".to_string(),
        ));
    }
    Ok(40.0 + fat_percent * 8.0 + snf_percent * 6.0)
}

/// Net profit is income minus expense; display rounding is the caller's.
pub fn net_profit(income: Decimal, expense: Decimal) -> Decimal {
    income - expense
}

/// Monthly profit projection for a lactating herd.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProfitProjection {
    pub monthly_income: Decimal,
    pub monthly_expense: Decimal,
    pub monthly_profit: Decimal,
    pub annual_profit: Decimal,
    /// Annual profit over annual expense, as a percentage. Zero when there
    /// is no expense.
    pub roi_percent: Decimal,
}

#[allow(clippy::too_many_arguments)]
pub fn profit_projection(
    lactating_count: u32,
    avg_milk_per_day: Decimal,
    milk_price_per_liter: Decimal,
    feed_cost_per_head_per_day: Decimal,
    medicine_monthly: Decimal,
    labor_monthly: Decimal,
    other_monthly: Decimal,
) -> Result<ProfitProjection, ServiceError> {
    if lactating_count == 0 {
        return Err(ServiceError::Validation(
            "herd size must be at least 1".to_string(),
        ));
    }

    let n = Decimal::from(lactating_count);
    let monthly_income = n * avg_milk_per_day * milk_price_per_liter * dec!(30);
    let monthly_expense =
        feed_cost_per_head_per_day * n * dec!(30) + medicine_monthly + labor_monthly + other_monthly;
    let monthly_profit = monthly_income - monthly_expense;
    let annual_profit = monthly_profit * dec!(12);
    let annual_expense = monthly_expense * dec!(12);
    let roi_percent = if annual_expense > Decimal::ZERO {
        annual_profit / annual_expense * dec!(100)
    } else {
        Decimal::ZERO
    };

    Ok(ProfitProjection {
        monthly_income,
        monthly_expense,
        monthly_profit,
        annual_profit,
        roi_percent,
    })
}

/// Livestock insurance estimate: 3% annual premium with a 50% government
/// subsidy on it.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InsuranceEstimate {
    pub total_sum_insured: Decimal,
    pub annual_premium: Decimal,
    pub government_subsidy: Decimal,
    pub farmer_premium: Decimal,
}

pub fn insurance_estimate(
    num_animals: u32,
    avg_value: Decimal,
) -> Result<InsuranceEstimate, ServiceError> {
    if num_animals == 0 {
        return Err(ServiceError::Validation(
            "herd size must be at least 1".to_string(),
        ));
    }
    if avg_value <= Decimal::ZERO {
        return Err(ServiceError::Validation(
            "animal value must be positive".to_string(),
        ));
    }

    let total_sum_insured = Decimal::from(num_animals) * avg_value;
    let annual_premium = total_sum_insured * dec!(0.03);
    let government_subsidy = annual_premium * dec!(0.5);

    Ok(InsuranceEstimate {
        total_sum_insured,
        annual_premium,
        government_subsidy,
        farmer_premium: annual_premium - government_subsidy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn total_yield_is_the_sum() {
        assert_eq!(total_yield(5.5, 4.5).unwrap(), 10.0);
        assert_eq!(total_yield(0.0, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn negative_yield_rejected() {
        assert!(total_yield(-0.1, 4.0).is_err());
        assert!(total_yield(4.0, -0.1).is_err());
    }

    #[test]
    fn calving_date_is_plus_310_days_for_every_breed() {
        assert_eq!(
            expected_calving_date(date(2024, 1, 1)),
            date(2024, 11, 6)
        );
        // Leap-year boundary
        assert_eq!(
            expected_calving_date(date(2023, 6, 15)),
            date(2024, 4, 20)
        );
    }

    #[test]
    fn fmd_due_date_is_plus_180_days() {
        assert_eq!(
            vaccination_due_date(date(2024, 1, 15), "FMD").unwrap(),
            date(2024, 7, 13)
        );
    }

    #[test]
    fn unknown_vaccine_rejected() {
        assert!(vaccination_due_date(date(2024, 1, 15), "Rabies").is_err());
    }

    #[test]
    fn feed_requirement_reference_case() {
        let req = feed_requirement(5, 10.0).unwrap();
        assert_eq!(req.green_fodder_kg, 150.0);
        assert_eq!(req.dry_fodder_kg, 50.0);
        assert_eq!(req.concentrate_kg, 20.0);
        assert_eq!(req.mineral_kg, 0.375);
        assert_eq!(req.daily_cost, 1168.75);
        assert_eq!(req.monthly_cost, 35062.5);
    }

    #[test]
    fn feed_requirement_rejects_empty_herd() {
        assert!(feed_requirement(0, 10.0).is_err());
    }

    #[test]
    fn milk_price_linear_model() {
        assert_eq!(milk_price(7.5, 9.0).unwrap(), 154.0);
        assert_eq!(milk_price(0.0, 0.0).unwrap(), 40.0);
    }

    #[test]
    fn net_profit_is_income_minus_expense() {
        use rust_decimal_macros::dec;
        assert_eq!(net_profit(dec!(1000), dec!(250)), dec!(750));
        assert_eq!(net_profit(dec!(100), dec!(250)), dec!(-150));
    }

    #[test]
    fn profit_projection_example() {
        use rust_decimal_macros::dec;
        let p = profit_projection(
            5,
            dec!(10),
            dec!(60),
            dec!(250),
            dec!(3000),
            dec!(10000),
            dec!(5000),
        )
        .unwrap();
        assert_eq!(p.monthly_income, dec!(90000));
        assert_eq!(p.monthly_expense, dec!(55500));
        assert_eq!(p.monthly_profit, dec!(34500));
        assert_eq!(p.annual_profit, dec!(414000));
    }

    #[test]
    fn insurance_estimate_subsidy_split() {
        use rust_decimal_macros::dec;
        let e = insurance_estimate(5, dec!(100000)).unwrap();
        assert_eq!(e.total_sum_insured, dec!(500000));
        assert_eq!(e.annual_premium, dec!(15000.00));
        assert_eq!(e.government_subsidy, dec!(7500.000));
        assert_eq!(e.farmer_premium, dec!(7500.000));
    }
}
