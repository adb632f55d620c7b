use serde::Serialize;

/// Profile of a buffalo breed. Ranges are descriptive strings as published
/// in husbandry references; they are informational and do not drive any
/// derived-value computation (gestation scheduling uses a single fixed
/// offset for all breeds).
#[derive(Debug, Clone, Serialize)]
pub struct BreedProfile {
    pub name: &'static str,
    pub origin: &'static str,
    pub avg_milk_yield_liters_per_day: &'static str,
    pub peak_yield_liters: &'static str,
    pub lactation_period_days: &'static str,
    pub fat_percentage: &'static str,
    pub snf_percentage: &'static str,
    pub calving_interval_months: &'static str,
    pub first_calving_age_months: &'static str,
    pub body_weight_kg: &'static str,
    pub characteristics: &'static str,
    pub price_range_inr: &'static str,
    pub maintenance_level: &'static str,
    pub heat_tolerance: &'static str,
    pub disease_resistance: &'static str,
    pub suitable_regions: &'static [&'static str],
}

pub static BREEDS: &[BreedProfile] = &[
    BreedProfile {
        name: "Murrah",
        origin: "Punjab, Haryana",
        avg_milk_yield_liters_per_day: "10-15",
        peak_yield_liters: "18-22",
        lactation_period_days: "280-305",
        fat_percentage: "7-8%",
        snf_percentage: "9-10%",
        calving_interval_months: "14-16",
        first_calving_age_months: "36-40",
        body_weight_kg: "500-650",
        characteristics: "Black color, tightly curled horns, wedge-shaped body",
        price_range_inr: "80,000-1,50,000",
        maintenance_level: "Medium",
        heat_tolerance: "Good",
        disease_resistance: "High",
        suitable_regions: &["Punjab", "Haryana", "Maharashtra", "Gujarat", "Rajasthan"],
    },
    BreedProfile {
        name: "Mehsana",
        origin: "Gujarat",
        avg_milk_yield_liters_per_day: "8-12",
        peak_yield_liters: "15-18",
        lactation_period_days: "270-300",
        fat_percentage: "7-8%",
        snf_percentage: "9-10%",
        calving_interval_months: "14-15",
        first_calving_age_months: "38-42",
        body_weight_kg: "450-550",
        characteristics: "Black to grey color, medium horns",
        price_range_inr: "60,000-1,20,000",
        maintenance_level: "Low",
        heat_tolerance: "Excellent",
        disease_resistance: "High",
        suitable_regions: &["Gujarat", "Rajasthan", "Maharashtra"],
    },
    BreedProfile {
        name: "Jaffarabadi",
        origin: "Gujarat",
        avg_milk_yield_liters_per_day: "10-14",
        peak_yield_liters: "18-20",
        lactation_period_days: "280-300",
        fat_percentage: "7-9%",
        snf_percentage: "9-11%",
        calving_interval_months: "15-17",
        first_calving_age_months: "40-45",
        body_weight_kg: "600-800",
        characteristics: "Large sized, black color, massive build",
        price_range_inr: "1,00,000-2,00,000",
        maintenance_level: "High",
        heat_tolerance: "Good",
        disease_resistance: "Medium",
        suitable_regions: &["Gujarat", "Maharashtra", "Karnataka"],
    },
    BreedProfile {
        name: "Surti",
        origin: "Gujarat",
        avg_milk_yield_liters_per_day: "7-10",
        peak_yield_liters: "12-15",
        lactation_period_days: "270-290",
        fat_percentage: "7-8%",
        snf_percentage: "9-10%",
        calving_interval_months: "14-15",
        first_calving_age_months: "36-40",
        body_weight_kg: "400-500",
        characteristics: "Small to medium size, light colored",
        price_range_inr: "50,000-1,00,000",
        maintenance_level: "Low",
        heat_tolerance: "Excellent",
        disease_resistance: "High",
        suitable_regions: &["Gujarat", "Maharashtra", "Rajasthan"],
    },
    BreedProfile {
        name: "Nagpuri",
        origin: "Maharashtra",
        avg_milk_yield_liters_per_day: "6-9",
        peak_yield_liters: "12-14",
        lactation_period_days: "260-280",
        fat_percentage: "7-8%",
        snf_percentage: "9-10%",
        calving_interval_months: "14-16",
        first_calving_age_months: "38-42",
        body_weight_kg: "450-550",
        characteristics: "Well adapted to Maharashtra climate",
        price_range_inr: "45,000-90,000",
        maintenance_level: "Low",
        heat_tolerance: "Excellent",
        disease_resistance: "High",
        suitable_regions: &["Maharashtra", "Madhya Pradesh"],
    },
];

/// Case-insensitive breed lookup.
pub fn find_breed(name: &str) -> Option<&'static BreedProfile> {
    BREEDS.iter().find(|b| b.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_five_breeds_present() {
        assert_eq!(BREEDS.len(), 5);
        assert!(find_breed("murrah").is_some());
        assert!(find_breed("Holstein").is_none());
    }
}
