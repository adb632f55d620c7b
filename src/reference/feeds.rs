use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct FeedCategory {
    pub name: &'static str,
    pub items: &'static [&'static str],
    pub requirement_kg_per_day: &'static str,
    pub cost_per_kg_inr: &'static str,
    pub benefits: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula: Option<&'static str>,
}

pub static FEED_CATEGORIES: &[FeedCategory] = &[
    FeedCategory {
        name: "Green Fodder",
        items: &[
            "Berseem",
            "Maize",
            "Jowar",
            "Bajra",
            "Lucerne",
            "Napier Grass",
            "Guinea Grass",
        ],
        requirement_kg_per_day: "25-35",
        cost_per_kg_inr: "2-4",
        benefits: "High moisture, good palatability, rich in vitamins",
        formula: None,
    },
    FeedCategory {
        name: "Dry Fodder",
        items: &[
            "Wheat Straw",
            "Paddy Straw",
            "Sorghum Stover",
            "Groundnut Haulms",
        ],
        requirement_kg_per_day: "8-12",
        cost_per_kg_inr: "3-5",
        benefits: "Bulk feed, provides fiber",
        formula: None,
    },
    FeedCategory {
        name: "Concentrate",
        items: &[
            "Cattle Feed",
            "Cotton Seed Cake",
            "Groundnut Cake",
            "Soybean Meal",
            "Maize",
            "Wheat Bran",
        ],
        requirement_kg_per_day: "3-5 (based on milk yield)",
        cost_per_kg_inr: "20-35",
        benefits: "High energy, protein, increases milk yield",
        formula: Some("1 kg concentrate per 2.5 liters milk production"),
    },
    FeedCategory {
        name: "Mineral Mixture",
        items: &["Commercial Mineral Mix", "Salt"],
        requirement_kg_per_day: "0.05-0.1",
        cost_per_kg_inr: "40-60",
        benefits: "Prevents deficiencies, improves reproduction",
        formula: None,
    },
];
