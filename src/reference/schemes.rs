use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct GovernmentScheme {
    pub name: &'static str,
    pub benefit: &'static str,
    pub eligibility: &'static str,
    pub how_to_apply: &'static str,
    pub contact: &'static str,
}

pub static SCHEMES: &[GovernmentScheme] = &[
    GovernmentScheme {
        name: "National Dairy Plan (NDP)",
        benefit: "Productivity enhancement, breed improvement",
        eligibility: "Dairy farmers, cooperatives",
        how_to_apply: "Through State Implementing Agencies",
        contact: "https://www.nddb.coop",
    },
    GovernmentScheme {
        name: "Dairy Entrepreneurship Development Scheme (DEDS)",
        benefit: "Subsidy for dairy units (25-33%)",
        eligibility: "Individual/group wanting to start dairy",
        how_to_apply: "Through NABARD",
        contact: "https://www.nabard.org",
    },
    GovernmentScheme {
        name: "Rashtriya Gokul Mission",
        benefit: "Breed conservation, development",
        eligibility: "Farmers with indigenous breeds",
        how_to_apply: "Through State Animal Husbandry Department",
        contact: "State AH Department",
    },
    GovernmentScheme {
        name: "Kisan Credit Card (Dairy)",
        benefit: "Credit for dairy farming at 4% interest",
        eligibility: "All dairy farmers",
        how_to_apply: "Any bank",
        contact: "Nearest bank branch",
    },
];
