use serde::Serialize;

/// Vaccination schedule template. `frequency_months` drives the next-due
/// computation: due = date + frequency_months x 30 days.
#[derive(Debug, Clone, Serialize)]
pub struct VaccineTemplate {
    pub name: &'static str,
    pub frequency_months: u32,
    pub season: &'static str,
}

pub static VACCINES: &[VaccineTemplate] = &[
    VaccineTemplate {
        name: "FMD",
        frequency_months: 6,
        season: "Pre-monsoon and pre-winter",
    },
    VaccineTemplate {
        name: "HS",
        frequency_months: 12,
        season: "Pre-monsoon",
    },
    VaccineTemplate {
        name: "BQ",
        frequency_months: 12,
        season: "Pre-monsoon",
    },
    VaccineTemplate {
        name: "Brucellosis",
        frequency_months: 12,
        season: "Calves 4-8 months, once",
    },
    VaccineTemplate {
        name: "Deworming",
        frequency_months: 3,
        season: "Year-round",
    },
];

/// Case-insensitive template lookup.
pub fn find_vaccine(name: &str) -> Option<&'static VaccineTemplate> {
    VACCINES.iter().find(|v| v.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmd_is_six_monthly() {
        assert_eq!(find_vaccine("FMD").unwrap().frequency_months, 6);
        assert_eq!(find_vaccine("fmd").unwrap().frequency_months, 6);
        assert!(find_vaccine("Rabies").is_none());
    }
}
