use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DiseaseProfile {
    pub name: &'static str,
    pub disease_type: &'static str,
    pub symptoms: &'static [&'static str],
    pub prevention: &'static [&'static str],
    pub treatment: &'static [&'static str],
    /// Critical diseases warrant immediate veterinary attention.
    pub critical: bool,
}

pub static DISEASES: &[DiseaseProfile] = &[
    DiseaseProfile {
        name: "Mastitis",
        disease_type: "Bacterial",
        symptoms: &[
            "Swollen udder",
            "Hot and painful quarter",
            "Watery or clotted milk",
            "Reduced milk yield",
        ],
        prevention: &[
            "Proper milking hygiene",
            "Teat dipping",
            "Clean environment",
            "Regular udder examination",
        ],
        treatment: &[
            "Antibiotics (Veterinary)",
            "Strip milking",
            "Hot fomentation",
            "Anti-inflammatory drugs",
        ],
        critical: true,
    },
    DiseaseProfile {
        name: "Foot and Mouth Disease",
        disease_type: "Viral",
        symptoms: &[
            "Fever",
            "Blisters in mouth and feet",
            "Drooling",
            "Lameness",
            "Reduced feed intake",
        ],
        prevention: &[
            "Vaccination (twice yearly)",
            "Isolation of sick animals",
            "Farm biosecurity",
        ],
        treatment: &[
            "Supportive care",
            "Wound care",
            "Soft feed",
            "Consult veterinarian immediately",
        ],
        critical: true,
    },
    DiseaseProfile {
        name: "Hemorrhagic Septicemia",
        disease_type: "Bacterial",
        symptoms: &[
            "High fever",
            "Difficulty breathing",
            "Swelling in throat",
            "Sudden death",
        ],
        prevention: &["Annual vaccination", "Avoid waterlogging", "Good hygiene"],
        treatment: &[
            "Emergency veterinary care",
            "Antibiotics",
            "Supportive therapy",
        ],
        critical: true,
    },
    DiseaseProfile {
        name: "Repeat Breeding",
        disease_type: "Reproductive",
        symptoms: &[
            "Regular heat but no conception",
            "More than 3 AI attempts fail",
        ],
        prevention: &[
            "Proper nutrition",
            "Minerals supplementation",
            "Timely AI",
            "Health check-up",
        ],
        treatment: &[
            "Hormonal therapy",
            "Uterine infection treatment",
            "Veterinary examination",
        ],
        critical: false,
    },
    DiseaseProfile {
        name: "Bloat",
        disease_type: "Digestive",
        symptoms: &[
            "Distended left side",
            "Difficulty breathing",
            "Restlessness",
            "Stop ruminating",
        ],
        prevention: &[
            "Gradual diet change",
            "Avoid wet green fodder",
            "Provide dry roughage",
        ],
        treatment: &[
            "Stomach tube",
            "Bloat oil",
            "Walking",
            "Emergency: veterinary puncture",
        ],
        critical: true,
    },
];
