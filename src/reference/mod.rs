//! Immutable reference catalogs: breed profiles, feed categories, disease
//! profiles, government schemes, and vaccination templates.
//!
//! This data is process-wide and read-only. It has no owning user and no
//! tables; it ships compiled into the binary.

pub mod breeds;
pub mod diseases;
pub mod feeds;
pub mod schemes;
pub mod vaccines;

pub use breeds::{find_breed, BreedProfile, BREEDS};
pub use diseases::{DiseaseProfile, DISEASES};
pub use feeds::{FeedCategory, FEED_CATEGORIES};
pub use schemes::{GovernmentScheme, SCHEMES};
pub use vaccines::{find_vaccine, VaccineTemplate, VACCINES};
