//! sea-orm entity definitions for every persisted table.
//!
//! Every mutable table carries a `user_id` foreign key: records belong
//! exclusively to one farmer and all queries filter on it. Reference
//! catalogs (breeds, feeds, diseases, schemes, vaccines) are static data
//! in [`crate::reference`] and have no tables.

pub mod breeding_record;
pub mod buffalo;
pub mod calf_record;
pub mod feed_stock;
pub mod financial_record;
pub mod health_record;
pub mod heat_event;
pub mod labor_record;
pub mod milk_buyer;
pub mod milk_production;
pub mod user;
pub mod vaccination_record;
