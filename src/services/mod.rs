//! Business logic layer. Each service owns a shared database handle and
//! exposes the operations the HTTP handlers call. Services compute derived
//! fields through [`crate::rules`] before persisting anything.

pub mod advisor;
pub mod analytics;
pub mod breeding;
pub mod feed;
pub mod finance;
pub mod health;
pub mod herd;
pub mod production;
pub mod users;
