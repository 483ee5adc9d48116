//! Domain models for the polling scheduler.
//!
//! These models sit between the data layer (SeaORM entities) and the pollers. Entity models
//! never leak past the repositories; each repository converts rows into the types defined
//! here via `from_entity`. Types describing live Steam state (news items, price overviews,
//! workshop files, published file details) are also defined here so pollers can diff them
//! against the cached rows without depending on the Steam client's wire format.

pub mod app;
pub mod currency;
pub mod news;
pub mod notification;
pub mod price;
pub mod ugc;
pub mod watcher;
pub mod workshop;
