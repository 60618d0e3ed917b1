//! Domain layer containing the planet entity, filter construction and the
//! repository contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`query_builder`] - Filter specifications built from optional field templates
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod entities;
pub mod query_builder;
pub mod repositories;
