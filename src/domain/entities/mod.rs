//! Core domain entities.
//!
//! Entities follow the "New Type" pattern with a separate struct for creation:
//! [`NewPlanet`] has no identifier, [`Planet`] always carries the one assigned
//! by the store.

pub mod planet;

pub use planet::{NewPlanet, Planet};
