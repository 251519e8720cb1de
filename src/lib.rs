//! Host-side collaborators for the placement core: ray queries, building
//! controller glue, asset loading, and world population.
#![forbid(unsafe_code)]

pub mod assets;
pub mod controller;
pub mod raycast;
pub mod worldgen;

pub use controller::{BuildingController, INTERACTION_RANGE};
pub use raycast::{RayHit, raycast_first_hit};
pub use worldgen::populate_flat_floor;
