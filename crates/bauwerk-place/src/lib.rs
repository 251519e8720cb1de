//! Placement math and build-session state.
#![forbid(unsafe_code)]

pub mod anchor;
pub mod calc;
pub mod result;
pub mod state;

// Re-exports for convenience
pub use anchor::HitOccupant;
pub use calc::{FineHit, PlacementCalculator};
pub use result::PlacementResult;
pub use state::{BuildMode, BuildingState, WorkSurface};
