//! World addressing: sparse chunk storage behind world-voxel coordinates.
#![forbid(unsafe_code)]

mod chunk_coord;
mod manager;
mod world;

pub use bauwerk_chunk::CHUNK_SIZE;
pub use chunk_coord::ChunkCoord;
pub use manager::ChunkManager;
pub use world::World;
