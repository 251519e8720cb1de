use bauwerk_chunk::Chunk;
use hashbrown::HashMap;

use crate::chunk_coord::ChunkCoord;

/// Sparse chunk coordinate -> chunk map. Pure storage; every piece of
/// coordinate math lives in `World`.
#[derive(Default)]
pub struct ChunkManager {
    chunks: HashMap<ChunkCoord, Chunk>,
}

impl ChunkManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, coord: ChunkCoord, chunk: Chunk) {
        self.chunks.insert(coord, chunk);
    }

    #[inline]
    pub fn get(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    #[inline]
    pub fn get_mut(&mut self, coord: ChunkCoord) -> Option<&mut Chunk> {
        self.chunks.get_mut(&coord)
    }

    /// Existing chunk, or a freshly created empty one.
    pub fn ensure(&mut self, coord: ChunkCoord) -> &mut Chunk {
        self.chunks.entry(coord).or_default()
    }

    pub fn contains(&self, coord: ChunkCoord) -> bool {
        self.chunks.contains_key(&coord)
    }

    pub fn coords(&self) -> impl Iterator<Item = ChunkCoord> + '_ {
        self.chunks.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}
