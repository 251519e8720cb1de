use bauwerk_blocks::types::Block;
use bauwerk_chunk::{CHUNK_SIZE, Chunk};

use crate::chunk_coord::ChunkCoord;
use crate::manager::ChunkManager;

const CHUNK: i32 = CHUNK_SIZE as i32;
const NO_BLOCKS: &[Block] = &[];

/// Mediator between world-voxel coordinates and chunked storage. Every
/// public operation takes world coordinates; callers never see chunking.
///
/// Truncating division/remainder would silently misaddress every negative
/// coordinate (-1 / 16 == 0, -1 % 16 == -1), so the conversions use
/// `div_euclid`/`rem_euclid`: floor division paired with a true modulo.
pub struct World {
    chunks: ChunkManager,
}

impl World {
    pub fn new() -> Self {
        World {
            chunks: ChunkManager::new(),
        }
    }

    /// World coordinate -> chunk coordinate, floor semantics: -1 maps to
    /// chunk -1, never chunk 0.
    #[inline]
    pub fn world_to_chunk(world: i32) -> i32 {
        world.div_euclid(CHUNK)
    }

    /// World coordinate -> local coordinate, always in [0, CHUNK_SIZE).
    #[inline]
    pub fn world_to_local(world: i32) -> usize {
        world.rem_euclid(CHUNK) as usize
    }

    #[inline]
    fn split(wx: i32, wy: i32, wz: i32) -> (ChunkCoord, (usize, usize, usize)) {
        (
            ChunkCoord::new(
                Self::world_to_chunk(wx),
                Self::world_to_chunk(wy),
                Self::world_to_chunk(wz),
            ),
            (
                Self::world_to_local(wx),
                Self::world_to_local(wy),
                Self::world_to_local(wz),
            ),
        )
    }

    /// Chunk containing this world position, created on demand. Population
    /// goes through here; the block operations below never create chunks.
    pub fn ensure_chunk_at(&mut self, wx: i32, wy: i32, wz: i32) -> &mut Chunk {
        let (coord, _) = Self::split(wx, wy, wz);
        self.chunks.ensure(coord)
    }

    pub fn ensure_chunk(&mut self, coord: ChunkCoord) -> &mut Chunk {
        self.chunks.ensure(coord)
    }

    pub fn has_chunk(&self, coord: ChunkCoord) -> bool {
        self.chunks.contains(coord)
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn chunk_coords(&self) -> impl Iterator<Item = ChunkCoord> + '_ {
        self.chunks.coords()
    }

    /// Occupants at a world position; empty when the owning chunk is absent.
    pub fn get_blocks(&self, wx: i32, wy: i32, wz: i32) -> &[Block] {
        let (coord, (lx, ly, lz)) = Self::split(wx, wy, wz);
        match self.chunks.get(coord) {
            Some(chunk) => chunk.blocks(lx, ly, lz),
            None => NO_BLOCKS,
        }
    }

    /// Appends an occupant. False when the owning chunk is absent or the
    /// cell is full.
    pub fn add_block(&mut self, wx: i32, wy: i32, wz: i32, block: Block) -> bool {
        let (coord, (lx, ly, lz)) = Self::split(wx, wy, wz);
        match self.chunks.get_mut(coord) {
            Some(chunk) => chunk.add_block(lx, ly, lz, block),
            None => false,
        }
    }

    /// Empties the cell. False when the owning chunk is absent.
    pub fn clear_blocks(&mut self, wx: i32, wy: i32, wz: i32) -> bool {
        let (coord, (lx, ly, lz)) = Self::split(wx, wy, wz);
        match self.chunks.get_mut(coord) {
            Some(chunk) => {
                chunk.clear_blocks(lx, ly, lz);
                true
            }
            None => false,
        }
    }

    /// Removes the occupant with exactly this sub triple. Returns whether
    /// one was found.
    pub fn remove_block(
        &mut self,
        wx: i32,
        wy: i32,
        wz: i32,
        sub_x: u8,
        sub_y: u8,
        sub_z: u8,
    ) -> bool {
        let (coord, (lx, ly, lz)) = Self::split(wx, wy, wz);
        match self.chunks.get_mut(coord) {
            Some(chunk) => chunk.remove_block(lx, ly, lz, sub_x, sub_y, sub_z),
            None => false,
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
