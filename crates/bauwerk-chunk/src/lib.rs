//! Dense chunk storage: one occupant cell per voxel, local addressing only.
#![forbid(unsafe_code)]

use bauwerk_blocks::types::Block;

pub const CHUNK_SIZE: usize = 16;
pub const CHUNK_VOLUME: usize = CHUNK_SIZE * CHUNK_SIZE * CHUNK_SIZE;
const _: () = assert!(CHUNK_SIZE.is_power_of_two());

/// Up to this many stackable occupants may share one voxel. The 3-wide
/// sub-grid admits more disjoint thin shapes in theory, but the domain
/// guarantees only a handful per cell.
pub const CELL_SLOTS: usize = 8;

/// Fixed-capacity, insertion-ordered set of occupants sharing one voxel.
/// An empty-material slot is free; occupied slots form a prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    slots: [Block; CELL_SLOTS],
    len: u8,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        slots: [Block::EMPTY; CELL_SLOTS],
        len: 0,
    };

    #[inline]
    pub fn occupants(&self) -> &[Block] {
        &self.slots[..self.len as usize]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends an occupant. Returns false when the cell is full or the
    /// block is the empty sentinel.
    pub fn push(&mut self, block: Block) -> bool {
        if block.is_empty() {
            return false;
        }
        let n = self.len as usize;
        if n >= CELL_SLOTS {
            return false;
        }
        self.slots[n] = block;
        self.len += 1;
        true
    }

    pub fn clear(&mut self) {
        *self = Cell::EMPTY;
    }

    /// Removes the occupant with exactly this sub triple, keeping the
    /// order of the rest. Returns whether one was found.
    pub fn remove_sub(&mut self, sub_x: u8, sub_y: u8, sub_z: u8) -> bool {
        let n = self.len as usize;
        let found = self.slots[..n]
            .iter()
            .position(|b| b.sub() == (sub_x, sub_y, sub_z));
        let Some(i) = found else {
            return false;
        };
        for j in i..n - 1 {
            self.slots[j] = self.slots[j + 1];
        }
        self.slots[n - 1] = Block::EMPTY;
        self.len -= 1;
        true
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::EMPTY
    }
}

/// Fixed-size cube of occupant cells. Knows nothing about world or chunk
/// coordinates; callers address it with local coordinates in [0, CHUNK_SIZE).
#[derive(Clone, Debug)]
pub struct Chunk {
    cells: Vec<Cell>,
}

impl Chunk {
    pub fn new() -> Self {
        Chunk {
            cells: vec![Cell::EMPTY; CHUNK_VOLUME],
        }
    }

    #[inline]
    pub fn idx(x: usize, y: usize, z: usize) -> usize {
        debug_assert!(x < CHUNK_SIZE && y < CHUNK_SIZE && z < CHUNK_SIZE);
        (y * CHUNK_SIZE + z) * CHUNK_SIZE + x
    }

    #[inline]
    pub fn cell(&self, x: usize, y: usize, z: usize) -> &Cell {
        &self.cells[Self::idx(x, y, z)]
    }

    #[inline]
    pub fn cell_mut(&mut self, x: usize, y: usize, z: usize) -> &mut Cell {
        &mut self.cells[Self::idx(x, y, z)]
    }

    #[inline]
    pub fn blocks(&self, x: usize, y: usize, z: usize) -> &[Block] {
        self.cell(x, y, z).occupants()
    }

    pub fn add_block(&mut self, x: usize, y: usize, z: usize, block: Block) -> bool {
        self.cell_mut(x, y, z).push(block)
    }

    pub fn clear_blocks(&mut self, x: usize, y: usize, z: usize) {
        self.cell_mut(x, y, z).clear();
    }

    pub fn remove_block(
        &mut self,
        x: usize,
        y: usize,
        z: usize,
        sub_x: u8,
        sub_y: u8,
        sub_z: u8,
    ) -> bool {
        self.cell_mut(x, y, z).remove_sub(sub_x, sub_y, sub_z)
    }

    #[inline]
    pub fn has_occupants(&self) -> bool {
        self.cells.iter().any(|c| !c.is_empty())
    }

    #[inline]
    pub fn is_all_air(&self) -> bool {
        !self.has_occupants()
    }

    pub fn occupant_count(&self) -> usize {
        self.cells.iter().map(|c| c.len()).sum()
    }
}

impl Default for Chunk {
    fn default() -> Self {
        Self::new()
    }
}
