use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize)]
pub struct MaterialId(pub u16);

impl MaterialId {
    /// Material 0 is reserved: an occupant slot carrying it is empty.
    pub const AIR: MaterialId = MaterialId(0);
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize)]
pub struct ShapeId(pub u16);

/// Compact occupant representation used at runtime.
///
/// Rotations are quarter-turn counts in 0..=3; `rot_x` is applied on the
/// shape's local axes first, then `rot_y` on world axes. Sub-positions are
/// 0 (fills the whole voxel on that axis) or 1..=3, a slot on the 3-wide
/// sub-grid.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug, Serialize, Deserialize)]
pub struct Block {
    pub material: MaterialId,
    pub shape: ShapeId,
    pub rot_y: u8,
    pub rot_x: u8,
    pub sub_x: u8,
    pub sub_y: u8,
    pub sub_z: u8,
}

impl Block {
    pub const EMPTY: Block = Block {
        material: MaterialId::AIR,
        shape: ShapeId(0),
        rot_y: 0,
        rot_x: 0,
        sub_x: 0,
        sub_y: 0,
        sub_z: 0,
    };

    /// A whole-voxel occupant: no sub-grid, no rotation.
    #[inline]
    pub const fn full(material: MaterialId, shape: ShapeId) -> Self {
        Block {
            material,
            shape,
            rot_y: 0,
            rot_x: 0,
            sub_x: 0,
            sub_y: 0,
            sub_z: 0,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.material == MaterialId::AIR
    }

    #[inline]
    pub fn sub(self) -> (u8, u8, u8) {
        (self.sub_x, self.sub_y, self.sub_z)
    }
}
