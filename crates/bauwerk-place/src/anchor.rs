use bauwerk_blocks::types::{MaterialId, ShapeId};
use bauwerk_geom::Vec3;

use crate::calc::{
    NORMAL_THRESHOLD, PlacementCalculator, SUB_CENTER, SUB_NONE, VOXEL_SIZE, rotated_extents,
    snap_sub_for_normal,
};

/// Metadata the host resolves for a hit occupant. Sub-positions of 0 mean
/// the occupant spans the axis, or predates sub-grid data (generated
/// terrain); both anchor from the center slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitOccupant {
    pub material: MaterialId,
    pub shape: ShapeId,
    pub rot_y: u8,
    pub rot_x: u8,
    pub sub: [u8; 3],
}

impl PlacementCalculator<'_> {
    /// Anchor for stacking a new occupant against a clicked stackable one.
    ///
    /// The clicked occupant's own sub-positions anchor the new block on
    /// every axis, instead of the click fraction. Along the clicked
    /// normal the sub shifts one slot toward the face, possibly out of
    /// the 1..=3 range (the fine pipeline's carry resolves that). When
    /// the occupant spans that axis the target voxel advances instead
    /// and the sub snaps flush against the face.
    pub fn stack_anchor(
        &self,
        hit: &HitOccupant,
        hit_voxel: (i32, i32, i32),
        normal: Vec3,
    ) -> ((i32, i32, i32), [i32; 3]) {
        let size = self.extents(hit.shape);
        let (ex, ey, ez) = rotated_extents(size, hit.rot_y, hit.rot_x);

        let mut voxel = [hit_voxel.0, hit_voxel.1, hit_voxel.2];
        let mut sub = [
            anchor_sub(hit.sub[0]),
            anchor_sub(hit.sub[1]),
            anchor_sub(hit.sub[2]),
        ];

        let n = [normal.x, normal.y, normal.z];
        let extent = [ex, ey, ez];
        for axis in 0..3 {
            if n[axis].abs() <= NORMAL_THRESHOLD {
                continue;
            }
            let step = n[axis].round() as i32;
            if extent[axis] >= VOXEL_SIZE {
                voxel[axis] += step;
                sub[axis] = snap_sub_for_normal(n[axis], SUB_CENTER);
            } else {
                sub[axis] += step;
            }
        }

        ((voxel[0], voxel[1], voxel[2]), sub)
    }
}

#[inline]
fn anchor_sub(sub: u8) -> i32 {
    if sub as i32 == SUB_NONE {
        SUB_CENTER
    } else {
        sub as i32
    }
}
