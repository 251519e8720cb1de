use bauwerk_blocks::shape::ShapeRegistry;
use bauwerk_blocks::types::ShapeId;
use bauwerk_geom::Vec3;

use crate::result::PlacementResult;

/// One voxel is one unit cube; faces sit half a voxel from the center.
pub const VOXEL_SIZE: f32 = 1.0;
pub const HALF_VOXEL: f32 = 0.5;

/// The sub-grid splits a voxel into 3 slots per axis.
pub const SUB_GRID_SIZE: i32 = 3;
pub const SUB_GRID_SPACING: f32 = VOXEL_SIZE / SUB_GRID_SIZE as f32;

/// Sub slot values. 0 is reserved for "fills the whole voxel on this
/// axis" and is never produced by overflow handling.
pub const SUB_NONE: i32 = 0;
pub const SUB_FIRST: i32 = 1;
pub const SUB_CENTER: i32 = 2;
pub const SUB_LAST: i32 = 3;

/// A face normal component beyond this magnitude counts as pointing along
/// the axis. Normals arrive as floats and are not always exact.
pub const NORMAL_THRESHOLD: f32 = 0.5;

/// Click fraction (0..1) within the voxel -> provisional sub slot {1,2,3}.
#[inline]
pub fn sub_from_fraction(fraction: f32) -> i32 {
    ((fraction * SUB_GRID_SIZE as f32).floor() as i32 + 1).clamp(SUB_FIRST, SUB_LAST)
}

/// Snap flush against the clicked face: positive normal -> first slot,
/// negative -> last slot, off-axis component -> keep the computed sub.
#[inline]
pub fn snap_sub_for_normal(normal: f32, current: i32) -> i32 {
    if normal > NORMAL_THRESHOLD {
        SUB_FIRST
    } else if normal < -NORMAL_THRESHOLD {
        SUB_LAST
    } else {
        current
    }
}

/// Wraps an out-of-range sub slot and reports the voxel carry along that
/// axis: above the last slot wraps to the first carrying +1, below the
/// first wraps to the last carrying -1, in-range passes through.
#[inline]
pub fn carry_sub(sub: i32) -> (i32, i32) {
    if sub > SUB_LAST {
        (SUB_FIRST, 1)
    } else if sub < SUB_FIRST {
        (SUB_LAST, -1)
    } else {
        (sub, 0)
    }
}

/// Sub slot -> fractional displacement from the voxel center.
#[inline]
pub fn offset_for_sub(sub: i32) -> f32 {
    (sub - SUB_CENTER) as f32 * SUB_GRID_SPACING
}

/// Footprint extents after rotation. Odd quarter-turns around X swap Y/Z
/// (local axes first), then odd quarter-turns around Y swap the resulting
/// X/Z (world axes). The order is load-bearing: the two do not commute.
#[inline]
pub fn rotated_extents(size: (f32, f32, f32), rot_y: u8, rot_x: u8) -> (f32, f32, f32) {
    let (mut x, mut y, mut z) = size;
    if rot_x % 2 == 1 {
        core::mem::swap(&mut y, &mut z);
    }
    if rot_y % 2 == 1 {
        core::mem::swap(&mut x, &mut z);
    }
    (x, y, z)
}

/// Intersection of a view ray with a locked work surface: the plane
/// through the selected voxel face, half a voxel out along the outward
/// normal. `None` when the ray runs parallel to the plane or the
/// intersection lies behind the ray origin; callers surface that as
/// `PlacementResult::INVALID`.
pub fn work_plane_hit(
    surface_voxel: (i32, i32, i32),
    normal: Vec3,
    origin: Vec3,
    dir: Vec3,
) -> Option<Vec3> {
    let center = Vec3::new(
        surface_voxel.0 as f32,
        surface_voxel.1 as f32,
        surface_voxel.2 as f32,
    );
    let plane_point = center + normal * HALF_VOXEL;
    let denom = normal.dot(dir);
    if denom.abs() < 1e-6 {
        return None;
    }
    let t = normal.dot(plane_point - origin) / denom;
    if t < 0.0 {
        return None;
    }
    Some(origin + dir * t)
}

/// Intra-voxel fraction of a point, per axis. Voxel centers sit at
/// integer coordinates, so the low face of voxel v is at v - 0.5.
pub fn voxel_fractions(point: Vec3, voxel: (i32, i32, i32)) -> Vec3 {
    Vec3::new(
        point.x - (voxel.0 as f32 - HALF_VOXEL),
        point.y - (voxel.1 as f32 - HALF_VOXEL),
        point.z - (voxel.2 as f32 - HALF_VOXEL),
    )
}

/// One fine-mode geometric hit, fully resolved by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FineHit {
    /// Destination voxel the new occupant lands in (pre-carry).
    pub voxel: (i32, i32, i32),
    /// Outward unit normal of the clicked face.
    pub normal: Vec3,
    /// Intra-voxel click fraction per axis, 0..1.
    pub fraction: Vec3,
    /// Anchor subs captured from a clicked stackable occupant. When
    /// present they replace both the click fraction and the face snap on
    /// every axis; shifted anchors may sit one slot out of range until
    /// the carry runs.
    pub fixed_sub: Option<[i32; 3]>,
    /// Shape being placed and its selected rotation.
    pub shape: ShapeId,
    pub rot_y: u8,
    pub rot_x: u8,
}

/// Pure placement pipeline. Holds nothing but a read-only view of the
/// shape registry, so identical inputs always yield identical results.
pub struct PlacementCalculator<'reg> {
    shapes: &'reg ShapeRegistry,
}

impl<'reg> PlacementCalculator<'reg> {
    pub fn new(shapes: &'reg ShapeRegistry) -> Self {
        Self { shapes }
    }

    /// Coarse mode: the new occupant fills the voxel adjacent to the
    /// clicked face. No sub-grid, no offsets.
    pub fn coarse(&self, hit_voxel: (i32, i32, i32), normal: Vec3) -> PlacementResult {
        let (nx, ny, nz) = normal.rounded();
        PlacementResult {
            bx: hit_voxel.0 + nx,
            by: hit_voxel.1 + ny,
            bz: hit_voxel.2 + nz,
            sub_x: SUB_NONE as u8,
            sub_y: SUB_NONE as u8,
            sub_z: SUB_NONE as u8,
            off_x: 0.0,
            off_y: 0.0,
            off_z: 0.0,
            valid: true,
        }
    }

    /// Fine mode: sub-voxel slot selection.
    ///
    /// Pipeline order: fraction -> provisional sub, fixed-sub/face-snap,
    /// overflow carry, rotation of the footprint, then the whole-voxel
    /// override. The carry must run before the override so a shifted
    /// anchor of 0 or 4 lands in the neighbor voxel instead of being
    /// misread as the no-sub-grid sentinel.
    pub fn fine(&self, hit: &FineHit) -> PlacementResult {
        let (mut bx, mut by, mut bz) = hit.voxel;

        let mut sx = sub_from_fraction(hit.fraction.x);
        let mut sy = sub_from_fraction(hit.fraction.y);
        let mut sz = sub_from_fraction(hit.fraction.z);

        match hit.fixed_sub {
            Some([fx, fy, fz]) => {
                sx = fx;
                sy = fy;
                sz = fz;
            }
            None => {
                sx = snap_sub_for_normal(hit.normal.x, sx);
                sy = snap_sub_for_normal(hit.normal.y, sy);
                sz = snap_sub_for_normal(hit.normal.z, sz);
            }
        }

        let (sx, dx) = carry_sub(sx);
        let (sy, dy) = carry_sub(sy);
        let (sz, dz) = carry_sub(sz);
        bx += dx;
        by += dy;
        bz += dz;

        let size = self.extents(hit.shape);
        let (ex, ey, ez) = rotated_extents(size, hit.rot_y, hit.rot_x);

        let (sub_x, off_x) = axis_slot(ex, sx);
        let (sub_y, off_y) = axis_slot(ey, sy);
        let (sub_z, off_z) = axis_slot(ez, sz);

        PlacementResult {
            bx,
            by,
            bz,
            sub_x,
            sub_y,
            sub_z,
            off_x,
            off_y,
            off_z,
            valid: true,
        }
    }

    /// Pre-rotation footprint; unknown shape ids place as whole voxels.
    pub(crate) fn extents(&self, shape: ShapeId) -> (f32, f32, f32) {
        self.shapes
            .get(shape)
            .map(|s| s.extents())
            .unwrap_or((VOXEL_SIZE, VOXEL_SIZE, VOXEL_SIZE))
    }
}

/// One axis of the final step: a shape spanning the axis forces the
/// no-sub-grid sentinel, a thin shape keeps its slot and gains an offset.
#[inline]
fn axis_slot(extent: f32, sub: i32) -> (u8, f32) {
    if extent < VOXEL_SIZE {
        (sub as u8, offset_for_sub(sub))
    } else {
        (SUB_NONE as u8, 0.0)
    }
}
