use std::fmt;

/// Outcome of a placement computation: target voxel, per-axis sub slot,
/// and the fractional render offset per axis. Check `valid` before
/// reading any other field.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlacementResult {
    pub bx: i32,
    pub by: i32,
    pub bz: i32,
    pub sub_x: u8,
    pub sub_y: u8,
    pub sub_z: u8,
    pub off_x: f32,
    pub off_y: f32,
    pub off_z: f32,
    pub valid: bool,
}

impl PlacementResult {
    /// Early-exit sentinel for failed geometry (no hit, plane behind the
    /// viewer, ...).
    pub const INVALID: PlacementResult = PlacementResult {
        bx: 0,
        by: 0,
        bz: 0,
        sub_x: 0,
        sub_y: 0,
        sub_z: 0,
        off_x: 0.0,
        off_y: 0.0,
        off_z: 0.0,
        valid: false,
    };

    #[inline]
    pub fn voxel(&self) -> (i32, i32, i32) {
        (self.bx, self.by, self.bz)
    }

    #[inline]
    pub fn sub(&self) -> (u8, u8, u8) {
        (self.sub_x, self.sub_y, self.sub_z)
    }
}

impl fmt::Display for PlacementResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "block({}, {}, {}) sub({}, {}, {}) offset({:.3}, {:.3}, {:.3}) valid={}",
            self.bx,
            self.by,
            self.bz,
            self.sub_x,
            self.sub_y,
            self.sub_z,
            self.off_x,
            self.off_y,
            self.off_z,
            self.valid
        )
    }
}
