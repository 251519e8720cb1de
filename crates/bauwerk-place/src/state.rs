use bauwerk_blocks::types::{MaterialId, ShapeId};
use bauwerk_geom::Vec3;

pub const DEFAULT_MATERIAL: MaterialId = MaterialId(1);
pub const DEFAULT_SHAPE: ShapeId = ShapeId(0);

/// Observable placement mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildMode {
    Coarse,
    FineFree,
    FineLocked,
}

/// Work surface locked in fine mode: the selected voxel and outward
/// normal, plus the anchor subs when the selection clicked a stackable
/// occupant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorkSurface {
    pub voxel: (i32, i32, i32),
    pub normal: Vec3,
    pub fixed_sub: Option<[i32; 3]>,
}

/// Per-session build state machine. Created once, runs for the session
/// lifetime; `reset` returns it to coarse mode with default selections.
#[derive(Clone, Debug)]
pub struct BuildingState {
    fine_mode: bool,
    surface: Option<WorkSurface>,
    pub material: MaterialId,
    pub shape: ShapeId,
    pub rot_y: u8,
    pub rot_x: u8,
}

impl BuildingState {
    pub fn new() -> Self {
        Self {
            fine_mode: false,
            surface: None,
            material: DEFAULT_MATERIAL,
            shape: DEFAULT_SHAPE,
            rot_y: 0,
            rot_x: 0,
        }
    }

    pub fn mode(&self) -> BuildMode {
        match (self.fine_mode, &self.surface) {
            (false, _) => BuildMode::Coarse,
            (true, None) => BuildMode::FineFree,
            (true, Some(_)) => BuildMode::FineLocked,
        }
    }

    #[inline]
    pub fn is_fine_mode(&self) -> bool {
        self.fine_mode
    }

    #[inline]
    pub fn surface(&self) -> Option<&WorkSurface> {
        self.surface.as_ref()
    }

    /// Coarse <-> fine toggle. With a surface locked, the toggle only
    /// drops the lock and stays in fine mode.
    pub fn toggle_fine(&mut self) {
        if self.fine_mode && self.surface.is_some() {
            self.surface = None;
            return;
        }
        self.fine_mode = !self.fine_mode;
        self.surface = None;
    }

    /// Locks a work surface. Only meaningful in fine mode; false otherwise.
    pub fn select_surface(
        &mut self,
        voxel: (i32, i32, i32),
        normal: Vec3,
        fixed_sub: Option<[i32; 3]>,
    ) -> bool {
        if !self.fine_mode {
            return false;
        }
        self.surface = Some(WorkSurface {
            voxel,
            normal,
            fixed_sub,
        });
        true
    }

    pub fn clear_surface(&mut self) {
        self.surface = None;
    }

    pub fn select_material(&mut self, material: MaterialId) {
        self.material = material;
    }

    pub fn select_shape(&mut self, shape: ShapeId) {
        self.shape = shape;
    }

    pub fn rotate_y(&mut self) {
        self.rot_y = (self.rot_y + 1) % 4;
    }

    pub fn rotate_x(&mut self) {
        self.rot_x = (self.rot_x + 1) % 4;
    }

    /// Menu exit / cancel: unconditionally back to coarse defaults.
    pub fn reset(&mut self) {
        *self = BuildingState::new();
    }
}

impl Default for BuildingState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lock(state: &mut BuildingState) {
        assert!(state.select_surface((1, 2, 3), Vec3::UP, None));
    }

    #[test]
    fn starts_coarse_with_defaults() {
        let state = BuildingState::new();
        assert_eq!(state.mode(), BuildMode::Coarse);
        assert_eq!(state.material, DEFAULT_MATERIAL);
        assert_eq!(state.shape, DEFAULT_SHAPE);
        assert_eq!((state.rot_y, state.rot_x), (0, 0));
    }

    #[test]
    fn toggle_moves_between_coarse_and_fine_free() {
        let mut state = BuildingState::new();
        state.toggle_fine();
        assert_eq!(state.mode(), BuildMode::FineFree);
        state.toggle_fine();
        assert_eq!(state.mode(), BuildMode::Coarse);
    }

    #[test]
    fn surface_selection_requires_fine_mode() {
        let mut state = BuildingState::new();
        assert!(!state.select_surface((0, 0, 0), Vec3::UP, None));
        assert_eq!(state.mode(), BuildMode::Coarse);

        state.toggle_fine();
        lock(&mut state);
        assert_eq!(state.mode(), BuildMode::FineLocked);
        assert_eq!(state.surface().unwrap().voxel, (1, 2, 3));
    }

    #[test]
    fn toggle_with_locked_surface_only_deselects() {
        let mut state = BuildingState::new();
        state.toggle_fine();
        lock(&mut state);

        state.toggle_fine();
        assert_eq!(state.mode(), BuildMode::FineFree);
        assert!(state.surface().is_none());

        // The next toggle actually leaves fine mode.
        state.toggle_fine();
        assert_eq!(state.mode(), BuildMode::Coarse);
    }

    #[test]
    fn clear_surface_drops_the_lock_without_leaving_fine_mode() {
        let mut state = BuildingState::new();
        state.toggle_fine();
        lock(&mut state);
        state.clear_surface();
        assert_eq!(state.mode(), BuildMode::FineFree);
    }

    #[test]
    fn surface_carries_fixed_sub_anchor() {
        let mut state = BuildingState::new();
        state.toggle_fine();
        assert!(state.select_surface((0, 1, 0), Vec3::new(1.0, 0.0, 0.0), Some([4, 2, 2])));
        assert_eq!(state.surface().unwrap().fixed_sub, Some([4, 2, 2]));
    }

    #[test]
    fn reset_returns_to_coarse_defaults_from_any_state() {
        let mut state = BuildingState::new();
        state.toggle_fine();
        lock(&mut state);
        state.select_material(MaterialId(3));
        state.select_shape(ShapeId(4));
        state.rotate_y();
        state.rotate_x();

        state.reset();
        assert_eq!(state.mode(), BuildMode::Coarse);
        assert_eq!(state.material, DEFAULT_MATERIAL);
        assert_eq!(state.shape, DEFAULT_SHAPE);
        assert_eq!((state.rot_y, state.rot_x), (0, 0));
        assert!(state.surface().is_none());
    }

    #[test]
    fn rotations_cycle_quarter_turns() {
        let mut state = BuildingState::new();
        for _ in 0..4 {
            state.rotate_y();
        }
        assert_eq!(state.rot_y, 0);
        state.rotate_x();
        state.rotate_x();
        state.rotate_x();
        assert_eq!(state.rot_x, 3);
        state.rotate_x();
        assert_eq!(state.rot_x, 0);
    }
}
