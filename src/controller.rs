use bauwerk_blocks::shape::ShapeRegistry;
use bauwerk_blocks::types::Block;
use bauwerk_geom::Vec3;
use bauwerk_place::calc::{FineHit, PlacementCalculator, voxel_fractions, work_plane_hit};
use bauwerk_place::{BuildMode, BuildingState, HitOccupant, PlacementResult};
use bauwerk_world::World;

use crate::raycast::{RayHit, raycast_first_hit};

/// Default interaction range, in voxels.
pub const INTERACTION_RANGE: f32 = 5.0;

/// Session glue between the ray query, the placement calculator, and the
/// world store. Owns the world and the build state; borrows the shape
/// registry it was constructed with.
pub struct BuildingController<'reg> {
    pub world: World,
    pub state: BuildingState,
    shapes: &'reg ShapeRegistry,
}

impl<'reg> BuildingController<'reg> {
    pub fn new(world: World, shapes: &'reg ShapeRegistry) -> Self {
        Self {
            world,
            state: BuildingState::new(),
            shapes,
        }
    }

    /// Nearest solid surface under the view ray.
    pub fn hit(&self, origin: Vec3, dir: Vec3) -> Option<RayHit> {
        raycast_first_hit(origin, dir, INTERACTION_RANGE, |x, y, z| {
            !self.world.get_blocks(x, y, z).is_empty()
        })
    }

    /// Metadata for the occupant at a hit voxel. A voxel-level ray cannot
    /// tell cohabitant thin occupants apart, so this resolves to the
    /// cell's first occupant.
    pub fn hit_occupant(&self, voxel: (i32, i32, i32)) -> Option<HitOccupant> {
        let b = *self.world.get_blocks(voxel.0, voxel.1, voxel.2).first()?;
        Some(HitOccupant {
            material: b.material,
            shape: b.shape,
            rot_y: b.rot_y,
            rot_x: b.rot_x,
            sub: [b.sub_x, b.sub_y, b.sub_z],
        })
    }

    /// Placement the active mode would commit for this view ray. Invalid
    /// when the ray misses, the work plane rejects it, or no surface is
    /// locked; callers must check `valid`.
    pub fn preview(&self, origin: Vec3, dir: Vec3) -> PlacementResult {
        let calc = PlacementCalculator::new(self.shapes);
        match self.state.mode() {
            BuildMode::Coarse => match self.hit(origin, dir) {
                Some(hit) => calc.coarse(hit.voxel(), hit.normal()),
                None => PlacementResult::INVALID,
            },
            BuildMode::FineFree => match self.hit(origin, dir) {
                Some(hit) => self.fine_from_hit(&calc, &hit),
                None => PlacementResult::INVALID,
            },
            BuildMode::FineLocked => self.fine_from_surface(&calc, origin, dir),
        }
    }

    fn fine_from_hit(&self, calc: &PlacementCalculator, hit: &RayHit) -> PlacementResult {
        let anchor = self
            .hit_occupant(hit.voxel())
            .filter(|o| self.is_stackable(o));
        let (dest, fixed) = match anchor {
            Some(occ) => {
                let (voxel, sub) = calc.stack_anchor(&occ, hit.voxel(), hit.normal());
                (voxel, Some(sub))
            }
            None => {
                let (nx, ny, nz) = hit.normal().rounded();
                ((hit.bx + nx, hit.by + ny, hit.bz + nz), None)
            }
        };
        calc.fine(&FineHit {
            voxel: dest,
            normal: hit.normal(),
            fraction: voxel_fractions(hit.point, dest),
            fixed_sub: fixed,
            shape: self.state.shape,
            rot_y: self.state.rot_y,
            rot_x: self.state.rot_x,
        })
    }

    fn fine_from_surface(
        &self,
        calc: &PlacementCalculator,
        origin: Vec3,
        dir: Vec3,
    ) -> PlacementResult {
        let Some(surface) = self.state.surface() else {
            return PlacementResult::INVALID;
        };
        let Some(point) = work_plane_hit(surface.voxel, surface.normal, origin, dir) else {
            return PlacementResult::INVALID;
        };
        // Anchored surfaces already recorded the destination cell; free
        // surfaces place into the cell adjacent to the locked face.
        let (dest, fixed) = match surface.fixed_sub {
            Some(fixed) => (surface.voxel, Some(fixed)),
            None => {
                let (nx, ny, nz) = surface.normal.rounded();
                (
                    (
                        surface.voxel.0 + nx,
                        surface.voxel.1 + ny,
                        surface.voxel.2 + nz,
                    ),
                    None,
                )
            }
        };
        calc.fine(&FineHit {
            voxel: dest,
            normal: surface.normal,
            fraction: voxel_fractions(point, dest),
            fixed_sub: fixed,
            shape: self.state.shape,
            rot_y: self.state.rot_y,
            rot_x: self.state.rot_x,
        })
    }

    /// Locks the surface under the view ray as the fine-mode work plane.
    /// Clicking a stackable occupant records its anchor cell and subs;
    /// anything else records the clicked voxel and face.
    pub fn select_surface(&mut self, origin: Vec3, dir: Vec3) -> bool {
        if !self.state.is_fine_mode() {
            return false;
        }
        let Some(hit) = self.hit(origin, dir) else {
            return false;
        };
        let anchor = self
            .hit_occupant(hit.voxel())
            .filter(|o| self.is_stackable(o));
        match anchor {
            Some(occ) => {
                let calc = PlacementCalculator::new(self.shapes);
                let (voxel, sub) = calc.stack_anchor(&occ, hit.voxel(), hit.normal());
                self.state.select_surface(voxel, hit.normal(), Some(sub))
            }
            None => self.state.select_surface(hit.voxel(), hit.normal(), None),
        }
    }

    /// Computes the active placement and writes it into the world.
    /// Returns the target voxel and the placed block for the host's
    /// render/physics sink, or None when the placement is invalid or
    /// illegal.
    pub fn commit(&mut self, origin: Vec3, dir: Vec3) -> Option<((i32, i32, i32), Block)> {
        let placed = self.preview(origin, dir);
        if !placed.valid {
            return None;
        }
        let block = Block {
            material: self.state.material,
            shape: self.state.shape,
            rot_y: self.state.rot_y,
            rot_x: self.state.rot_x,
            sub_x: placed.sub_x,
            sub_y: placed.sub_y,
            sub_z: placed.sub_z,
        };
        let voxel = placed.voxel();
        if !self.can_place(voxel, block) {
            return None;
        }
        if !self.world.add_block(voxel.0, voxel.1, voxel.2, block) {
            return None;
        }
        Some((voxel, block))
    }

    /// Multi-occupant legality: a busy cell accepts a newcomer only when
    /// every occupant, incoming included, is stackable and no sub triple
    /// collides.
    pub fn can_place(&self, voxel: (i32, i32, i32), block: Block) -> bool {
        let existing = self.world.get_blocks(voxel.0, voxel.1, voxel.2);
        if existing.is_empty() {
            return true;
        }
        if !self.shape_stackable(block) {
            return false;
        }
        existing
            .iter()
            .all(|b| self.shape_stackable(*b) && b.sub() != block.sub())
    }

    /// Removes whatever the view ray points at: a whole-voxel occupant
    /// clears its cell, a sub-positioned occupant is removed alone.
    pub fn remove(&mut self, origin: Vec3, dir: Vec3) -> bool {
        let Some(hit) = self.hit(origin, dir) else {
            return false;
        };
        let (bx, by, bz) = hit.voxel();
        let Some(occ) = self.hit_occupant((bx, by, bz)) else {
            return false;
        };
        if occ.sub == [0, 0, 0] {
            self.world.clear_blocks(bx, by, bz)
        } else {
            self.world
                .remove_block(bx, by, bz, occ.sub[0], occ.sub[1], occ.sub[2])
        }
    }

    fn is_stackable(&self, occ: &HitOccupant) -> bool {
        self.shapes.get(occ.shape).is_some_and(|s| s.stackable)
    }

    fn shape_stackable(&self, block: Block) -> bool {
        self.shapes.get(block.shape).is_some_and(|s| s.stackable)
    }
}
