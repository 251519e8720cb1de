use bauwerk_blocks::types::{Block, MaterialId, ShapeId};
use bauwerk_world::World;

/// Fills a flat floor of whole-voxel blocks at y = 0 across
/// [-radius, radius]² and instantiates the chunks it touches. Terrain
/// height synthesis is the host's business; population here only creates
/// chunks on demand and lays a slab to build on.
pub fn populate_flat_floor(
    world: &mut World,
    radius: i32,
    material: MaterialId,
    shape: ShapeId,
) -> usize {
    let mut placed = 0;
    for wz in -radius..=radius {
        for wx in -radius..=radius {
            world.ensure_chunk_at(wx, 0, wz);
            if world.add_block(wx, 0, wz, Block::full(material, shape)) {
                placed += 1;
            }
        }
    }
    placed
}
