use clap::Parser;

use bauwerk::assets;
use bauwerk::controller::BuildingController;
use bauwerk::worldgen::populate_flat_floor;
use bauwerk_blocks::types::{MaterialId, ShapeId};
use bauwerk_geom::Vec3;
use bauwerk_world::World;

#[derive(Parser, Debug)]
#[command(name = "bauwerk", about = "Headless build-session driver")]
struct Args {
    /// Assets root containing assets/voxels/*.toml
    #[arg(long)]
    assets: Option<String>,
    /// Half-width of the generated floor, in voxels
    #[arg(long, default_value_t = 24)]
    radius: i32,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let root = assets::resolve_assets_root(args.assets);
    let (shapes, materials) = match assets::load_registries(&root) {
        Ok(regs) => regs,
        Err(e) => {
            log::error!("Failed to load voxel data from {:?}: {}", root, e);
            std::process::exit(1);
        }
    };

    let stone = materials.id_by_name("stone").unwrap_or(MaterialId(1));
    let full = shapes.id_by_name("full").unwrap_or(ShapeId(0));
    let post = shapes.id_by_name("post").unwrap_or(ShapeId(4));

    let mut world = World::new();
    let placed = populate_flat_floor(&mut world, args.radius, stone, full);
    log::info!(
        "Populated {} floor blocks across {} chunks",
        placed,
        world.chunk_count()
    );

    let mut ctl = BuildingController::new(world, &shapes);
    ctl.state.select_material(stone);
    let eye = Vec3::new(0.3, 4.0, 0.4);
    let down = Vec3::new(0.0, -1.0, 0.0);

    // Coarse: one whole block on top of the floor.
    match ctl.commit(eye, down) {
        Some((voxel, _)) => log::info!("Coarse placement at {:?}", voxel),
        None => log::warn!("Coarse placement found no surface"),
    }

    // Fine: a post stacked on the fresh block.
    ctl.state.toggle_fine();
    ctl.state.select_shape(post);
    log::info!("Fine preview: {}", ctl.preview(eye, down));
    match ctl.commit(eye, down) {
        Some((voxel, block)) => log::info!("Fine placement at {:?} sub {:?}", voxel, block.sub()),
        None => log::warn!("Fine placement rejected"),
    }

    // Lock the work surface and place once more against the plane.
    if ctl.select_surface(eye, down) {
        log::info!("Locked-surface preview: {}", ctl.preview(eye, down));
        match ctl.commit(eye, down) {
            Some((voxel, block)) => {
                log::info!("Locked placement at {:?} sub {:?}", voxel, block.sub())
            }
            None => log::info!("Locked placement rejected (slot already taken)"),
        }
    }

    ctl.state.reset();
    log::info!("Session reset; {} chunks live", ctl.world.chunk_count());
}
