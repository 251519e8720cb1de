use serde::Deserialize;

// Top-level shapes config file
#[derive(Deserialize, Debug)]
pub struct ShapesConfig {
    pub shapes: Vec<ShapeCfg>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ShapeCfg {
    pub name: String,
    // Explicit id, or the next free index when absent
    #[serde(default)]
    pub id: Option<u16>,
    #[serde(default)]
    pub display_name: Option<String>,

    // Footprint extents before rotation, in voxels
    #[serde(default = "one")]
    pub size_x: f32,
    #[serde(default = "one")]
    pub size_y: f32,
    #[serde(default = "one")]
    pub size_z: f32,

    // Thin on every axis: may share a voxel with other stackable occupants
    #[serde(default)]
    pub stackable: bool,

    // Host-facing flags, not consumed by placement math
    #[serde(default)]
    pub mesh: Option<String>,
    #[serde(default)]
    pub climbable: bool,
    #[serde(default)]
    pub symmetric: bool,
}

// Top-level materials config file
#[derive(Deserialize, Debug)]
pub struct MaterialsConfig {
    pub materials: Vec<MaterialCfg>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct MaterialCfg {
    pub name: String,
    #[serde(default)]
    pub id: Option<u16>,
    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default = "white")]
    pub color: [f32; 4],
    #[serde(default)]
    pub texture: Option<String>,

    #[serde(default = "yes")]
    pub solid: bool,
    #[serde(default)]
    pub liquid: bool,
    #[serde(default = "one")]
    pub density: f32,
    #[serde(default)]
    pub hardness: u8,
}

fn one() -> f32 {
    1.0
}

fn yes() -> bool {
    true
}

fn white() -> [f32; 4] {
    [1.0, 1.0, 1.0, 1.0]
}
