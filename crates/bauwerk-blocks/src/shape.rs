use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use crate::config::{ShapeCfg, ShapesConfig};
use crate::types::ShapeId;

#[derive(Clone, Debug)]
pub struct ShapeDef {
    pub id: ShapeId,
    pub name: String,
    pub display_name: String,
    pub size_x: f32,
    pub size_y: f32,
    pub size_z: f32,
    pub stackable: bool,
    pub mesh: String,
    pub climbable: bool,
    pub symmetric: bool,
}

impl ShapeDef {
    /// Footprint extents before rotation, in voxels.
    #[inline]
    pub fn extents(&self) -> (f32, f32, f32) {
        (self.size_x, self.size_y, self.size_z)
    }
}

/// Read-only id/name lookup for shape definitions. Loaded once at startup
/// and passed by reference into the placement pipeline.
#[derive(Default, Clone, Debug)]
pub struct ShapeRegistry {
    shapes: HashMap<ShapeId, ShapeDef>,
    by_name: HashMap<String, ShapeId>,
}

impl ShapeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, def: ShapeDef) {
        self.by_name.insert(def.name.clone(), def.id);
        self.shapes.insert(def.id, def);
    }

    #[inline]
    pub fn get(&self, id: ShapeId) -> Option<&ShapeDef> {
        self.shapes.get(&id)
    }

    pub fn get_by_name(&self, name: &str) -> Option<&ShapeDef> {
        self.by_name.get(name).and_then(|id| self.shapes.get(id))
    }

    pub fn id_by_name(&self, name: &str) -> Option<ShapeId> {
        self.by_name.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShapeDef> {
        self.shapes.values()
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
        self.by_name.clear();
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: ShapesConfig = toml::from_str(toml_str)?;
        let mut reg = ShapeRegistry::new();
        for def in cfg.shapes.into_iter() {
            let compiled = compile_shape(def, reg.len() as u16);
            reg.register(compiled);
        }
        Ok(reg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

fn compile_shape(cfg: ShapeCfg, next_id: u16) -> ShapeDef {
    let id = ShapeId(cfg.id.unwrap_or(next_id));
    let display_name = cfg.display_name.unwrap_or_else(|| cfg.name.clone());
    ShapeDef {
        id,
        name: cfg.name,
        display_name,
        size_x: cfg.size_x,
        size_y: cfg.size_y,
        size_z: cfg.size_z,
        stackable: cfg.stackable,
        mesh: cfg.mesh.unwrap_or_else(|| "cube".to_string()),
        climbable: cfg.climbable,
        symmetric: cfg.symmetric,
    }
}
