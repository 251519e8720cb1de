use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use crate::config::{MaterialCfg, MaterialsConfig};
use crate::types::MaterialId;

#[derive(Clone, Debug)]
pub struct MaterialDef {
    pub id: MaterialId,
    pub name: String,
    pub display_name: String,
    pub color: [f32; 4],
    pub texture: Option<String>,
    pub solid: bool,
    pub liquid: bool,
    pub density: f32,
    pub hardness: u8,
}

/// Display/physical metadata lookup. Placement math never reads it; the
/// registry exists so hosts resolve the same flat records the core was
/// loaded from.
#[derive(Default, Clone, Debug)]
pub struct MaterialRegistry {
    materials: HashMap<MaterialId, MaterialDef>,
    by_name: HashMap<String, MaterialId>,
}

impl MaterialRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, def: MaterialDef) {
        self.by_name.insert(def.name.clone(), def.id);
        self.materials.insert(def.id, def);
    }

    #[inline]
    pub fn get(&self, id: MaterialId) -> Option<&MaterialDef> {
        self.materials.get(&id)
    }

    pub fn get_by_name(&self, name: &str) -> Option<&MaterialDef> {
        self.by_name.get(name).and_then(|id| self.materials.get(id))
    }

    pub fn id_by_name(&self, name: &str) -> Option<MaterialId> {
        self.by_name.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MaterialDef> {
        self.materials.values()
    }

    pub fn clear(&mut self) {
        self.materials.clear();
        self.by_name.clear();
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: MaterialsConfig = toml::from_str(toml_str)?;
        let mut reg = MaterialRegistry::new();
        for def in cfg.materials.into_iter() {
            let compiled = compile_material(def, reg.len() as u16);
            reg.register(compiled);
        }
        Ok(reg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

fn compile_material(cfg: MaterialCfg, next_id: u16) -> MaterialDef {
    let id = MaterialId(cfg.id.unwrap_or(next_id));
    let display_name = cfg.display_name.unwrap_or_else(|| cfg.name.clone());
    MaterialDef {
        id,
        name: cfg.name,
        display_name,
        color: cfg.color,
        texture: cfg.texture,
        solid: cfg.solid,
        liquid: cfg.liquid,
        density: cfg.density,
        hardness: cfg.hardness,
    }
}
