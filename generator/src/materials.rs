use bevy_ecs::prelude::*;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialId(u32);

#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub id: MaterialId,
    pub name: String,
    /// Linear RGBA; simple materials are always opaque.
    pub base_color: [f32; 4],
}

/// Named materials. Materials outlive scene objects, so clearing the scene
/// leaves this untouched.
#[derive(Resource, Debug, Default)]
pub struct MaterialLibrary {
    materials: Vec<Material>,
    next_id: u32,
}

/// Material assigned to a scene object.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialSlot(pub MaterialId);

impl MaterialLibrary {
    pub fn get(&self, name: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.name == name)
    }

    pub fn by_id(&self, id: MaterialId) -> Option<&Material> {
        self.materials.iter().find(|m| m.id == id)
    }

    pub fn remove(&mut self, name: &str) -> Option<Material> {
        let idx = self.materials.iter().position(|m| m.name == name)?;
        Some(self.materials.remove(idx))
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.iter()
    }

    /// Creates an opaque flat-colour material, dropping any previous material
    /// with the same name first so repeated runs never accumulate duplicates.
    pub fn create_simple_material(&mut self, name: &str, rgb: [f32; 3]) -> MaterialId {
        if let Some(old) = self.remove(name) {
            debug!(name, old_id = ?old.id, "replacing existing material");
        }
        let id = MaterialId(self.next_id);
        self.next_id += 1;
        self.materials.push(Material {
            id,
            name: name.to_string(),
            base_color: [rgb[0], rgb[1], rgb[2], 1.0],
        });
        id
    }
}
