use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialRole {
    WallDark,
    WallAccent,
    Floor,
}

impl MaterialRole {
    pub const ALL: [MaterialRole; 3] = [Self::WallDark, Self::WallAccent, Self::Floor];
}

/// Flat-colour material description. Alpha is always opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    pub name: String,
    /// Linear RGB base colour.
    pub base_color: [f32; 3],
}

pub fn palette(role: MaterialRole) -> MaterialSpec {
    let (name, base_color) = match role {
        // Dark bluish grey
        MaterialRole::WallDark => ("WallDark", [0.1, 0.1, 0.15]),
        // Strong orange
        MaterialRole::WallAccent => ("WallAccent", [0.85, 0.25, 0.05]),
        // Mid grey asphalt
        MaterialRole::Floor => ("FloorAsphalt", [0.25, 0.25, 0.3]),
    };
    MaterialSpec { name: name.to_string(), base_color }
}
