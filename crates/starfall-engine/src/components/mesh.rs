use crate::assets::registry::TextureId;
use crate::components::color::Color;

/// How the host should light a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shading {
    /// Lit by the scene lights, honours emissive and bump maps.
    #[default]
    Phong,
    /// Flat colour, ignores lights.
    Basic,
}

impl Shading {
    pub fn as_f32(self) -> f32 {
        match self {
            Shading::Phong => 0.0,
            Shading::Basic => 1.0,
        }
    }
}

/// Surface description handed to the host renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Color,
    /// Added on top of lighting. The pick highlight writes here.
    pub emissive: Color,
    pub map: Option<TextureId>,
    pub bump_map: Option<TextureId>,
    pub shading: Shading,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            emissive: Color::BLACK,
            map: None,
            bump_map: None,
            shading: Shading::Phong,
        }
    }
}

impl Material {
    pub fn phong(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    pub fn basic(color: Color) -> Self {
        Self {
            color,
            shading: Shading::Basic,
            ..Default::default()
        }
    }

    pub fn with_map(mut self, map: Option<TextureId>) -> Self {
        self.map = map;
        self
    }

    pub fn with_bump_map(mut self, bump_map: Option<TextureId>) -> Self {
        self.bump_map = bump_map;
        self
    }
}

/// Sphere mesh component. Every renderable in the demos is a sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshComponent {
    pub radius: f32,
    pub material: Material,
}

impl MeshComponent {
    pub fn sphere(radius: f32, material: Material) -> Self {
        Self { radius, material }
    }
}
