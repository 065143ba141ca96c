//! Scene-wide ambient light, forwarded to the host through the protocol header.
//!
//! Only ambient lighting is modelled; Basic-shaded meshes ignore it.

use crate::components::color::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    pub ambient: Color,
    pub intensity: f32,
}

impl Lighting {
    pub fn ambient(color: Color, intensity: f32) -> Self {
        Self {
            ambient: color,
            intensity: intensity.max(0.0),
        }
    }

    /// `[r, g, b, intensity]` as written into the header.
    pub fn to_floats(self) -> [f32; 4] {
        [self.ambient.r, self.ambient.g, self.ambient.b, self.intensity]
    }
}

impl Default for Lighting {
    /// Full white ambient, which renders Phong meshes unshaded.
    fn default() -> Self {
        Self::ambient(Color::WHITE, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_intensity_clamps() {
        assert_eq!(Lighting::ambient(Color::WHITE, -2.0).intensity, 0.0);
    }

    #[test]
    fn floats_layout() {
        let l = Lighting::ambient(Color::from_hex(0xFF0000), 0.5);
        assert_eq!(l.to_floats(), [1.0, 0.0, 0.0, 0.5]);
    }
}
