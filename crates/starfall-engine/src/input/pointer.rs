use glam::Vec2;

/// Last known pointer position in normalized device coordinates
/// (x right, y up, both roughly in [-1, 1]), or nothing when the pointer
/// has left the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    ndc: Option<Vec2>,
}

impl PointerState {
    pub fn at(ndc: Vec2) -> Self {
        Self { ndc: Some(ndc) }
    }

    pub fn absent() -> Self {
        Self { ndc: None }
    }

    pub fn set(&mut self, ndc: Vec2) {
        self.ndc = Some(ndc);
    }

    pub fn clear(&mut self) {
        self.ndc = None;
    }

    pub fn ndc(&self) -> Option<Vec2> {
        self.ndc
    }
}

/// Convert a position relative to the canvas's top-left corner (CSS pixels)
/// to normalized device coordinates. Returns None for an empty canvas.
pub fn canvas_to_ndc(x: f32, y: f32, css_width: f32, css_height: f32) -> Option<Vec2> {
    if css_width <= 0.0 || css_height <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        (x / css_width) * 2.0 - 1.0,
        (y / css_height) * -2.0 + 1.0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_ndc_extremes() {
        assert_eq!(canvas_to_ndc(0.0, 0.0, 800.0, 600.0), Some(Vec2::new(-1.0, 1.0)));
        assert_eq!(canvas_to_ndc(800.0, 600.0, 800.0, 600.0), Some(Vec2::new(1.0, -1.0)));
        assert_eq!(canvas_to_ndc(400.0, 300.0, 800.0, 600.0), Some(Vec2::ZERO));
    }

    #[test]
    fn empty_canvas_has_no_ndc() {
        assert_eq!(canvas_to_ndc(10.0, 10.0, 0.0, 600.0), None);
    }

    #[test]
    fn leave_clears_position() {
        let mut p = PointerState::default();
        assert_eq!(p.ndc(), None);
        p.set(Vec2::new(0.5, -0.5));
        assert_eq!(p.ndc(), Some(Vec2::new(0.5, -0.5)));
        p.clear();
        assert_eq!(p, PointerState::absent());
    }
}
