/// Displayed size versus drawing-buffer size of the canvas.
///
/// The host reports the CSS client size and device pixel ratio; the backing
/// size is what the drawing buffer currently has. A resize is needed when
/// `client * dpr` (truncated) differs from the backing size.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    client_width: f32,
    client_height: f32,
    pixel_ratio: f32,
    backing_width: u32,
    backing_height: u32,
}

impl Viewport {
    /// Start from the canvas element's initial drawing-buffer size.
    pub fn new(backing_width: u32, backing_height: u32) -> Self {
        Self {
            client_width: backing_width as f32,
            client_height: backing_height as f32,
            pixel_ratio: 1.0,
            backing_width,
            backing_height,
        }
    }

    pub fn set_client_size(&mut self, width: f32, height: f32, pixel_ratio: f32) {
        self.client_width = width.max(0.0);
        self.client_height = height.max(0.0);
        self.pixel_ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 { pixel_ratio } else { 1.0 };
    }

    /// Drawing-buffer size that matches the displayed size.
    pub fn desired_backing(&self) -> (u32, u32) {
        (
            (self.client_width * self.pixel_ratio) as u32,
            (self.client_height * self.pixel_ratio) as u32,
        )
    }

    /// Cheap comparison every frame; adopts the new size only on mismatch.
    /// Returns true when the drawing buffer must be resized.
    pub fn resize_if_needed(&mut self) -> bool {
        let (w, h) = self.desired_backing();
        if w == self.backing_width && h == self.backing_height {
            return false;
        }
        self.backing_width = w;
        self.backing_height = h;
        true
    }

    pub fn backing_size(&self) -> (u32, u32) {
        (self.backing_width, self.backing_height)
    }

    pub fn client_size(&self) -> (f32, f32) {
        (self.client_width, self.client_height)
    }

    /// Camera aspect from the displayed size. None for a zero-height canvas.
    pub fn aspect(&self) -> Option<f32> {
        (self.client_height > 0.0).then(|| self.client_width / self.client_height)
    }
}

impl Default for Viewport {
    /// A fresh canvas element is 300×150.
    fn default() -> Self {
        Self::new(300, 150)
    }
}
