/// Window size in CSS pixels, as reported by `innerWidth` / `innerHeight`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Build from raw `innerWidth` / `innerHeight` readings. Missing,
    /// non-finite or negative readings count as zero.
    #[inline]
    pub fn from_inner(width: Option<f64>, height: Option<f64>) -> Self {
        Self {
            width: sanitize_extent(width),
            height: sanitize_extent(height),
        }
    }

    /// Canvas backing-store size matching this viewport.
    #[inline]
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.width as u32, self.height as u32)
    }
}

#[inline]
fn sanitize_extent(v: Option<f64>) -> f32 {
    match v {
        Some(v) if v.is_finite() && v > 0.0 => v as f32,
        _ => 0.0,
    }
}
