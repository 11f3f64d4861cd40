//! Drawing seam between the simulations and a 2D canvas.
//!
//! The simulations only describe *what* to draw; the web frontend implements
//! [`Painter`] on top of `CanvasRenderingContext2d`, and tests record calls.

use glam::Vec2;
use std::fmt;

/// 8-bit RGB color with a straight (non-premultiplied) alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS color string: `#rrggbb` when opaque, `rgba(r, g, b, a)` otherwise.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a >= 1.0 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a.max(0.0))
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Color,
}

/// Two-circle radial gradient, as accepted by `createRadialGradient`.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub inner_center: Vec2,
    pub inner_radius: f32,
    pub outer_center: Vec2,
    pub outer_radius: f32,
    pub stops: Vec<ColorStop>,
}

/// Fill parameters for a circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleFill {
    pub color: Color,
    /// Global alpha applied on top of `color.a`.
    pub alpha: f32,
    /// Shadow blur radius in pixels; the shadow takes the fill color.
    pub glow: Option<f32>,
}

impl CircleFill {
    pub fn solid(color: Color) -> Self {
        Self {
            color,
            alpha: 1.0,
            glow: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStroke {
    pub color: Color,
    pub width: f32,
}

pub trait Painter {
    /// Erase the whole `width` x `height` surface.
    fn clear(&mut self, width: f32, height: f32);
    /// Fill the whole `width` x `height` surface with `gradient`.
    fn fill_radial_gradient(&mut self, gradient: &RadialGradient, width: f32, height: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: CircleFill);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: LineStroke);
}
