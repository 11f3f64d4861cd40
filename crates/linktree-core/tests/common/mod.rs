// Recording painter shared by the host-side tests.

#![allow(dead_code)]
use glam::Vec2;
use linktree_core::{CircleFill, LineStroke, Painter, RadialGradient};

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear(f32, f32),
    Gradient(RadialGradient),
    Circle(Vec2, f32, CircleFill),
    Line(Vec2, Vec2, LineStroke),
}

#[derive(Default)]
pub struct RecordingPainter {
    pub ops: Vec<Op>,
}

impl RecordingPainter {
    pub fn circles(&self) -> Vec<(Vec2, f32, CircleFill)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Circle(c, r, f) => Some((*c, *r, *f)),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> Vec<(Vec2, Vec2, LineStroke)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Line(a, b, s) => Some((*a, *b, *s)),
                _ => None,
            })
            .collect()
    }
}

impl Painter for RecordingPainter {
    fn clear(&mut self, width: f32, height: f32) {
        self.ops.push(Op::Clear(width, height));
    }

    fn fill_radial_gradient(&mut self, gradient: &RadialGradient, _width: f32, _height: f32) {
        self.ops.push(Op::Gradient(gradient.clone()));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: CircleFill) {
        self.ops.push(Op::Circle(center, radius, fill));
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: LineStroke) {
        self.ops.push(Op::Line(from, to, stroke));
    }
}
