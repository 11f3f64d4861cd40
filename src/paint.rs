use glam::Vec2;
use linktree_core::{CircleFill, LineStroke, Painter, RadialGradient};
use std::f64::consts::TAU;
use wasm_bindgen::JsValue;
use web_sys as web;

/// [`Painter`] backed by a canvas 2D context.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Painter for CanvasPainter {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    #[allow(deprecated)]
    fn fill_radial_gradient(&mut self, gradient: &RadialGradient, width: f32, height: f32) {
        let grad = match self.ctx.create_radial_gradient(
            gradient.inner_center.x as f64,
            gradient.inner_center.y as f64,
            gradient.inner_radius.max(0.0) as f64,
            gradient.outer_center.x as f64,
            gradient.outer_center.y as f64,
            gradient.outer_radius.max(0.0) as f64,
        ) {
            Ok(g) => g,
            Err(e) => {
                log::warn!("createRadialGradient failed: {:?}", e);
                return;
            }
        };
        for stop in &gradient.stops {
            _ = grad.add_color_stop(stop.offset, &stop.color.to_css());
        }
        self.ctx.set_fill_style(&grad);
        self.ctx.fill_rect(0.0, 0.0, width as f64, height as f64);
    }

    #[allow(deprecated)]
    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: CircleFill) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.set_global_alpha(fill.alpha as f64);
        ctx.begin_path();
        _ = ctx.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        let css = JsValue::from_str(&fill.color.to_css());
        ctx.set_fill_style(&css);
        if let Some(blur) = fill.glow {
            ctx.set_shadow_color(&fill.color.to_css());
            ctx.set_shadow_blur(blur as f64);
        }
        ctx.fill();
        ctx.restore();
    }

    #[allow(deprecated)]
    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: LineStroke) {
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.move_to(from.x as f64, from.y as f64);
        ctx.line_to(to.x as f64, to.y as f64);
        ctx.set_stroke_style(&JsValue::from_str(&stroke.color.to_css()));
        ctx.set_line_width(stroke.width as f64);
        ctx.stroke();
    }
}
