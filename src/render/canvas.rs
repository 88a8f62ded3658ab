//! Canvas 2D backend for the `Surface` trait

use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

use super::Surface;
use crate::sim::Rgb;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb) {
        self.ctx.begin_path();
        self.ctx.set_fill_style_str(&color.to_css());
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Rgb, line_width: f32) {
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(line_width as f64);
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.stroke();
    }

    fn fade_rect(&mut self, origin: Vec2, size: Vec2, color: Rgb, alpha: f32) {
        self.ctx.set_fill_style_str(&format!(
            "rgba({},{},{},{})",
            color.r, color.g, color.b, alpha
        ));
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }
}
