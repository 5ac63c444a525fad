use crate::constants::LINE_WIDTH;
use crate::core::{Painter, Rgb};
use glam::DVec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `Painter` backed by a canvas 2D context.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { ctx })
    }
}

impl Painter for CanvasPainter {
    fn clear(&mut self, size: DVec2) {
        self.ctx.clear_rect(0.0, 0.0, size.x, size.y);
    }

    fn line(&mut self, from: DVec2, to: DVec2, color: Rgb, alpha: f64) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.set_global_alpha(alpha);
        ctx.set_stroke_style_str(&color.to_css());
        ctx.set_line_width(LINE_WIDTH);
        ctx.begin_path();
        ctx.move_to(from.x, from.y);
        ctx.line_to(to.x, to.y);
        ctx.stroke();
        ctx.restore();
    }

    fn circle(&mut self, center: DVec2, radius: f64, color: Rgb, alpha: f64) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.set_global_alpha(alpha);
        ctx.set_fill_style_str(&color.to_css());
        ctx.begin_path();
        _ = ctx.arc(center.x, center.y, radius, 0.0, TAU);
        ctx.fill();
        ctx.restore();
    }
}
