//! `CanvasRenderingContext2d` backed surface

use std::f64::consts::TAU;

use glam::DVec2;
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::core::{Surface, SurfaceSize};
use crate::error::HostError;
use crate::theme::Rgba;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, HostError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(super::js_err)?
            .ok_or(HostError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| HostError::NoContext)?;
        Ok(Self { canvas, ctx })
    }

    /// Match the canvas backing store to `size` (clears it)
    ///
    /// Callers pass a `rounded()` size so the field wraps on the same
    /// pixel grid as the canvas.
    pub fn set_size(&self, size: SurfaceSize) {
        let size = size.rounded();
        self.canvas.set_width(size.width as u32);
        self.canvas.set_height(size.height as u32);
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, size: SurfaceSize) {
        self.ctx
            .clear_rect(0.0, 0.0, size.width.max(0.0), size.height.max(0.0));
    }

    fn line(&mut self, from: DVec2, to: DVec2, color: Rgba, width: f64) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.set_line_width(width);
        self.ctx.stroke();
    }

    fn glow(&mut self, center: DVec2, radius: f64, color: Rgba) {
        let gradient = match self
            .ctx
            .create_radial_gradient(center.x, center.y, 0.0, center.x, center.y, radius)
        {
            Ok(g) => g,
            Err(e) => {
                debug!(?e, radius, "Skipping glow, gradient rejected");
                return;
            }
        };
        let stops = gradient
            .add_color_stop(0.0, &color.to_string())
            .and_then(|_| gradient.add_color_stop(1.0, &color.transparent().to_string()));
        if let Err(e) = stops {
            debug!(?e, "Skipping glow, colour stop rejected");
            return;
        }

        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(center.x, center.y, radius, 0.0, TAU) {
            debug!(?e, "Skipping glow, arc rejected");
            return;
        }
        self.ctx.fill();
    }
}
