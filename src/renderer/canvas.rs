//! Canvas 2D backend

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::sim::{Bounds, DrawCommand, DrawList};

/// Paints draw lists onto one canvas
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    /// Match the backing store to the playfield
    pub fn resize(&self, bounds: Bounds) {
        self.canvas.set_width(bounds.width as u32);
        self.canvas.set_height(bounds.height as u32);
    }

    fn width(&self) -> f64 {
        self.canvas.width() as f64
    }

    fn height(&self) -> f64 {
        self.canvas.height() as f64
    }

    pub fn render(&self, draw: &DrawList) -> Result<(), JsValue> {
        for command in draw.commands() {
            match *command {
                DrawCommand::Clear => {
                    self.ctx.clear_rect(0.0, 0.0, self.width(), self.height());
                }
                DrawCommand::Circle { pos, radius, color } => {
                    self.ctx.begin_path();
                    self.ctx
                        .arc(pos.x as f64, pos.y as f64, radius as f64, 0.0, TAU)?;
                    self.ctx.set_fill_style_str(color);
                    self.ctx.fill();
                }
                DrawCommand::Overlay { color } => {
                    self.ctx.set_fill_style_str(color);
                    self.ctx.fill_rect(0.0, 0.0, self.width(), self.height());
                }
                DrawCommand::Text {
                    text,
                    pos,
                    font,
                    color,
                } => {
                    self.ctx.set_fill_style_str(color);
                    self.ctx.set_font(font);
                    self.ctx.fill_text(text, pos.x as f64, pos.y as f64)?;
                }
            }
        }
        Ok(())
    }
}
