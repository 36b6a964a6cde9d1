//! Canvas 2D renderer for the browser build

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement};

use super::{Renderer, brick_color};
use crate::sim::GameState;

const BALL_COLOR: &str = "#e53935";
const PADDLE_COLOR: &str = "#78909c";

/// Draws onto a `<canvas>` and updates the `.status` / `.lives` elements
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    document: Document,
    status: Option<Element>,
    lives: Option<Element>,
}

impl CanvasRenderer {
    /// Returns `None` if the canvas has no 2D context
    pub fn new(canvas: &HtmlCanvasElement, document: Document) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        let status = document.query_selector(".status").ok().flatten();
        let lives = document.query_selector(".lives").ok().flatten();
        if status.is_none() {
            log::warn!("No .status element, status text will not be shown");
        }
        Some(Self {
            ctx,
            document,
            status,
            lives,
        })
    }
}

impl Renderer for CanvasRenderer {
    fn draw(&mut self, state: &GameState) {
        let arena = &state.arena;
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, arena.width as f64, arena.height as f64);

        let (bw, bh) = (arena.brick_width() as f64, arena.brick_height() as f64);
        for (row, col, durability) in state.bricks.iter_live() {
            let origin = arena.cell_origin(row, col);
            ctx.set_fill_style_str(brick_color(durability));
            // 1px gutter between bricks
            ctx.fill_rect(origin.x as f64 + 1.0, origin.y as f64 + 1.0, bw - 2.0, bh - 2.0);
        }

        if !state.phase.is_running() {
            return;
        }

        let paddle = &state.paddle;
        ctx.set_fill_style_str(PADDLE_COLOR);
        ctx.fill_rect(
            paddle.pos as f64,
            (arena.height - 2.0 * paddle.height) as f64,
            paddle.width as f64,
            paddle.height as f64,
        );

        let ball = &state.ball;
        ctx.set_fill_style_str(BALL_COLOR);
        ctx.begin_path();
        if ctx
            .arc(
                ball.pos.x as f64,
                ball.pos.y as f64,
                (ball.size / 2.0) as f64,
                0.0,
                std::f64::consts::TAU,
            )
            .is_ok()
        {
            ctx.fill();
        }
    }

    fn show_status(&mut self, text: Option<&str>) {
        if let Some(el) = &self.status {
            el.set_text_content(Some(text.unwrap_or("")));
        }
    }

    fn show_lives(&mut self, count: u32) {
        let Some(container) = &self.lives else {
            return;
        };
        container.set_inner_html("");
        for _ in 0..count {
            if let Ok(life) = self.document.create_element("span") {
                let _ = container.append_child(&life);
            }
        }
    }
}
