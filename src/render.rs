//! Canvas 2D view of the target field as seen through the aim camera.

use crate::constants::*;
use crate::viewport::{fade, ndc_to_px, screen_radius_px};
use aim_core::constants::{TARGET_CORE_RADIUS, TARGET_RADIUS};
use aim_core::{AimCamera, Target};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("get_context failed: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

fn disc(ctx: &web::CanvasRenderingContext2d, x: f64, y: f64, r: f64, color: &str, alpha: f64) {
    ctx.set_global_alpha(alpha);
    ctx.set_fill_style_str(color);
    ctx.begin_path();
    _ = ctx.arc(x, y, r, 0.0, TAU);
    ctx.fill();
}

fn ring(ctx: &web::CanvasRenderingContext2d, x: f64, y: f64, r: f64, color: &str, alpha: f64) {
    ctx.set_global_alpha(alpha);
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(HIT_RING_WIDTH_PX);
    ctx.begin_path();
    _ = ctx.arc(x, y, r, 0.0, TAU);
    ctx.stroke();
}

pub fn draw(
    ctx: &web::CanvasRenderingContext2d,
    canvas: &web::HtmlCanvasElement,
    camera: &AimCamera,
    targets: &[Target],
    now_ms: u64,
) {
    let width = canvas.width() as f32;
    let height = canvas.height() as f32;

    ctx.set_global_alpha(1.0);
    ctx.set_fill_style_str(BACKGROUND_COLOR);
    ctx.fill_rect(0.0, 0.0, width as f64, height as f64);

    // Painter's order: far targets first
    let mut order: Vec<(usize, f32)> = targets
        .iter()
        .enumerate()
        .map(|(i, t)| (i, (t.center - camera.eye).length()))
        .collect();
    order.sort_by(|a, b| b.1.total_cmp(&a.1));

    for (i, distance) in order {
        let target = &targets[i];
        let Some(ndc) = camera.project(target.center) else {
            continue;
        };
        let p = ndc_to_px(ndc, width, height);
        let (x, y) = (p.x as f64, p.y as f64);
        let r = screen_radius_px(TARGET_RADIUS, distance, camera.fovy_degrees, height) as f64;

        match target.hit_at_ms() {
            None => {
                let color = if target.hovered {
                    TARGET_HOVER_COLOR
                } else {
                    TARGET_COLOR
                };
                disc(ctx, x, y, r, color, 1.0);
                let core =
                    screen_radius_px(TARGET_CORE_RADIUS, distance, camera.fovy_degrees, height);
                let core_alpha = if target.hovered { 1.0 } else { CORE_ALPHA };
                disc(ctx, x, y, core as f64, TARGET_CORE_COLOR, core_alpha);
            }
            Some(hit_at) => {
                let alpha = fade(now_ms.saturating_sub(hit_at) as f64, HIT_FLASH_MS);
                ring(ctx, x, y, r * (2.0 - alpha), TARGET_HOVER_COLOR, alpha);
            }
        }
    }

    disc(
        ctx,
        width as f64 * 0.5,
        height as f64 * 0.5,
        CROSSHAIR_RADIUS_PX,
        CROSSHAIR_COLOR,
        1.0,
    );
    ctx.set_global_alpha(1.0);
}
