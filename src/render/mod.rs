//! Static demo rendering.
//!
//! A [`Scene`] is an ordered list of blocks; [`render`] walks it with a
//! single vertical cursor. Nothing is measured or wrapped.

pub mod font;
pub mod scene;

use image::RgbImage;
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

pub use font::Typeface;
pub use scene::{steering_scenario, Block, Scene};

/// Draw `scene` onto a fresh canvas.
#[must_use]
pub fn render(scene: &Scene, typeface: &Typeface) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(scene.width, scene.height, scene.background);
    layout(&mut canvas, typeface, &scene.body, scene.top);
    layout(&mut canvas, typeface, &scene.footer, scene.footer_top());
    canvas
}

/// Draw `blocks` starting at row `top`; returns the final cursor row.
fn layout(canvas: &mut RgbImage, typeface: &Typeface, blocks: &[Block], top: i32) -> i32 {
    let mut y = top;
    for block in blocks {
        match block {
            Block::Line { spans, .. } => {
                for span in spans {
                    typeface.draw(canvas, span.color, span.x, y + span.dy, span.style.px(), span.text);
                }
            }
            Block::Rule { x0, x1, thickness, color, .. } => {
                let width = x1.abs_diff(*x0) + 1;
                let half = i32::try_from(thickness / 2).unwrap_or(0);
                let rect = Rect::at((*x0).min(*x1), y - half).of_size(width, (*thickness).max(1));
                draw_filled_rect_mut(canvas, rect, *color);
            }
        }
        y += block.advance();
    }
    y
}
