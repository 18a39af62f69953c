//! Font resolution and glyph drawing.

use std::path::{Path, PathBuf};

use ab_glyph::{FontVec, PxScale};
use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut};
use imageproc::rect::Rect;

/// Cell size of the built-in bitmap font.
const CELL: u32 = 8;

/// The typeface used for every span of a render.
pub enum Typeface {
    /// A scalable font loaded from disk.
    Outline {
        /// Parsed font data.
        font: FontVec,
        /// File it was loaded from.
        source: PathBuf,
    },
    /// The 8x8 bitmap font compiled into the binary.
    Builtin,
}

impl Typeface {
    /// Pick the first candidate that reads and parses, or the built-in font.
    #[must_use]
    pub fn resolve(candidates: &[PathBuf]) -> Self {
        for path in candidates {
            match load_font(path) {
                Ok(font) => {
                    tracing::debug!(path = %path.display(), "using font");
                    return Self::Outline { font, source: path.clone() };
                }
                Err(reason) => {
                    tracing::debug!(path = %path.display(), %reason, "font candidate skipped");
                }
            }
        }
        tracing::debug!("no font candidate resolved, using built-in bitmap font");
        Self::Builtin
    }

    /// Human-readable name for summaries.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Outline { source, .. } => source.display().to_string(),
            Self::Builtin => "built-in 8x8 bitmap".to_string(),
        }
    }

    /// Draw `text` with its top-left corner at `(x, y)`.
    pub fn draw(&self, canvas: &mut RgbImage, color: Rgb<u8>, x: i32, y: i32, px: u16, text: &str) {
        match self {
            Self::Outline { font, .. } => {
                draw_text_mut(canvas, color, x, y, PxScale::from(f32::from(px)), font, text);
            }
            Self::Builtin => draw_bitmap_text(canvas, color, x, y, bitmap_scale(px), text),
        }
    }
}

fn load_font(path: &Path) -> Result<FontVec, String> {
    let data = std::fs::read(path).map_err(|e| e.to_string())?;
    FontVec::try_from_vec(data).map_err(|e| e.to_string())
}

/// Integer magnification of the 8 px cell closest to `px`.
fn bitmap_scale(px: u16) -> u32 {
    ((u32::from(px) + CELL / 2) / CELL).max(1)
}

fn draw_bitmap_text(canvas: &mut RgbImage, color: Rgb<u8>, x: i32, y: i32, scale: u32, text: &str) {
    let advance = i32::try_from(CELL * scale).unwrap_or(i32::MAX);
    let dot = i32::try_from(scale).unwrap_or(1);

    let mut pen = x;
    for ch in text.chars() {
        let glyph = BASIC_FONTS.get(ch).or_else(|| BASIC_FONTS.get('?')).unwrap_or_default();
        for (row, bits) in (0..).zip(glyph) {
            for col in 0..8 {
                if (bits >> col) & 1 == 1 {
                    let rect = Rect::at(pen + col * dot, y + row * dot).of_size(scale, scale);
                    draw_filled_rect_mut(canvas, rect, color);
                }
            }
        }
        pen = pen.saturating_add(advance);
    }
}
