use ab_glyph::{point, Font, FontVec, PxScale, ScaleFont};
use image::{Rgb, RgbImage};
use once_cell::sync::Lazy;

/// Master render dimension; every exported size is derived from this.
pub const MASTER_DIM: u32 = 1024;

// Palette
const BASE: Rgb<u8> = Rgb([30, 136, 229]); // #1E88E5
const GRADIENT_CENTER: Rgb<u8> = Rgb([94, 200, 101]);
const BALL: Rgb<u8> = Rgb([255, 213, 79]); // #FFD54F
const BALL_HIGHLIGHT: Rgb<u8> = Rgb([255, 236, 179]); // #FFECB3
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

const LABEL: &str = "FSP";
const SHADOW_OFFSET: u32 = 3;
const SHADOW_ALPHA: f32 = 51.0 / 255.0; // #00000033

/// Candidate scalable fonts, probed in order. Helvetica first (macOS),
/// then common Linux/Windows locations.
const FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Helvetica.ttc",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

/// Font used for the label: a system scalable font when one can be loaded,
/// otherwise the built-in 5x7 bitmap glyphs. A missing font never fails a render.
pub enum LabelFont {
    Scalable(FontVec),
    Bitmap,
}

static LABEL_FONT: Lazy<LabelFont> = Lazy::new(load_label_font);

fn load_label_font() -> LabelFont {
    for path in FONT_CANDIDATES {
        if let Ok(bytes) = std::fs::read(path) {
            if let Ok(font) = FontVec::try_from_vec_and_index(bytes, 0) {
                return LabelFont::Scalable(font);
            }
        }
    }
    LabelFont::Bitmap
}

/// Render the master icon: radial gradient background, centered ball with
/// highlight, "FSP" label with drop shadow near the bottom.
pub fn generate_master(size: u32) -> RgbImage {
    generate_master_with(size, &LABEL_FONT)
}

pub fn generate_master_with(size: u32, font: &LabelFont) -> RgbImage {
    let mut img = RgbImage::new(size, size);

    let c = size as f32 * 0.5;
    let gradient_radius = size as f32 * 0.5;
    let ball_radius = size as f32 / 6.0;
    // Highlight circle sits up-left of center, diameter a third of the ball's
    let hl_radius = size as f32 / 18.0;
    let hl_c = c - size as f32 / 9.0 + hl_radius;

    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 + 0.5 - c;
            let dy = y as f32 + 0.5 - c;
            let dist = (dx * dx + dy * dy).sqrt();

            // Background: blend from the center color out to the base color at
            // half-width; corners past the radius stay at the base color.
            let t = (dist / gradient_radius).min(1.0);
            let mut color = Rgb([
                lerp(GRADIENT_CENTER.0[0], BASE.0[0], t),
                lerp(GRADIENT_CENTER.0[1], BASE.0[1], t),
                lerp(GRADIENT_CENTER.0[2], BASE.0[2], t),
            ]);

            if dist <= ball_radius {
                color = BALL;
            }
            let hx = x as f32 + 0.5 - hl_c;
            let hy = y as f32 + 0.5 - hl_c;
            if (hx * hx + hy * hy).sqrt() <= hl_radius {
                color = BALL_HIGHLIGHT;
            }

            img.put_pixel(x, y, color);
        }
    }

    let font_px = size / 6;
    let text_w = label_width(font, font_px, LABEL);
    let text_x = size.saturating_sub(text_w) / 2;
    let text_y = size - size / 4;

    draw_label(
        &mut img,
        font,
        font_px,
        text_x + SHADOW_OFFSET,
        text_y + SHADOW_OFFSET,
        LABEL,
        BLACK,
        SHADOW_ALPHA,
    );
    draw_label(&mut img, font, font_px, text_x, text_y, LABEL, WHITE, 1.0);

    img
}

#[inline]
fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round() as u8
}

fn blend_pixel(img: &mut RgbImage, x: u32, y: u32, color: Rgb<u8>, alpha: f32) {
    if x >= img.width() || y >= img.height() {
        return;
    }
    let px = img.get_pixel_mut(x, y);
    for ch in 0..3 {
        let old = px.0[ch] as f32;
        px.0[ch] = (old + (color.0[ch] as f32 - old) * alpha).round() as u8;
    }
}

fn label_width(font: &LabelFont, px: u32, text: &str) -> u32 {
    match font {
        LabelFont::Scalable(font) => {
            let scaled = font.as_scaled(PxScale::from(px as f32));
            let w: f32 = text
                .chars()
                .map(|ch| scaled.h_advance(scaled.scaled_glyph(ch).id))
                .sum();
            w.ceil() as u32
        }
        LabelFont::Bitmap => {
            let s = bitmap_scale(px);
            let n = text.chars().count() as u32;
            if n == 0 { 0 } else { n * 6 * s - s }
        }
    }
}

/// Draw `text` with its top-left corner at (x, y), blended at `alpha`.
fn draw_label(
    img: &mut RgbImage,
    font: &LabelFont,
    px: u32,
    x: u32,
    y: u32,
    text: &str,
    color: Rgb<u8>,
    alpha: f32,
) {
    match font {
        LabelFont::Scalable(font) => {
            let scaled = font.as_scaled(PxScale::from(px as f32));
            let mut caret = point(x as f32, y as f32 + scaled.ascent());
            for ch in text.chars() {
                let mut glyph = scaled.scaled_glyph(ch);
                glyph.position = caret;
                caret.x += scaled.h_advance(glyph.id);
                if let Some(outlined) = scaled.outline_glyph(glyph) {
                    let bounds = outlined.px_bounds();
                    outlined.draw(|gx, gy, coverage| {
                        let px = gx as i32 + bounds.min.x as i32;
                        let py = gy as i32 + bounds.min.y as i32;
                        if px >= 0 && py >= 0 {
                            blend_pixel(img, px as u32, py as u32, color, alpha * coverage);
                        }
                    });
                }
            }
        }
        LabelFont::Bitmap => {
            let s = bitmap_scale(px);
            let mut cx = x;
            for ch in text.chars() {
                if let Some(rows) = bitmap_glyph(ch) {
                    for (ry, row) in rows.iter().enumerate() {
                        for col in 0..5u32 {
                            if row & (1 << (4 - col)) != 0 {
                                fill_square(img, cx + col * s, y + ry as u32 * s, s, color, alpha);
                            }
                        }
                    }
                }
                cx += 6 * s;
            }
        }
    }
}

#[inline]
fn bitmap_scale(px: u32) -> u32 {
    (px / 7).max(1)
}

fn fill_square(img: &mut RgbImage, x: u32, y: u32, side: u32, color: Rgb<u8>, alpha: f32) {
    for dy in 0..side {
        for dx in 0..side {
            blend_pixel(img, x + dx, y + dy, color, alpha);
        }
    }
}

/// Minimal 5x7 glyphs, one bit per pixel, covering the label characters.
fn bitmap_glyph(ch: char) -> Option<[u8; 7]> {
    match ch {
        'F' => Some([
            0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000,
        ]),
        'S' => Some([
            0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110,
        ]),
        'P' => Some([
            0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000,
        ]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_master_dimensions_and_channels() {
        let img = generate_master_with(MASTER_DIM, &LabelFont::Bitmap);
        assert_eq!(img.width(), MASTER_DIM);
        assert_eq!(img.height(), MASTER_DIM);
        assert_eq!(img.sample_layout().channels, 3);
    }

    #[test]
    fn test_render_is_deterministic() {
        let a = generate_master_with(256, &LabelFont::Bitmap);
        let b = generate_master_with(256, &LabelFont::Bitmap);
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_gradient_and_ball_colors() {
        let img = generate_master_with(256, &LabelFont::Bitmap);
        // Corners lie past the gradient radius and keep the base color
        assert_eq!(*img.get_pixel(0, 0), BASE);
        assert_eq!(*img.get_pixel(255, 0), BASE);
        // Image center is covered by the ball
        assert_eq!(*img.get_pixel(128, 128), BALL);
        // Up-left of center sits the highlight
        assert_eq!(
            *img.get_pixel(128 - 256 / 18, 128 - 256 / 18),
            BALL_HIGHLIGHT
        );
    }

    #[test]
    fn test_bitmap_fallback_paints_label() {
        let img = generate_master_with(256, &LabelFont::Bitmap);
        // The label band near the bottom quarter must contain opaque white pixels
        let found = (192..256).any(|y| (0..256).any(|x| *img.get_pixel(x, y) == WHITE));
        assert!(found, "no white label pixels in the bottom quarter");
    }

    #[test]
    fn test_loaded_font_renders_without_panic() {
        // Whatever the probe finds (or the bitmap default), rendering completes
        let img = generate_master(128);
        assert_eq!(img.dimensions(), (128, 128));
    }
}
