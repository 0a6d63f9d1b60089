//! Rasterization of drawings to shareable images.
//!
//! The widget and thumbnail consumers use egui to paint; this path exists
//! for exporting a day's sketch as a standalone PNG, so it rasterizes
//! directly with the `image` crate instead of going through a GPU surface.

use std::path::Path;

use egui::{Pos2, pos2};
use image::{Rgba, RgbaImage};

use crate::canvas::{DOT_RADIUS, LINE_WIDTH, LOGICAL_CANVAS_SIZE};
use crate::drawing::Drawing;
use crate::geometry::{bounding_rect, distance_to_line_segment};

const INK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const PAPER: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Render a drawing into a square RGBA image of the given pixel size.
///
/// Coordinates are scaled uniformly by `size_px / logical_size`, matching
/// the on-screen renderer.
pub fn render_to_image(drawing: &Drawing, size_px: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size_px, size_px, PAPER);
    let scale = size_px as f32 / LOGICAL_CANVAS_SIZE;

    for stroke in drawing.strokes() {
        if !stroke.is_renderable() {
            continue;
        }
        if stroke.is_dot() {
            if let Some(center) = stroke.center() {
                let c = scaled(center, scale);
                stamp_segment(&mut img, c, c, DOT_RADIUS * scale);
            }
        } else {
            let radius = LINE_WIDTH * scale / 2.0;
            for segment in stroke.points().windows(2) {
                let a = scaled(segment[0], scale);
                let b = scaled(segment[1], scale);
                stamp_segment(&mut img, a, b, radius);
            }
        }
    }

    img
}

/// Render and write a PNG in one step.
pub fn save_png(drawing: &Drawing, path: &Path, size_px: u32) -> image::ImageResult<()> {
    render_to_image(drawing, size_px).save(path)
}

fn scaled(point: Pos2, scale: f32) -> Pos2 {
    pos2(point.x * scale, point.y * scale)
}

/// Fill every pixel within `radius` of the segment `a`..`b`. A degenerate
/// segment stamps a disc, which is how dots are drawn.
fn stamp_segment(img: &mut RgbaImage, a: Pos2, b: Pos2, radius: f32) {
    if img.width() == 0 || img.height() == 0 {
        return;
    }
    let bounds = bounding_rect(&[a, b], radius + 1.0);
    let x0 = bounds.min.x.floor().max(0.0) as u32;
    let y0 = bounds.min.y.floor().max(0.0) as u32;
    let x1 = (bounds.max.x.ceil() as u32).min(img.width().saturating_sub(1));
    let y1 = (bounds.max.y.ceil() as u32).min(img.height().saturating_sub(1));

    for y in y0..=y1 {
        for x in x0..=x1 {
            // Sample at the pixel center.
            let p = pos2(x as f32 + 0.5, y as f32 + 0.5);
            if distance_to_line_segment(p, a, b) <= radius {
                img.put_pixel(x, y, INK);
            }
        }
    }
}
