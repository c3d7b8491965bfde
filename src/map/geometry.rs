use crate::braille::BrailleCanvas;
use crate::map::paint::Rgba;
use glam::DVec2;

/// Draw a line using Bresenham's algorithm
pub fn draw_line(canvas: &mut BrailleCanvas, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = x0;
    let mut y = y0;

    loop {
        canvas.set_pixel_signed(x, y, color);

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;

        if e2 >= dy {
            if x == x1 {
                break;
            }
            err += dy;
            x += sx;
        }

        if e2 <= dx {
            if y == y1 {
                break;
            }
            err += dx;
            y += sy;
        }
    }
}

/// Line between two float points, thickened by parallel offsets for widths above one dot.
/// Segments that leave the canvas by more than a screen are dropped rather than walked.
pub fn draw_segment(canvas: &mut BrailleCanvas, a: DVec2, b: DVec2, width: f64, color: Rgba) {
    let (w, h) = canvas.pixel_size();
    let limit = (w + h) as f64 * 2.0;
    if !(a.is_finite() && b.is_finite()) || a.abs().max_element() > limit || b.abs().max_element() > limit {
        return;
    }

    let (x0, y0) = (a.x.round() as i32, a.y.round() as i32);
    let (x1, y1) = (b.x.round() as i32, b.y.round() as i32);
    draw_line(canvas, x0, y0, x1, y1, color);

    let extra = (width.round() as i32 - 1).max(0);
    if extra == 0 {
        return;
    }
    // Offset along whichever axis is more perpendicular to the segment
    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    for k in 1..=extra {
        let off = if k % 2 == 1 { (k + 1) / 2 } else { -(k / 2) };
        if steep {
            draw_line(canvas, x0 + off, y0, x1 + off, y1, color);
        } else {
            draw_line(canvas, x0, y0 + off, x1, y1 + off, color);
        }
    }
}

/// Draw a filled circle of dots (for city markers)
pub fn draw_circle(canvas: &mut BrailleCanvas, cx: i32, cy: i32, radius: i32, color: Rgba) {
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                canvas.set_pixel_signed(cx + dx, cy + dy, color);
            }
        }
    }
}

/// X ranges where the horizontal line at `y` is inside `polygon` (even-odd rule).
pub fn scanline_spans(polygon: &[DVec2], y: f64) -> Vec<(f64, f64)> {
    let mut crossings: Vec<f64> = Vec::new();
    let n = polygon.len();
    for i in 0..n {
        let a = polygon[i];
        let b = polygon[(i + 1) % n];
        if (a.y > y) != (b.y > y) {
            crossings.push(a.x + (y - a.y) / (b.y - a.y) * (b.x - a.x));
        }
    }
    crossings.sort_by(f64::total_cmp);
    crossings.chunks_exact(2).map(|pair| (pair[0], pair[1])).collect()
}
