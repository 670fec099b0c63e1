//! Decorative flowing-lines backdrop.
//!
//! Purely presentational: layered wavy lines in desaturated blues filling
//! the lower half of the window, fading out towards the middle.

use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke};

/// Palette from dark (bottom rows) to pale (top rows).
const PALETTE: [[u8; 3]; 9] = [
    [107, 165, 186], // #6ba5ba
    [127, 177, 197], // #7fb1c5
    [147, 189, 208], // #93bdd0
    [165, 201, 219], // #a5c9db
    [184, 212, 227], // #b8d4e3
    [197, 220, 232], // #c5dce8
    [210, 228, 237], // #d2e4ed
    [220, 234, 241], // #dceaf1
    [229, 239, 244], // #e5eff4
];

const ROWS: usize = 7;
const LINES_PER_ROW: usize = 4;
const SAMPLES: usize = 48;

pub fn paint(painter: &Painter, rect: Rect) {
    let half_height = rect.height() * 0.5;
    if half_height <= 0.0 || rect.width() <= 0.0 {
        return;
    }

    for row in 0..ROWS {
        for line in 0..LINES_PER_ROW {
            let idx = row * LINES_PER_ROW + line;

            // Rows stack upwards from the bottom edge; lines within a row
            // sit a few pixels apart.
            let y_frac = (row as f32 + line as f32 / LINES_PER_ROW as f32) / ROWS as f32;
            let base_y = rect.bottom() - y_frac * half_height - 6.0;

            let alpha = (0.5 - row as f32 * 0.05 - line as f32 * 0.04).max(0.08);
            let rgb = PALETTE[(row + line / 2).min(PALETTE.len() - 1)];
            let color = Color32::from_rgba_unmultiplied(
                rgb[0],
                rgb[1],
                rgb[2],
                (alpha * 255.0) as u8,
            );
            let width = if line % 2 == 0 { 2.0 } else { 1.5 };

            let amplitude = 10.0 + (idx % 5) as f32 * 1.5;
            let phase = idx as f32 * 0.9;

            painter.add(Shape::line(
                wave_points(rect, base_y, amplitude, phase),
                Stroke::new(width, color),
            ));
        }
    }
}

fn wave_points(rect: Rect, base_y: f32, amplitude: f32, phase: f32) -> Vec<Pos2> {
    (0..=SAMPLES)
        .map(|s| {
            let f = s as f32 / SAMPLES as f32;
            let x = rect.left() + f * rect.width();
            // two superimposed waves give the irregular, hand-drawn feel
            let y = base_y
                + amplitude * (f * std::f32::consts::TAU * 1.5 + phase).sin()
                + amplitude * 0.4 * (f * std::f32::consts::TAU * 3.2 + phase * 1.7).cos();
            Pos2::new(x, y)
        })
        .collect()
}
