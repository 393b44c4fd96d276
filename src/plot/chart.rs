use ab_glyph::{FontRef, PxScale};
use image::{imageops, Rgb, RgbImage};
use imageproc::drawing::{
    draw_antialiased_line_segment_mut, draw_filled_rect_mut, draw_hollow_rect_mut, draw_line_segment_mut,
    draw_text_mut, text_size,
};
use imageproc::pixelops::interpolate;
use imageproc::rect::Rect;

pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const AXIS_COLOR: Rgb<u8> = Rgb([38, 38, 38]);
const LEGEND_BORDER: Rgb<u8> = Rgb([204, 204, 204]);

/// Opacity of histogram lines over the background and each other
const LINE_ALPHA: f32 = 0.7;

const TITLE_SCALE: f32 = 18.0;
const LABEL_SCALE: f32 = 15.0;
const TICK_SCALE: f32 = 12.0;

// Space around the plot area inside a subplot region
const MARGIN_LEFT: u32 = 78;
const MARGIN_RIGHT: u32 = 20;
const MARGIN_TOP: u32 = 36;
const MARGIN_BOTTOM: u32 = 52;

const TICK_LENGTH: i32 = 5;
const X_TICKS: [u32; 6] = [0, 50, 100, 150, 200, 250];
/// Highest bin index, the right end of the x axis
const X_MAX: f32 = 255.0;

pub struct Series<'a> {
    pub label: &'a str,
    pub color: Rgb<u8>,
    pub counts: &'a [u32],
}

pub struct Subplot<'a> {
    pub title: &'a str,
    pub x_label: &'a str,
    pub y_label: &'a str,
    pub series: Vec<Series<'a>>,
    pub legend: bool,
}

/// Pixel rectangle of a canvas that one subplot occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub fn full(width: u32, height: u32) -> Self {
        Self { x: 0, y: 0, width, height }
    }

    /// Split into a `rows` × `cols` grid, returned row by row.
    pub fn grid(self, rows: u32, cols: u32) -> Vec<Region> {
        let cell_w = self.width / cols;
        let cell_h = self.height / rows;

        (0..rows)
            .flat_map(|r| {
                (0..cols).map(move |c| Region {
                    x: self.x + (c * cell_w) as i32,
                    y: self.y + (r * cell_h) as i32,
                    width: cell_w,
                    height: cell_h,
                })
            })
            .collect()
    }
}

/// Maps data coordinates into the plot area of a subplot.
struct Axes {
    left: f32,
    top: f32,
    width: f32,
    height: f32,
    y_top: f32,
}

impl Axes {
    fn x(&self, bin: f32) -> f32 {
        self.left + bin / X_MAX * self.width
    }

    fn y(&self, count: f32) -> f32 {
        self.top + self.height - count / self.y_top * self.height
    }

    fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Tick spacing giving roughly five ticks up to `max`, never below 1.
pub fn tick_step(max: u32) -> u64 {
    let raw = (max as f64 / 5.0).max(1.0);
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };

    ((nice * magnitude) as u64).max(1)
}

pub fn draw_subplot(canvas: &mut RgbImage, region: Region, subplot: &Subplot, font: &FontRef) {
    let max = subplot
        .series
        .iter()
        .flat_map(|s| s.counts.iter().copied())
        .max()
        .unwrap_or(0);
    let step = tick_step(max);

    let axes = Axes {
        left: (region.x + MARGIN_LEFT as i32) as f32,
        top: (region.y + MARGIN_TOP as i32) as f32,
        width: region.width.saturating_sub(MARGIN_LEFT + MARGIN_RIGHT).max(1) as f32,
        height: region.height.saturating_sub(MARGIN_TOP + MARGIN_BOTTOM).max(1) as f32,
        y_top: (max as f32 * 1.05).max(1.0),
    };

    draw_centered_text(
        canvas,
        region.x + region.width as i32 / 2,
        region.y + 10,
        TITLE_SCALE,
        font,
        subplot.title,
    );

    draw_x_axis(canvas, &axes, font);
    draw_y_axis(canvas, &axes, step, font);

    draw_centered_text(
        canvas,
        (axes.left + axes.width / 2.0) as i32,
        region.y + region.height as i32 - 24,
        LABEL_SCALE,
        font,
        subplot.x_label,
    );
    draw_vertical_text(
        canvas,
        region.x + 14,
        (axes.top + axes.height / 2.0) as i32,
        LABEL_SCALE,
        font,
        subplot.y_label,
    );

    for series in &subplot.series {
        draw_series(canvas, &axes, series);
    }

    // frame last so it stays crisp on top of the lines
    draw_hollow_rect_mut(
        canvas,
        Rect::at(axes.left as i32, axes.top as i32).of_size(axes.width as u32 + 1, axes.height as u32 + 1),
        AXIS_COLOR,
    );

    if subplot.legend {
        draw_legend(canvas, &axes, &subplot.series, font);
    }
}

fn draw_x_axis(canvas: &mut RgbImage, axes: &Axes, font: &FontRef) {
    let bottom = axes.bottom();
    for tick in X_TICKS {
        let x = axes.x(tick as f32);
        draw_line_segment_mut(canvas, (x, bottom), (x, bottom + TICK_LENGTH as f32), AXIS_COLOR);
        draw_centered_text(canvas, x as i32, bottom as i32 + TICK_LENGTH + 3, TICK_SCALE, font, &tick.to_string());
    }
}

fn draw_y_axis(canvas: &mut RgbImage, axes: &Axes, step: u64, font: &FontRef) {
    let scale = PxScale::from(TICK_SCALE);
    let mut value = 0u64;

    while value as f32 <= axes.y_top {
        let y = axes.y(value as f32);
        draw_line_segment_mut(canvas, (axes.left - TICK_LENGTH as f32, y), (axes.left, y), AXIS_COLOR);

        let label = value.to_string();
        let (w, h) = text_size(scale, font, &label);
        draw_text_mut(
            canvas,
            AXIS_COLOR,
            axes.left as i32 - TICK_LENGTH - 3 - w as i32,
            y as i32 - h as i32 / 2,
            scale,
            font,
            &label,
        );

        value += step;
    }
}

fn draw_series(canvas: &mut RgbImage, axes: &Axes, series: &Series) {
    let points: Vec<(i32, i32)> = series
        .counts
        .iter()
        .enumerate()
        .map(|(bin, &count)| (axes.x(bin as f32).round() as i32, axes.y(count as f32).round() as i32))
        .collect();

    for segment in points.windows(2) {
        draw_antialiased_line_segment_mut(canvas, segment[0], segment[1], series.color, |line, under, weight| {
            interpolate(line, under, weight * LINE_ALPHA)
        });
    }
}

fn draw_legend(canvas: &mut RgbImage, axes: &Axes, series: &[Series], font: &FontRef) {
    if series.is_empty() {
        return;
    }

    let scale = PxScale::from(LABEL_SCALE);
    let row_height = 20i32;
    let swatch = 24i32;
    let padding = 8i32;

    let text_width = series
        .iter()
        .map(|s| text_size(scale, font, s.label).0 as i32)
        .max()
        .unwrap_or(0);
    let width = padding + swatch + 6 + text_width + padding;
    let height = padding * 2 + row_height * series.len() as i32;

    let x = (axes.left + axes.width) as i32 - width - 8;
    let y = axes.top as i32 + 8;

    let frame = Rect::at(x, y).of_size(width as u32, height as u32);
    draw_filled_rect_mut(canvas, frame, BACKGROUND);
    draw_hollow_rect_mut(canvas, frame, LEGEND_BORDER);

    for (i, s) in series.iter().enumerate() {
        let row_y = y + padding + row_height * i as i32;
        let mid = (row_y + row_height / 2) as f32;
        let x0 = (x + padding) as f32;
        let x1 = (x + padding + swatch) as f32;

        // two pixel swatch so the color reads at small sizes
        for offset in [-0.5f32, 0.5] {
            draw_line_segment_mut(canvas, (x0, mid + offset), (x1, mid + offset), s.color);
        }

        let (_, h) = text_size(scale, font, s.label);
        draw_text_mut(canvas, AXIS_COLOR, x + padding + swatch + 6, mid as i32 - h as i32 / 2, scale, font, s.label);
    }
}

fn draw_centered_text(canvas: &mut RgbImage, center_x: i32, y: i32, scale: f32, font: &FontRef, text: &str) {
    let scale = PxScale::from(scale);
    let (w, _) = text_size(scale, font, text);
    draw_text_mut(canvas, AXIS_COLOR, center_x - w as i32 / 2, y, scale, font, text);
}

/// Text reading bottom to top, centered on the given point.
fn draw_vertical_text(canvas: &mut RgbImage, center_x: i32, center_y: i32, scale: f32, font: &FontRef, text: &str) {
    let scale = PxScale::from(scale);
    let (w, h) = text_size(scale, font, text);

    let mut label = RgbImage::from_pixel(w + 4, h + 6, BACKGROUND);
    draw_text_mut(&mut label, AXIS_COLOR, 2, 2, scale, font, text);
    let rotated = imageops::rotate270(&label);

    imageops::overlay(
        canvas,
        &rotated,
        (center_x - rotated.width() as i32 / 2) as i64,
        (center_y - rotated.height() as i32 / 2) as i64,
    );
}
