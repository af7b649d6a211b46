//! Pie chart rendering: dataset -> raster -> PNG -> base64.
//!
//! Slices keep the dataset's definition order; ranking is a table concern.
//! The encoded bytes are stable for a given input and plotters version, but
//! byte-for-byte reproducibility across versions is not guaranteed
//! (anti-aliasing is backend-defined).

use crate::dataset::Dataset;
use crate::error::ReportError;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use plotters::prelude::*;

/// Raster size: an 8x6 figure at 150 DPI.
const WIDTH: u32 = 1200;
const HEIGHT: u32 = 900;

/// First wedge starts here; wedges advance counterclockwise.
const START_ANGLE_DEG: f64 = 140.0;

const PIE_CENTER: (i32, i32) = (420, 490);
const PIE_RADIUS: f64 = 320.0;

const TITLE: &str = "Enterprise Cloud Adoption Drivers (relative weights)";

/// Wedge fills, cycled in slice order.
const PALETTE: &[RGBColor] = &[
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

/// One wedge of the pie, angles in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice<'a> {
    pub name: &'a str,
    /// Percentage shown on the wedge label (0.0 for a zero-total dataset).
    pub share_pct: f64,
    pub start_deg: f64,
    pub sweep_deg: f64,
}

/// Lay out wedges in dataset definition order.
///
/// With a zero total there is no proportion to draw, so every driver gets
/// an equal wedge and its label shows 0.0%.
pub fn layout_slices(dataset: &Dataset) -> Result<Vec<Slice<'_>>, ReportError> {
    if dataset.is_empty() {
        return Err(ReportError::EmptyDataset);
    }

    let total = dataset.total_weight();
    let mut start = START_ANGLE_DEG;
    let mut slices = Vec::with_capacity(dataset.len());

    for driver in dataset.iter() {
        let fraction = if total == 0.0 {
            1.0 / dataset.len() as f64
        } else {
            driver.weight / total
        };
        let sweep = fraction * 360.0;
        slices.push(Slice {
            name: &driver.name,
            share_pct: dataset.share(driver.weight),
            start_deg: start,
            sweep_deg: sweep,
        });
        start += sweep;
    }

    Ok(slices)
}

/// Render the dataset as a pie chart and return the PNG base64-encoded for
/// inline embedding in HTML.
pub fn render_pie_b64(dataset: &Dataset) -> Result<String, ReportError> {
    let png = render_pie_png(dataset)?;
    Ok(STANDARD.encode(png))
}

/// Render the pie chart into in-memory PNG bytes.
pub fn render_pie_png(dataset: &Dataset) -> Result<Vec<u8>, ReportError> {
    let slices = layout_slices(dataset)?;

    let mut rgb = vec![0u8; (WIDTH * HEIGHT * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut rgb, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(backend_err)?;

        root.draw(&Text::new(
            TITLE,
            (210, 24),
            ("sans-serif", 34).into_font().color(&RGBColor(17, 17, 17)),
        ))
        .map_err(backend_err)?;

        for (i, slice) in slices.iter().enumerate() {
            let color = PALETTE[i % PALETTE.len()];
            let points = wedge_points(PIE_CENTER, PIE_RADIUS, slice.start_deg, slice.sweep_deg);

            root.draw(&Polygon::new(points.clone(), color.filled()))
                .map_err(backend_err)?;
            // White outline keeps adjacent wedges visually separated.
            root.draw(&PathElement::new(points, WHITE.stroke_width(1)))
                .map_err(backend_err)?;

            // Percentage label partway along the wedge bisector.
            let mid = slice.start_deg + slice.sweep_deg / 2.0;
            let (lx, ly) = polar_point(PIE_CENTER, PIE_RADIUS * 0.62, mid);
            root.draw(&Text::new(
                format!("{:.1}%", slice.share_pct),
                (lx - 22, ly - 10),
                ("sans-serif", 20).into_font().color(&WHITE),
            ))
            .map_err(backend_err)?;
        }

        draw_legend(&root, &slices)?;

        root.present().map_err(backend_err)?;
    }

    encode_png(WIDTH, HEIGHT, &rgb)
}

/// Legend beside the pie: color swatch plus driver name, in slice order.
fn draw_legend<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    slices: &[Slice<'_>],
) -> Result<(), ReportError> {
    let x = 790;
    let mut y = 300;

    root.draw(&Text::new(
        "Drivers",
        (x, y - 46),
        ("sans-serif", 24).into_font().color(&RGBColor(17, 17, 17)),
    ))
    .map_err(backend_err)?;

    for (i, slice) in slices.iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        root.draw(&Rectangle::new([(x, y - 13), (x + 18, y + 5)], color.filled()))
            .map_err(backend_err)?;
        root.draw(&Text::new(
            slice.name.to_string(),
            (x + 26, y - 11),
            ("sans-serif", 17).into_font().color(&RGBColor(17, 17, 17)),
        ))
        .map_err(backend_err)?;
        y += 34;
    }

    Ok(())
}

fn polar_point(center: (i32, i32), radius: f64, angle_deg: f64) -> (i32, i32) {
    let rad = angle_deg.to_radians();
    // y grows downward on the raster, so subtract to go counterclockwise.
    (
        center.0 + (radius * rad.cos()).round() as i32,
        center.1 - (radius * rad.sin()).round() as i32,
    )
}

/// Wedge polygon: center point plus arc samples.
fn wedge_points(
    center: (i32, i32),
    radius: f64,
    start_deg: f64,
    sweep_deg: f64,
) -> Vec<(i32, i32)> {
    // Half-degree arc steps keep the rim smooth at this radius.
    let steps = ((sweep_deg / 0.5).ceil() as usize).max(2);
    let mut points = Vec::with_capacity(steps + 3);
    points.push(center);
    for i in 0..=steps {
        let angle = start_deg + sweep_deg * i as f64 / steps as f64;
        points.push(polar_point(center, radius, angle));
    }
    // Close the loop so the outline covers both radial edges.
    points.push(center);
    points
}

/// RGB buffer -> PNG bytes, in memory.
fn encode_png(width: u32, height: u32, rgb: &[u8]) -> Result<Vec<u8>, ReportError> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().map_err(backend_err)?;
        writer.write_image_data(rgb).map_err(backend_err)?;
    }
    Ok(out)
}

fn backend_err(err: impl std::fmt::Display) -> ReportError {
    ReportError::ChartBackend(err.to_string())
}
