//! Triangulates a growing point cloud and writes one SVG frame per snapshot.
//!
//! Points are added in batches, the way an interactive driver accumulates
//! clicks, and the whole set is re-triangulated after each batch.
//!
//! Run with: cargo run --example delaunay_svg [output-dir]
//! Set `RUST_LOG=delaunay2d=debug` to see the engine's diagnostics.

use delaunay2d::hull::convex_hull;
use delaunay2d::triangulation::{TriangulationConfig, Triangulator};
use delaunay2d::{Point2, Triangle2};

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;
const MARGIN: f64 = 40.0;

/// Minimal SVG document builder.
struct Svg {
    content: String,
    width: f64,
    height: f64,
}

impl Svg {
    fn new(width: f64, height: f64) -> Self {
        Self {
            content: String::new(),
            width,
            height,
        }
    }

    fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str) {
        self.content.push_str(&format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}"/>"#,
            cx, cy, r, fill
        ));
        self.content.push('\n');
    }

    fn polygon(&mut self, points: &[Point2<f64>], fill: &str, stroke: &str, stroke_width: f64) {
        let pts: String = points
            .iter()
            .map(|p| format!("{:.2},{:.2}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        self.content.push_str(&format!(
            r#"<polygon points="{}" fill="{}" stroke="{}" stroke-width="{}" stroke-linejoin="round"/>"#,
            pts, fill, stroke, stroke_width
        ));
        self.content.push('\n');
    }

    fn text(&mut self, x: f64, y: f64, text: &str, font_size: f64, fill: &str) {
        self.content.push_str(&format!(
            r#"<text x="{}" y="{}" font-family="system-ui, sans-serif" font-size="{}" fill="{}">{}</text>"#,
            x, y, font_size, fill, text
        ));
        self.content.push('\n');
    }

    fn save(&self, path: &Path) -> io::Result<()> {
        let svg = format!(
            r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}">
<rect width="100%" height="100%" fill="#1a1a2e"/>
{}
</svg>"##,
            self.width, self.height, self.width, self.height, self.content
        );
        let mut file = File::create(path)?;
        file.write_all(svg.as_bytes())
    }
}

/// Deterministic stand-in for user clicks: xorshift points inside the canvas.
struct PointSource {
    state: u64,
}

impl PointSource {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_unit(&mut self) -> f64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state as f64 / u64::MAX as f64
    }

    fn next_point(&mut self) -> Point2<f64> {
        let x = MARGIN + self.next_unit() * (WIDTH - 2.0 * MARGIN);
        let y = MARGIN + self.next_unit() * (HEIGHT - 2.0 * MARGIN);
        Point2::new(x, y)
    }
}

fn render(points: &[Point2<f64>], triangles: &[Triangle2<f64>], path: &Path) -> io::Result<()> {
    let mut svg = Svg::new(WIDTH, HEIGHT);

    svg.polygon(&convex_hull(points), "#22223b", "#4a4a6a", 1.0);
    for tri in triangles {
        svg.polygon(&tri.vertices(), "none", "#00d4ff", 1.0);
    }
    for p in points {
        svg.circle(p.x, p.y, 3.0, "#ff6b6b");
    }
    svg.text(
        MARGIN,
        HEIGHT - 12.0,
        &format!("{} points, {} triangles", points.len(), triangles.len()),
        14.0,
        "#e0e0e0",
    );

    svg.save(path)
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("screenshots"));
    fs::create_dir_all(&out_dir)?;

    let triangulator =
        Triangulator::new(TriangulationConfig::default().with_normalized_winding(true));

    // Seed triangle spanning the canvas.
    let mut points = vec![
        Point2::new(MARGIN, HEIGHT - MARGIN),
        Point2::new(WIDTH - MARGIN, HEIGHT - MARGIN),
        Point2::new(WIDTH / 2.0, MARGIN),
    ];
    let mut source = PointSource::new(12345);

    for (frame, batch) in [0, 5, 20, 75, 200].into_iter().enumerate() {
        points.extend((0..batch).map(|_| source.next_point()));

        let triangles = triangulator.triangulate(&points);
        let path = out_dir.join(format!("delaunay_{frame:02}.svg"));
        render(&points, &triangles, &path)?;

        println!(
            "{}: {} points -> {} triangles",
            path.display(),
            points.len(),
            triangles.len()
        );
    }

    Ok(())
}
