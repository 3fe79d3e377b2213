//! Unistroke Demo — classifies a few synthetic pixel-space strokes.
//!
//! Usage:
//! ```text
//! cargo run --example classify
//! RUST_LOG=unistroke=trace cargo run --example classify   # per-template scores
//! ```

use std::f64::consts::TAU;
use std::time::Instant;

use unistroke::math::Point2;
use unistroke::recognition::HorizontalDirection;
use unistroke::session::SessionStats;
use unistroke::templates::generate;
use unistroke::{Recognizer, RecognizerConfig, RecognizerError, DEFAULT_SUCCESS_THRESHOLD};

fn main() -> Result<(), RecognizerError> {
    // Default: WARN for everything, INFO for unistroke and this demo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=unistroke=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("classify=info".parse().unwrap_or_default())
        .add_directive("unistroke=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let recognizer = Recognizer::new(RecognizerConfig::default())?;
    let mut stats = SessionStats::new();

    for (label, points) in strokes() {
        let started = Instant::now();
        let result = recognizer.recognize_points(&points)?;
        stats.record(&result, started.elapsed(), DEFAULT_SUCCESS_THRESHOLD);
        println!(
            "{label:<12} -> {:<11} score {:.2}",
            result.kind.name(),
            result.score
        );
    }

    println!("{stats}");
    Ok(())
}

fn pixels(raw: &[Point2], scale: f64, dx: f64, dy: f64) -> Vec<Point2> {
    raw.iter()
        .map(|p| Point2::new(p.x * scale + dx, p.y * scale + dy))
        .collect()
}

fn strokes() -> Vec<(&'static str, Vec<Point2>)> {
    let ring = (0..48)
        .map(|i| {
            let t = f64::from(i) / 47.0 * TAU;
            let r = 110.0 + 5.0 * (f64::from(i) * 0.7).sin();
            Point2::new(400.0 + r * t.cos(), 300.0 + r * t.sin())
        })
        .collect();
    let jitter = (0..30)
        .map(|i| {
            let t = f64::from(i);
            Point2::new(
                500.0 + 3.0 * (t * 12.9898).sin(),
                500.0 + 3.0 * (t * 78.233).sin(),
            )
        })
        .collect();

    vec![
        (
            "arrow right",
            pixels(&generate::arrow(HorizontalDirection::Right, 40), 320.0, 80.0, 150.0),
        ),
        (
            "arrow left",
            pixels(&generate::arrow(HorizontalDirection::Left, 40), 320.0, 80.0, 150.0),
        ),
        ("circle", ring),
        ("z", pixels(&generate::z(60), 280.0, 120.0, 90.0)),
        ("jitter", jitter),
    ]
}
