use std::time::Instant;

use numerical_path::cgmath::MetricSpace;
use numerical_path::math::{LoopTheLoopPath, ParametricCurve2d};
use numerical_path::NumericalPath;

fn main() {
    let track = LoopTheLoopPath::default();
    let start = Instant::now();
    let path = match NumericalPath::new(&track) {
        Ok(path) => path,
        Err(err) => {
            eprintln!("Failed to build path: {}", err);
            return;
        }
    };
    println!(
        "Built {} samples in {:?} (length {:.4})",
        path.sample_count(),
        start.elapsed(),
        path.length()
    );

    println!("Tracking...");
    const NUM_FRAMES: u32 = 100_000;
    let bounds = track.bounds();
    for round in 0..5 {
        let start = Instant::now();
        let mut point = path.slope_at(path.start_p(), None);
        let mut max_error: f64 = 0.0;
        for frame in 0..NUM_FRAMES {
            // Hover slightly off the track, moving steadily along it
            let t = bounds.lerp(frame as f64 / NUM_FRAMES as f64);
            let on_track = track.sample(t);
            let target = on_track + 0.01 * path.slope_at(point.p, point.idx).normal;
            point = path.find_nearest_local(target, &point);
            max_error = max_error.max(point.pos.distance(on_track));
        }
        let frame = start.elapsed() / NUM_FRAMES;
        println!(
            "Round {}: avg. frame {:?}, max. error {:.2e}, finished at p = {:.4}",
            round, frame, max_error, point.p
        );
    }
}
