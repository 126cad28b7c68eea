//! Fatigue Monitor - Synthetic Session Driver
//!
//! Stands in for the camera/landmark collaborators: feeds scripted landmark
//! sequences through the analysis pipeline, forwards alert transitions to a
//! stub audio worker over the bounded channel, and demonstrates the user
//! reset command. Capture, rendering, and real audio stay outside this crate.

use alerting::{AlertDispatcher, AlertEvent, AlertLatch};
use face_geometry::{EyeLandmarks, MouthLandmarks, Point2};
use fatigue_engine::{FatigueEngine, Thresholds};
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Initialize logging
fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Synthetic eye contour with the requested aspect ratio.
/// Corners 3 units apart; each vertical pair spans `3 * ear`.
fn eye_with_ear(ear: f32) -> EyeLandmarks {
    let half = 1.5 * ear;
    EyeLandmarks::new([
        Point2::new(0.0, 0.0),
        Point2::new(1.0, -half),
        Point2::new(2.0, -half),
        Point2::new(3.0, 0.0),
        Point2::new(2.0, half),
        Point2::new(1.0, half),
    ])
}

/// Synthetic outer mouth contour with the requested aspect ratio.
/// Corners 4 units apart; each vertical pair spans `4 * mar`.
fn mouth_with_mar(mar: f32) -> MouthLandmarks {
    let half = 2.0 * mar;
    let mut pts = [Point2::default(); 20];
    pts[0] = Point2::new(0.0, 0.0);
    pts[6] = Point2::new(4.0, 0.0);
    pts[2] = Point2::new(1.5, -half);
    pts[10] = Point2::new(1.5, half);
    pts[4] = Point2::new(2.5, -half);
    pts[8] = Point2::new(2.5, half);
    MouthLandmarks::new(pts)
}

/// Audio worker stub: drains the alert channel, logging where the real
/// system would synthesize the warning tone.
async fn audio_worker(mut rx: mpsc::Receiver<AlertEvent>) {
    while let Some(event) = rx.recv().await {
        info!(score = event.score, "audio worker: playing alert tone");
    }
    info!("audio worker: channel closed, shutting down");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    info!("=== Fatigue Monitor v{} ===", env!("CARGO_PKG_VERSION"));

    let mut engine = FatigueEngine::new(Thresholds::default(), Instant::now());
    let mut latch = AlertLatch::new();
    let (dispatcher, rx) = AlertDispatcher::with_default_depth();
    let worker = tokio::spawn(audio_worker(rx));

    // Scripted session: alert baseline, one slow blink, one yawn, then a
    // drowsy stretch that trips the fatigue alert, and recovery.
    let phases: &[(&str, f32, f32, usize)] = &[
        ("baseline", 0.32, 0.30, 30),
        ("eyes closing", 0.15, 0.30, 20),
        ("eyes reopen", 0.32, 0.30, 1),
        ("yawning", 0.30, 0.72, 15),
        ("mouth closes", 0.30, 0.30, 5),
        ("drowsy", 0.18, 0.70, 25),
        ("recovered", 0.32, 0.30, 10),
    ];

    let mut frame = 0usize;
    for &(label, ear, mar, frames) in phases {
        info!(phase = label, frames, "entering phase");
        for _ in 0..frames {
            frame += 1;
            let assessment = engine.process_frame(
                &eye_with_ear(ear),
                &eye_with_ear(ear),
                &mouth_with_mar(mar),
                Instant::now(),
            );

            if let Some(event) =
                latch.observe(assessment.fatigue_detected, assessment.fatigue_score)
            {
                dispatcher.dispatch(event);
            }

            if assessment.blink_detected || assessment.yawn_detected || frame % 10 == 0 {
                println!("{}", serde_json::to_string(&assessment)?);
            }
        }
    }

    let state = engine.state();
    info!(
        blinks = state.blink_count,
        yawns = state.yawn_count,
        "session totals before reset"
    );

    // User reset: counters zeroed, session clock re-stamped
    engine.reset(Instant::now());
    info!(
        blinks = engine.state().blink_count,
        yawns = engine.state().yawn_count,
        "session totals after reset"
    );

    drop(dispatcher);
    worker.await?;

    Ok(())
}
