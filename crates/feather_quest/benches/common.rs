//! Shared criterion setup for the gameplay benches.
#![allow(dead_code)]

use std::time::Duration;

use criterion::{Criterion, Throughput};

/// Simulation step used by per-frame benches.
pub const FRAME_SECONDS: f32 = 1.0 / 60.0;

/// Many short samples; every benched call runs in nanoseconds.
pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(50)
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(3))
}

/// Number of simulation frames covering `seconds` of play.
pub fn frames_for(seconds: f32) -> usize {
    (seconds / FRAME_SECONDS).round().max(1.0) as usize
}

/// Throughput measured in simulated frames.
pub fn frame_throughput(frames: usize) -> Throughput {
    Throughput::Elements(frames.max(1) as u64)
}

/// Throughput measured in evaluated items (contexts, positions, spawn requests).
pub fn item_throughput(items: usize) -> Throughput {
    Throughput::Elements(items.max(1) as u64)
}
