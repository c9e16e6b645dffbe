//! Playground entry point
//!
//! Headless native driver: runs the mover under the demo pilot and prints the
//! final state. Usage: `playground [tuning.json] [seed]`

use playground::{DemoPilot, Mover, Tuning};

/// Frames to simulate (~20 seconds at 60 Hz)
const DEMO_FRAMES: u32 = 1200;
const DEFAULT_SEED: u64 = 12345;

fn main() {
    env_logger::init();
    log::info!("Playground (native) starting...");

    let mut args = std::env::args().skip(1);

    let tuning = match args.next() {
        Some(path) => match Tuning::load(&path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("Invalid tuning {path}: {e}");
                std::process::exit(1);
            }
        },
        None => {
            log::info!("Using default tuning");
            Tuning::default()
        }
    };

    let seed = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            log::error!("Invalid seed: {e}");
            std::process::exit(1);
        }
        None => DEFAULT_SEED,
    };

    let mut mover = Mover::new(tuning);
    let mut pilot = DemoPilot::new(seed);
    log::info!("Demo pilot seeded with {seed}");

    let mut jumps = 0u32;
    let mut elapsed_ms = 0.0f32;
    for frame in 0..DEMO_FRAMES {
        let was_jumping = mover.state().is_jumping();
        let dt = pilot.next_frame_ms();
        let direction = pilot.next_direction();
        let step = mover.update(dt, direction);
        elapsed_ms += step.elapsed_ms;

        if !was_jumping && mover.state().is_jumping() {
            jumps += 1;
        }
        if frame % 60 == 0 {
            log::info!(
                "t={:.0}ms pos=({:.1}, {:.1}) contacts={:?}",
                elapsed_ms,
                mover.position().x,
                mover.position().y,
                step.collision
            );
        }
    }

    log::info!("Simulated {DEMO_FRAMES} frames ({elapsed_ms:.0}ms), {jumps} jumps");

    match serde_json::to_string_pretty(mover.state()) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            log::error!("Failed to serialize final state: {e}");
            std::process::exit(1);
        }
    }
}
