//! Planetoids headless demo
//!
//! Generates a seeded wave, lets the autopilot fly it, logs what happens and
//! prints the last frame as JSON.
//!
//! Usage: `planetoids [seed] [wave]`

use planetoids::consts::SIM_DT;
use planetoids::renderer::FrameSnapshot;
use planetoids::session::autopilot_input;
use planetoids::sim::WaveEvent;
use planetoids::{Session, SessionPhase, SimConfig, generate_level};

/// Give up after two minutes of simulated play
const MAX_FRAMES: u32 = 60 * 120;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
    let wave_index: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(0);

    let config = SimConfig::default();
    let level = generate_level(seed, wave_index, &config);
    let mut session = Session::new(level, config);
    log::info!("Planetoids starting (seed {}, wave {})", seed, wave_index + 1);

    let mut shots = 0u32;
    let mut kills = 0u32;
    let mut frames = 0u32;
    while frames < MAX_FRAMES && !session.is_over() {
        if session.phase() == SessionPhase::ShipDestroyed {
            session.continue_play();
        }

        let input = autopilot_input(session.wave());
        session.advance(SIM_DT, &input);
        frames += 1;

        for event in session.drain_events() {
            match event {
                WaveEvent::BulletFired { .. } => shots += 1,
                WaveEvent::AsteroidDestroyed { .. } => kills += 1,
                WaveEvent::ShipDestroyed { position } => {
                    log::warn!(
                        "Ship lost at ({:.0}, {:.0}), {} lives left",
                        position.x,
                        position.y,
                        session.wave().lives()
                    );
                }
                _ => {}
            }
        }
    }

    log::info!(
        "Finished after {} frames: {:?}, {} shots, {} asteroids destroyed, {} remaining",
        frames,
        session.phase(),
        shots,
        kills,
        session.wave().asteroids().len()
    );

    let mut frame = FrameSnapshot::new();
    session.wave().draw(&mut frame);
    match serde_json::to_string_pretty(&frame) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize final frame: {:?}", e),
    }
}
