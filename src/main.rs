//! Futbolito entry point
//!
//! Headless demo: plays one match driven by seeded synthetic tilt, logs the
//! sound cues a host would play, and prints the final snapshot.
//!
//! Usage: `futbolito [settings.json]`

use std::path::PathBuf;
use std::process::ExitCode;

use futbolito::audio::{AudioMixer, LogSink};
use futbolito::input::JitterTilt;
use futbolito::sim::MatchPhase;
use futbolito::{Match, Settings};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Futbolito (headless) starting...");

    let settings_path = std::env::args_os().nth(1).map(PathBuf::from);
    let settings = Settings::load_or_default(settings_path.as_deref());
    let mixer = AudioMixer::from_settings(&settings);
    let mut sink = LogSink;

    let mut game = match Match::new(settings.field_width, settings.field_height) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Cannot start match: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut tilt = JitterTilt::new(settings.demo_seed);
    while game.phase() != MatchPhase::Finished && game.ticks() < settings.max_ticks {
        let Some(sample) = tilt.next() else { break };
        let events = game.step(sample);
        mixer.play_events(&mut sink, &events);
    }

    let snapshot = game.snapshot();
    match snapshot.scores.winner {
        Some(side) => println!(
            "{} wins  {} : {}  ({} ticks)",
            side.as_str(),
            snapshot.scores.score_top,
            snapshot.scores.score_bottom,
            snapshot.ticks
        ),
        None => println!(
            "No winner after {} ticks  {} : {}",
            snapshot.ticks, snapshot.scores.score_top, snapshot.scores.score_bottom
        ),
    }

    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(e) => log::warn!("Could not serialize final snapshot: {}", e),
    }

    ExitCode::SUCCESS
}
