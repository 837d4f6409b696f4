//! Star Barrage headless runner
//!
//! Drives the simulation at a fixed tick with the autopilot (or an idle
//! ship), logs what happens and prints the final state.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use star_barrage::autopilot::autopilot_input;
use star_barrage::renderer;
use star_barrage::sim::{GameEvent, GameState, Snapshot, TickInput, tick};
use star_barrage::{BombTrigger, Settings};

#[derive(Debug, Parser)]
#[command(name = "star-barrage", about = "Run a headless Star Barrage session")]
struct Cli {
    /// Settings JSON file
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Override the run seed
    #[arg(long)]
    seed: Option<u64>,
    /// Override the tick limit
    #[arg(long)]
    ticks: Option<u64>,
    /// Leave the ship idle instead of using the autopilot
    #[arg(long)]
    idle: bool,
    /// Only bomb on the tick the bomb key goes down
    #[arg(long)]
    manual_bomb: bool,
    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,
    /// Write the effective settings to this file before running
    #[arg(long)]
    save_settings: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.settings.as_deref());
    if let Some(seed) = cli.seed {
        settings.seed = seed;
    }
    if let Some(ticks) = cli.ticks {
        settings.max_ticks = ticks;
    }
    if cli.idle {
        settings.autopilot = false;
    }
    if cli.manual_bomb {
        settings.bomb_trigger = BombTrigger::Pressed;
    }

    if let Some(path) = &cli.save_settings {
        settings
            .save_to(path)
            .with_context(|| format!("saving settings to {}", path.display()))?;
    }

    log::info!(
        "Star Barrage starting: seed={} max_ticks={} autopilot={} bomb={}",
        settings.seed,
        settings.max_ticks,
        settings.autopilot,
        settings.bomb_trigger.as_str()
    );

    let state = run(&settings)?;
    let snapshot = Snapshot::capture(&state);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("{}", snapshot.hud_line());
    }
    Ok(())
}

/// Run one session to game over or the tick limit
fn run(settings: &Settings) -> Result<GameState> {
    let mut state = GameState::with_tuning(settings.seed, settings.tuning.clone());
    let mut rng = state.rng_state().to_rng();
    let mut bomb_was_down = false;

    while state.time_ticks < settings.max_ticks && !state.is_game_over() {
        let mut input = if settings.autopilot {
            autopilot_input(&state)
        } else {
            TickInput::default()
        };
        let bomb_down = input.bomb;
        input.bomb = settings.bomb_trigger.request(bomb_down, bomb_was_down);
        bomb_was_down = bomb_down;

        tick(&mut state, &input, &mut rng);

        for event in &state.events {
            log_event(event);
        }

        state
            .validate()
            .with_context(|| format!("invariant broken at tick {}", state.time_ticks))?;

        if settings.snapshot_every > 0 && state.time_ticks % settings.snapshot_every == 0 {
            let snapshot = Snapshot::capture(&state);
            let vertices = renderer::draw_list(&snapshot);
            log::info!(
                "[tick {}] {} ({} vertices, {} bytes)",
                state.time_ticks,
                snapshot.hud_line(),
                vertices.len(),
                renderer::as_bytes(&vertices).len()
            );
        }
    }

    Ok(state)
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::PlayerHit { lives } => log::info!("Player hit, {} lives left", lives),
        GameEvent::BossDefeated { .. } | GameEvent::GameOver { .. } | GameEvent::LevelUp { .. } => {
            log::info!("{:?}", event)
        }
        _ => log::debug!("{:?}", event),
    }
}
