//! Headless simulation command

use super::load_config;
use anyhow::{Context, Result};
use blockyard_runtime::{actions, GameClock, GameEvent, InputState, Key};
use blockyard_sandbox::{Sandbox, SandboxConfig};
use blockyard_world::JsonFileStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

pub fn parse_direction(s: &str) -> Result<Direction, String> {
    match s.to_ascii_lowercase().as_str() {
        "left" => Ok(Direction::Left),
        "right" => Ok(Direction::Right),
        _ => Err(format!("unknown direction '{}'; valid values: left, right", s)),
    }
}

pub struct SimulateArgs {
    pub config: Option<String>,
    pub ticks: u32,
    pub walk: Option<Direction>,
    pub jump_every: Option<u32>,
}

/// What a scripted run ended with
pub struct Report {
    pub ticks: u64,
    pub events: Vec<GameEvent>,
    pub sandbox: Sandbox,
}

pub fn run(args: SimulateArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let report = simulate(config, &args)?;
    let player = &report.sandbox.player;

    println!("Ran {} ticks", report.ticks);
    println!(
        "Player at ({:.1}, {:.1}) velocity ({:.1}, {:.1}) {}",
        player.position.x,
        player.position.y,
        player.velocity.x,
        player.velocity.y,
        if player.on_ground { "on ground" } else { "airborne" }
    );
    for event in &report.events {
        println!("  {:?}", event);
    }
    Ok(())
}

/// Drive a sandbox through the fixed-step loop with scripted input
pub fn simulate(config: SandboxConfig, args: &SimulateArgs) -> Result<Report> {
    let mut store = JsonFileStore::new(&config.save_path);
    let mut clock = GameClock::with_tick_rate(config.tick_rate);
    let mut input = InputState::with_config(config.input.clone());
    let walk_key = match args.walk {
        Some(Direction::Left) => Some(first_key(&input, actions::MOVE_LEFT)?),
        Some(Direction::Right) => Some(first_key(&input, actions::MOVE_RIGHT)?),
        None => None,
    };
    let jump_key = first_key(&input, actions::JUMP)?;

    let mut sandbox = Sandbox::open(config, &store)?;
    let step = clock.fixed_timestep;
    let mut events = Vec::new();

    if let Some(key) = walk_key {
        input.process_key_down(key);
    }
    for tick in 0..args.ticks {
        let jumping = matches!(args.jump_every, Some(n) if n > 0 && tick % n == 0);
        if jumping {
            input.process_key_down(jump_key);
        } else {
            input.process_key_up(jump_key);
        }

        sandbox.frame(&mut clock, &mut input, &mut store, step);
        events.extend(sandbox.drain_events());
        if !sandbox.running {
            break;
        }
    }

    log::debug!("simulation finished after {} ticks", sandbox.ticks());
    Ok(Report {
        ticks: sandbox.ticks(),
        events,
        sandbox,
    })
}

fn first_key(input: &InputState, action: &str) -> Result<Key> {
    input
        .config()
        .bindings(action)
        .iter()
        .find(|b| !b.ctrl)
        .map(|b| b.key)
        .with_context(|| format!("No plain key bound to '{}'", action))
}
