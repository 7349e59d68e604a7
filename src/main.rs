//! Space Race entry point
//!
//! Headless host: runs the race on a fixed timestep, flies autopilot players,
//! records every frame and exits once the post-race grace period has passed.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use space_race::Settings;
use space_race::consts::MAX_SUBSTEPS;
use space_race::platform::{Autopilot, Clock, ManualClock, MonotonicClock, ShutdownTimer};
use space_race::renderer::{CommandBuffer, draw_frame};
use space_race::sim::{GameEvent, GameState, Player, RaceResult, TickInput, tick};

/// Longest frame gap fed to the accumulator (stalls don't fast-forward the race)
const MAX_FRAME_GAP: Duration = Duration::from_millis(100);

/// Command line options
#[derive(Debug, Parser)]
#[command(name = "space-race", about = "Headless two-player Space Race")]
struct Args {
    /// JSON settings file (defaults are used when absent or unreadable)
    settings: Option<PathBuf>,
    /// Obstacle field seed, overrides the settings file
    #[arg(long)]
    seed: Option<u64>,
    /// Run on simulated time as fast as possible
    #[arg(long)]
    fast: bool,
}

/// Game instance holding all host-side state
struct Game {
    state: GameState,
    accumulator: Duration,
    last_frame: Duration,
    input: TickInput,
    autopilot: Autopilot,
    autopilot_players: Vec<Player>,
    frame: CommandBuffer,
    frames_drawn: u64,
    shutdown: ShutdownTimer,
    result: Option<RaceResult>,
}

impl Game {
    fn new(settings: &Settings, seed: u64) -> Self {
        Self {
            state: GameState::with_field(seed, settings.bounds(), settings.obstacle_count),
            accumulator: Duration::ZERO,
            last_frame: Duration::ZERO,
            input: TickInput::default(),
            autopilot: Autopilot::default(),
            autopilot_players: settings.autopilot_players(),
            frame: CommandBuffer::new(),
            frames_drawn: 0,
            shutdown: ShutdownTimer::new(settings.grace_period()),
            result: None,
        }
    }

    /// Run simulation ticks for the time elapsed since the last frame
    fn update(&mut self, now: Duration, tick_dt: Duration) {
        let elapsed = now.saturating_sub(self.last_frame).min(MAX_FRAME_GAP);
        self.last_frame = now;
        self.accumulator += elapsed;

        let mut substeps = 0;
        while self.accumulator >= tick_dt && substeps < MAX_SUBSTEPS {
            // Sample input once per tick
            self.autopilot
                .apply(&self.state, &self.autopilot_players, &mut self.input);

            for event in tick(&mut self.state, &self.input, now) {
                self.handle_event(event, now);
            }
            self.accumulator -= tick_dt;
            substeps += 1;
        }
    }

    fn handle_event(&mut self, event: GameEvent, now: Duration) {
        match event {
            GameEvent::Scored { player, score } => {
                log::info!("{} reached the top ({} points)", player, score);
            }
            GameEvent::Crashed { player } => {
                log::debug!("{} hit an obstacle", player);
            }
            GameEvent::Finished(result) => {
                self.result = Some(result);
                match serde_json::to_string(&result) {
                    Ok(json) => println!("{}", json),
                    Err(e) => log::error!("Failed to encode race result: {}", e),
                }
                self.shutdown.arm(now);
            }
        }
    }

    /// Render the current frame
    fn render(&mut self) {
        self.frame.reset();
        draw_frame(&self.state, &mut self.frame);
        self.frames_drawn += 1;
        log::trace!("Frame {}: {} draw calls", self.frames_drawn, self.frame.len());
    }
}

/// Drive the game until the shutdown deadline passes
fn run(game: &mut Game, clock: &dyn Clock, tick_dt: Duration, pace: impl Fn()) {
    game.last_frame = clock.now();
    loop {
        let now = clock.now();
        game.update(now, tick_dt);
        game.render();

        if game.shutdown.is_due(now) {
            break;
        }
        pace();
    }
}

fn main() {
    env_logger::init();
    log::info!("Space Race (headless) starting...");

    let args = Args::parse();
    let mut settings = Settings::load_or_default(args.settings.as_deref());
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    if args.fast {
        settings.realtime = false;
    }

    let seed = settings.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    });
    log::info!("Started new race with seed: {}", seed);

    let tick_dt = settings.tick_duration();
    let mut game = Game::new(&settings, seed);

    if settings.realtime {
        let clock = MonotonicClock::new();
        run(&mut game, &clock, tick_dt, || std::thread::sleep(tick_dt));
    } else {
        let clock = ManualClock::new();
        run(&mut game, &clock, tick_dt, || clock.advance(tick_dt));
    }

    match game.result {
        Some(result) => log::info!(
            "Final score {} - {}: {} ({} frames)",
            result.scores[0],
            result.scores[1],
            result.outcome.message(),
            game.frames_drawn
        ),
        None => log::warn!("Exited before the race finished"),
    }
}
