//! Game phases and the tick driver around the world.
//!
//! The shell owns phase transitions (Menu -> Playing -> GameOver -> Menu).
//! The simulation only runs while Playing; every entry into Playing builds a
//! fresh world. Score and game-over events go out on an unbounded channel.

use crate::config::Config;
use crate::error::SessionError;
use crate::input::Pointer;
use crate::render::RenderSnapshot;
use crate::world::{TickOutcome, TickReport, World};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tokio::sync::mpsc;
use tracing::info;

/// Phase of the game as seen by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Menu,
    Playing,
    GameOver,
}

/// State of the tick loop, derived from the phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Nothing moves, the camera is frozen.
    Idle,
    Running,
    /// The player was eaten; the session must go back to the menu first.
    Stopped,
}

/// Events the simulation sends to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    ScoreUpdate { mass: u32, threats: u32 },
    GameOver { final_mass: u32 },
}

/// Per-round statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub max_mass: u32,
    /// Ticks survived.
    pub time_alive: u64,
    /// Food and bots eaten.
    pub cells_eaten: u32,
}

impl SessionStats {
    fn record(&mut self, report: &TickReport, mass: u32) {
        self.time_alive += 1;
        self.cells_eaten += report.eaten;
        self.max_mass = self.max_mass.max(mass);
    }
}

pub struct Session {
    config: Config,
    phase: GamePhase,
    world: Option<World>,
    stats: SessionStats,
    rounds_started: u64,
    events: mpsc::UnboundedSender<ShellEvent>,
}

impl Session {
    /// Create a session in the menu and the receiver for its events.
    pub fn new(config: Config) -> (Self, mpsc::UnboundedReceiver<ShellEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let session = Self {
            config,
            phase: GamePhase::Menu,
            world: None,
            stats: SessionStats::default(),
            rounds_started: 0,
            events,
        };
        (session, rx)
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn loop_state(&self) -> LoopState {
        match self.phase {
            GamePhase::Menu => LoopState::Idle,
            GamePhase::Playing => LoopState::Running,
            GamePhase::GameOver => LoopState::Stopped,
        }
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The current world, kept after game over until the shell returns to the menu.
    #[inline]
    pub fn world(&self) -> Option<&World> {
        self.world.as_ref()
    }

    #[inline]
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Menu -> Playing with a freshly populated world. A blank name becomes the
    /// configured default.
    pub fn start(&mut self, player_name: &str) -> Result<(), SessionError> {
        let name = match player_name.trim() {
            "" => self.config.player.name.clone(),
            name => name.to_string(),
        };
        // Seeded sessions still get a different world each round.
        let seed = match self.config.world.rng_seed {
            Some(seed) => seed.wrapping_add(self.rounds_started),
            None => rand::random(),
        };
        self.ensure(GamePhase::Menu, "start a round")?;
        let world = World::with_rng(&self.config, &name, SmallRng::seed_from_u64(seed));
        self.start_with(world)
    }

    /// Menu -> Playing with a prepared world.
    pub fn start_with(&mut self, world: World) -> Result<(), SessionError> {
        self.ensure(GamePhase::Menu, "start a round")?;
        self.rounds_started += 1;
        info!(
            "Round {} started for {:?}",
            self.rounds_started,
            world.player().name.as_deref().unwrap_or_default()
        );
        self.stats = SessionStats {
            max_mass: world.player().mass(),
            ..SessionStats::default()
        };
        self.world = Some(world);
        self.phase = GamePhase::Playing;
        Ok(())
    }

    /// Advance one tick. Returns `None` without touching anything unless Playing.
    pub fn tick(&mut self, pointer: Pointer) -> Option<TickOutcome> {
        if self.phase != GamePhase::Playing {
            return None;
        }
        let world = self.world.as_mut()?;
        let outcome = world.tick(pointer);

        match &outcome {
            TickOutcome::Continue(report) => {
                self.stats.record(report, world.player().mass());
                if let Some(signal) = report.signal {
                    self.emit(ShellEvent::ScoreUpdate {
                        mass: signal.mass,
                        threats: signal.threats,
                    });
                }
            }
            TickOutcome::GameOver { final_mass, .. } => {
                self.phase = GamePhase::GameOver;
                info!(
                    "Game over: mass {}, max {}, {} eaten, alive {} ticks",
                    final_mass, self.stats.max_mass, self.stats.cells_eaten, self.stats.time_alive
                );
                self.emit(ShellEvent::GameOver {
                    final_mass: *final_mass,
                });
            }
        }
        Some(outcome)
    }

    /// Back to the menu from Playing (quit) or GameOver. Drops the world.
    pub fn return_to_menu(&mut self) -> Result<(), SessionError> {
        if self.phase == GamePhase::Menu {
            return Err(SessionError::InvalidTransition {
                action: "return to the menu",
                phase: self.phase,
            });
        }
        self.world = None;
        self.phase = GamePhase::Menu;
        Ok(())
    }

    /// Frame for the current world, if any.
    pub fn snapshot(&self) -> Option<RenderSnapshot<'_>> {
        let viewport = self.config.viewport.size();
        self.world.as_ref().map(|world| RenderSnapshot::capture(world, viewport))
    }

    fn ensure(&self, expected: GamePhase, action: &'static str) -> Result<(), SessionError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(SessionError::InvalidTransition {
                action,
                phase: self.phase,
            })
        }
    }

    fn emit(&self, event: ShellEvent) {
        // The shell may have gone away; the simulation does not care.
        let _ = self.events.send(event);
    }
}
