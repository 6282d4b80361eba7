use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::chain::{Delta, EntityChain, GridPosition};
use crate::clock::Clock;
use crate::config::{Difficulty, GridSize, INITIAL_SCORE};
use crate::error::{Result, SnekError};
use crate::food::place_food;
use crate::input::{direction_change_is_valid, Direction, InputEvent, InputSource, Intent};
use crate::tile_map::TileMap;

/// Program phase.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    Menu,
    Playing,
    Paused,
    GameOver,
    Quit,
}

/// Something that can move the phase machine.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PhaseEvent {
    Intent(Intent),
    TickFailed,
    Quit,
}

/// Pure phase transition table.
#[must_use]
pub fn transition(phase: Phase, event: PhaseEvent) -> Phase {
    use Phase::{GameOver, Menu, Paused, Playing, Quit};

    match (phase, event) {
        (Quit, _) | (_, PhaseEvent::Quit) => Quit,

        (Menu, PhaseEvent::Intent(Intent::SelectDifficulty(_))) => Menu,
        (Menu, PhaseEvent::Intent(_)) => Playing,
        (Menu, PhaseEvent::TickFailed) => Menu,

        (Playing, PhaseEvent::Intent(Intent::Pause)) => Paused,
        (Playing, PhaseEvent::Intent(_)) => Playing,
        (Playing, PhaseEvent::TickFailed) => GameOver,

        (Paused, PhaseEvent::Intent(Intent::Pause)) => Playing,
        (Paused, PhaseEvent::Intent(_) | PhaseEvent::TickFailed) => Paused,

        (GameOver, PhaseEvent::Intent(_)) => Menu,
        (GameOver, PhaseEvent::TickFailed) => GameOver,
    }
}

/// Why a tick ended the game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Collision {
    Boundary,
    SelfCollision,
}

/// Result of one simulation step.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    Moved,
    Grew,
    Collided(Collision),
}

/// Everything the presentation layer needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub tiles: &'a TileMap,
    pub score: u32,
    pub phase: Phase,
    pub difficulty: Difficulty,
    pub death_reason: Option<Collision>,
}

/// Order phase blocks run in within one frame. A phase changed by an earlier
/// block is picked up by a later one in the same frame.
const PHASE_BLOCKS: [Phase; 4] = [Phase::Menu, Phase::Playing, Phase::GameOver, Phase::Paused];

/// Complete game state, owned by the loop driver.
#[derive(Debug)]
pub struct GameState<C, R = StdRng> {
    pub chain: EntityChain,
    pub food: GridPosition,
    pub direction: Direction,
    pub score: u32,
    pub difficulty: Difficulty,
    pub phase: Phase,
    pub death_reason: Option<Collision>,
    last_tick_ms: u64,
    tile_map: TileMap,
    size: GridSize,
    clock: C,
    rng: R,
}

impl<C: Clock> GameState<C, StdRng> {
    /// Creates a state whose food placement is reproducible.
    pub fn new_with_seed(size: GridSize, seed: u64, clock: C) -> Result<Self> {
        Self::with_rng(size, StdRng::seed_from_u64(seed), clock)
    }
}

impl<C: Clock, R: Rng> GameState<C, R> {
    /// Creates the start-of-program state: one node at the grid center,
    /// food placed, phase `Menu`.
    ///
    /// Fails when no food cell can be found in time.
    pub fn with_rng(size: GridSize, mut rng: R, clock: C) -> Result<Self> {
        let chain = EntityChain::new(size.center());
        let food = place_food(&mut rng, &clock, &chain, size)?;
        let tile_map = TileMap::derive(&chain, food, size)?;
        let last_tick_ms = clock.now_ms();

        Ok(Self {
            chain,
            food,
            direction: Direction::Up,
            score: INITIAL_SCORE,
            difficulty: Difficulty::default(),
            phase: Phase::Menu,
            death_reason: None,
            last_tick_ms,
            tile_map,
            size,
            clock,
            rng,
        })
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.size
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    #[must_use]
    pub fn tile_map(&self) -> &TileMap {
        &self.tile_map
    }

    #[must_use]
    pub fn view(&self) -> FrameView<'_> {
        FrameView {
            tiles: &self.tile_map,
            score: self.score,
            phase: self.phase,
            difficulty: self.difficulty,
            death_reason: self.death_reason,
        }
    }

    /// Re-derives the tile map after the chain or food was replaced directly.
    pub fn refresh_tile_map(&mut self) -> Result<()> {
        self.tile_map = TileMap::derive(&self.chain, self.food, self.size)?;
        Ok(())
    }

    /// Runs one frame: each phase block polls `input` once and acts on the
    /// first event, and the playing block runs a tick when one is due.
    ///
    /// Errors are fatal; gameplay failures only change the phase.
    pub fn step<I: InputSource + ?Sized>(&mut self, input: &mut I) -> Result<()> {
        for block in PHASE_BLOCKS {
            if self.phase != block {
                continue;
            }

            if let Some(event) = input.poll_first()? {
                self.handle_event(event)?;
                if self.phase == Phase::Quit {
                    return Ok(());
                }
            }

            if block == Phase::Playing && self.phase == Phase::Playing {
                self.update();
            }
        }

        Ok(())
    }

    /// Applies one input event to the current phase.
    pub fn handle_event(&mut self, event: InputEvent) -> Result<()> {
        let event = match event {
            InputEvent::Quit => PhaseEvent::Quit,
            InputEvent::Key(code) => PhaseEvent::Intent(Intent::from_key(code)),
        };

        if let PhaseEvent::Intent(intent) = event {
            match (self.phase, intent) {
                (Phase::Menu, Intent::SelectDifficulty(difficulty)) => {
                    log::info!("difficulty set to {}", difficulty.label());
                    self.difficulty = difficulty;
                }
                (Phase::Menu | Phase::Playing, Intent::Steer(direction)) => self.steer(direction),
                (Phase::GameOver, _) => self.restart()?,
                _ => {}
            }
        }

        self.set_phase(transition(self.phase, event));
        Ok(())
    }

    /// Changes direction unless it would reverse straight into the body.
    /// The menu accepts any direction as the starting one.
    pub fn steer(&mut self, direction: Direction) {
        if self.phase == Phase::Menu || direction_change_is_valid(self.direction, direction) {
            self.direction = direction;
        }
    }

    /// Runs a tick if the difficulty interval has elapsed since the last one.
    pub fn update(&mut self) {
        let now = self.clock.now_ms();
        if now.saturating_sub(self.last_tick_ms) < self.difficulty.interval_ms() {
            return;
        }

        match self.tick() {
            Ok(TickOutcome::Collided(collision)) => {
                log::info!("{collision:?} with score {}", self.score);
                log::debug!("chain at collision:\n{}", self.chain);
                self.death_reason = Some(collision);
                self.set_phase(transition(self.phase, PhaseEvent::TickFailed));
            }
            Ok(_) => {}
            Err(error) => {
                log::error!("tick failed: {error}");
                self.set_phase(transition(self.phase, PhaseEvent::TickFailed));
            }
        }

        self.last_tick_ms = now;
    }

    /// Advances the simulation by exactly one step.
    ///
    /// On a collision the current chain stays as it was before the step.
    pub fn tick(&mut self) -> Result<TickOutcome> {
        let head = self.chain.head().ok_or(SnekError::InvalidChain)?;
        let delta: Delta = self.direction.into();
        let next_head = head.offset(delta);

        if !self.size.is_interior(next_head) {
            return Ok(TickOutcome::Collided(Collision::Boundary));
        }

        let grew = next_head == self.food;
        let next_chain = self.chain.advance(delta, grew)?;
        if next_chain.self_intersects() {
            return Ok(TickOutcome::Collided(Collision::SelfCollision));
        }

        // Food is placed against the new chain before anything is committed, so
        // a failed placement leaves the pre-tick chain, food and score intact.
        if grew {
            let food = place_food(&mut self.rng, &self.clock, &next_chain, self.size)?;
            self.food = food;
            self.score += 1;
        }
        self.chain = next_chain;

        self.refresh_tile_map()?;
        Ok(if grew {
            TickOutcome::Grew
        } else {
            TickOutcome::Moved
        })
    }

    /// Resets chain, food and score for a new round. Phase is left to the caller.
    pub fn restart(&mut self) -> Result<()> {
        self.chain = EntityChain::new(self.size.center());
        self.food = place_food(&mut self.rng, &self.clock, &self.chain, self.size)?;
        self.score = INITIAL_SCORE;
        self.death_reason = None;
        self.refresh_tile_map()?;
        log::info!("game reset");
        Ok(())
    }

    fn set_phase(&mut self, phase: Phase) {
        if phase != self.phase {
            log::debug!("phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }
}
