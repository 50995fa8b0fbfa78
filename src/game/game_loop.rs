//! Turn loop.
//!
//! A `Session` drives one game through its phases: wait for a legal player move,
//! step every AI entity, spawn new entities, then probe whether the player can still
//! move. `run_game_loop` wires a session to a line-based input and a text output.

use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::config::game::GameConfig;
use crate::game::entities::{CollisionEffect, EntityId, generate_buff, generate_entity};
use crate::game::error::GameError;
use crate::game::state::GameState;
use crate::game::systems::{check_can_move, move_entity, render_grid, step_ai};
use crate::game::types::{Bounds, DIRECTION_SYMBOLS, Direction, EntityKind};

/// Phases of one turn. `Resolving`, `Spawning` and `CheckTerminal` only last for the
/// duration of `Session::submit`, so callers observe `AwaitingInput` or `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingInput,
    Resolving,
    Spawning,
    CheckTerminal,
    GameOver,
}

/// Result of feeding one line of input to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Not one of the direction symbols.
    Unrecognized,
    /// A direction, but the player cannot move there.
    Blocked,
    /// The move was applied and the rest of the turn resolved.
    Advanced { game_over: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub moves: u32,
    pub elapsed: Duration,
}

pub struct Session {
    pub game_state: GameState,
    moves: u32,
    started_at: Instant,
    finished_at: Option<Instant>,
    phase: TurnPhase,
}

impl Session {
    /// Build a fresh game from `config`: place the player and any starting buffs.
    pub fn prepare(config: &GameConfig) -> Result<Self, GameError> {
        let bounds = Bounds::new(config.width, config.height)?;
        let mut game_state = match config.seed {
            Some(seed) => GameState::seeded(bounds, config.entity_gen_per_turn, seed),
            None => GameState::new(bounds, config.entity_gen_per_turn),
        };

        generate_entity(&mut game_state, EntityKind::Player, &[])?;
        for _ in 0..config.buffs {
            match generate_buff(&mut game_state, EntityKind::CommonEntity, vec![CollisionEffect::Consume]) {
                Ok(_) => {}
                Err(GameError::GridFull { .. }) => break,
                Err(e) => return Err(e),
            }
        }

        info!(
            "[Game] Started on a {}x{} grid, {} spawn(s) per turn",
            bounds.width(),
            bounds.height(),
            config.entity_gen_per_turn
        );
        Self::from_state(game_state)
    }

    /// Wrap an already populated game. The terminal condition is checked right away.
    pub fn from_state(game_state: GameState) -> Result<Self, GameError> {
        let mut session = Session {
            game_state,
            moves: 0,
            started_at: Instant::now(),
            finished_at: None,
            phase: TurnPhase::AwaitingInput,
        };
        session.check_terminal()?;
        Ok(session)
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn is_over(&self) -> bool {
        self.phase == TurnPhase::GameOver
    }

    pub fn summary(&self) -> Summary {
        let end = self.finished_at.unwrap_or_else(Instant::now);
        Summary {
            moves: self.moves,
            elapsed: end.duration_since(self.started_at),
        }
    }

    /// Feed one line of player input. A legal move plays out the whole turn.
    pub fn submit(&mut self, input: &str) -> Result<InputOutcome, GameError> {
        if self.is_over() {
            return Err(GameError::SessionOver);
        }

        let Some(direction) = Direction::from_symbol(input.trim()) else {
            return Ok(InputOutcome::Unrecognized);
        };
        let (player_index, _) = self.game_state.get_player().ok_or(GameError::PlayerMissing)?;
        if !move_entity(&mut self.game_state, player_index, direction) {
            return Ok(InputOutcome::Blocked);
        }
        self.moves += 1;

        self.phase = TurnPhase::Resolving;
        self.resolve_ai();

        self.phase = TurnPhase::Spawning;
        self.spawn_entities();

        self.check_terminal()?;
        Ok(InputOutcome::Advanced { game_over: self.is_over() })
    }

    fn resolve_ai(&mut self) {
        let ids: Vec<EntityId> = self
            .game_state
            .entities
            .iter()
            .filter(|e| !e.is_player())
            .map(|e| e.id())
            .collect();

        for id in ids {
            if let Some(index) = self.game_state.index_of(id) {
                step_ai(&mut self.game_state, index);
            }
        }
    }

    fn spawn_entities(&mut self) {
        for _ in 0..self.game_state.entity_gen_per_turn {
            if let Err(e) = generate_entity(&mut self.game_state, EntityKind::CommonEntity, &[]) {
                warn!("[Game] Spawning stopped for this turn: {}", e);
                break;
            }
        }
    }

    fn check_terminal(&mut self) -> Result<(), GameError> {
        self.phase = TurnPhase::CheckTerminal;
        let (player_index, _) = self.game_state.get_player().ok_or(GameError::PlayerMissing)?;

        match check_can_move(&mut self.game_state, player_index) {
            Some((dx, dy)) => {
                debug!("[Game] Player can still move {:?}", Direction::from_vector(dx, dy));
                self.phase = TurnPhase::AwaitingInput;
            }
            None => {
                info!("[Game] No more moves after {} move(s)", self.moves);
                self.finished_at = Some(Instant::now());
                self.phase = TurnPhase::GameOver;
            }
        }
        Ok(())
    }
}

pub fn print_summary<W: Write>(out: &mut W, summary: &Summary) -> Result<(), GameError> {
    writeln!(out, "------------------------------------")?;
    writeln!(out, "Moves: {}", summary.moves)?;
    writeln!(out, "Time: {:?}", summary.elapsed)?;
    writeln!(out, "------------------------------------")?;
    Ok(())
}

/// Play `session` until game over or until `input` runs dry, then report the summary.
pub fn run_game_loop<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    out: &mut W,
) -> Result<Summary, GameError> {
    let choices: Vec<String> = Direction::ALL.iter().map(|d| d.symbol().to_string()).collect();
    let prompt = format!("Enter direction ({}), then press Enter: ", choices.join("/"));

    'game: while !session.is_over() {
        write!(out, "{}", render_grid(&session.game_state))?;

        loop {
            write!(out, "{}", prompt)?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                warn!("[Game] Input closed before the game ended");
                writeln!(out)?;
                break 'game;
            }

            match session.submit(&line)? {
                InputOutcome::Unrecognized => writeln!(out, "Directions: {}", DIRECTION_SYMBOLS)?,
                InputOutcome::Blocked => writeln!(out, "You can't move here.")?,
                InputOutcome::Advanced { .. } => break,
            }
        }
    }

    if session.is_over() {
        write!(out, "{}", render_grid(&session.game_state))?;
        writeln!(out, "No more moves. Game over.")?;
    }
    let summary = session.summary();
    print_summary(out, &summary)?;
    Ok(summary)
}
