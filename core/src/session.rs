use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Playing,
    Won,
    Lost,
}

impl Phase {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    /// Human-readable reason for a finished game.
    pub const fn reason(self) -> Option<&'static str> {
        match self {
            Self::Playing => None,
            Self::Won => Some("reached target"),
            Self::Lost => Some("no moves remain"),
        }
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::Playing
    }
}

/// Grid and score captured before a move, restored by undo.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub grid: Grid,
    pub score: Score,
    #[serde(default)]
    pub keep_playing: bool,
}

/// Everything a renderer needs to draw the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub grid: Grid,
    pub score: Score,
    pub high_score: Score,
    pub undo_slot: Option<Snapshot>,
    pub phase: Phase,
    /// Set once the player chose to continue past the target; disables further win checks.
    #[serde(default)]
    pub keep_playing: bool,
}

impl SessionState {
    fn fresh(size: Coord, high_score: Score) -> Self {
        Self {
            grid: Grid::empty(size),
            score: 0,
            high_score,
            undo_slot: None,
            phase: Phase::Playing,
            keep_playing: false,
        }
    }
}

/// A single game of 2048 plus the high score carried across restarts.
#[derive(Clone, Debug)]
pub struct GameSession<S> {
    config: GameConfig,
    state: SessionState,
    spawner: S,
}

impl<S: TileSpawner> GameSession<S> {
    /// Creates a session and starts the first game.
    pub fn new(config: GameConfig, spawner: S) -> Result<Self> {
        let mut session = Self {
            config,
            state: SessionState::fresh(config.size, 0),
            spawner,
        };
        session.start_game()?;
        Ok(session)
    }

    /// Continues from a previously captured state.
    pub fn resume(config: GameConfig, state: SessionState, spawner: S) -> Result<Self> {
        let snapshots = core::iter::once(&state.grid).chain(state.undo_slot.iter().map(|s| &s.grid));
        for grid in snapshots {
            if grid.size() != config.size {
                return Err(GameError::InvalidGridShape);
            }
            for value in grid.tiles() {
                validate_tile(value)?;
            }
        }

        Ok(Self {
            config,
            state,
            spawner,
        })
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn into_state(self) -> SessionState {
        self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.state.grid
    }

    pub fn score(&self) -> Score {
        self.state.score
    }

    pub fn high_score(&self) -> Score {
        self.state.high_score
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn can_undo(&self) -> bool {
        self.state.undo_slot.is_some()
    }

    pub fn spawner(&self) -> &S {
        &self.spawner
    }

    /// Clears the board and score and places two starting tiles. The high score is kept.
    pub fn start_game(&mut self) -> Result<()> {
        let mut grid = Grid::empty(self.config.size);
        spawn_tile(&mut self.spawner, &mut grid)?;
        spawn_tile(&mut self.spawner, &mut grid)?;

        self.state = SessionState {
            grid,
            ..SessionState::fresh(self.config.size, self.state.high_score)
        };
        log::info!("New {0}x{0} game started", self.config.size);
        Ok(())
    }

    pub fn restart(&mut self) -> Result<()> {
        self.start_game()
    }

    /// Places one tile on a random empty cell. Does nothing on a full grid.
    pub fn add_tile(&mut self) -> Result<Option<(Coord2, Tile)>> {
        spawn_tile(&mut self.spawner, &mut self.state.grid)
    }

    /// Slides the grid towards `direction`.
    ///
    /// A move that changes nothing is ignored without touching any state. Otherwise the previous
    /// grid and score go to the undo slot, the score grows by the merge gain, a tile is spawned and
    /// the game is checked for a win, then for a loss.
    pub fn apply_move(&mut self, direction: Direction) -> Result<MoveStatus> {
        self.check_not_finished()?;

        let MoveResult {
            mut grid,
            moved,
            score_gain,
        } = apply_direction(&self.state.grid, direction);

        if !moved {
            log::trace!("Move {} ignored, grid unchanged", direction);
            return Ok(MoveStatus::Ignored);
        }

        spawn_tile(&mut self.spawner, &mut grid)?;

        let previous = core::mem::replace(&mut self.state.grid, grid);
        self.state.undo_slot = Some(Snapshot {
            grid: previous,
            score: self.state.score,
            keep_playing: self.state.keep_playing,
        });
        self.state.score = self.state.score.saturating_add(score_gain);
        self.state.high_score = self.state.high_score.max(self.state.score);
        log::debug!(
            "Move {} gained {}, score {}",
            direction,
            score_gain,
            self.state.score
        );

        Ok(if self.check_win() {
            self.end_game(true);
            MoveStatus::Won
        } else if self.check_lose() {
            self.end_game(false);
            MoveStatus::Lost
        } else {
            MoveStatus::Continued
        })
    }

    /// Restores the grid and score from before the last accepted move.
    pub fn undo(&mut self) -> UndoOutcome {
        let Some(Snapshot {
            grid,
            score,
            keep_playing,
        }) = self.state.undo_slot.take()
        else {
            return UndoOutcome::NoChange;
        };

        self.state.grid = grid;
        self.state.score = score;
        self.state.keep_playing = keep_playing;
        self.state.phase = Phase::Playing;
        log::debug!("Undo restored score {}", score);
        UndoOutcome::Restored
    }

    /// Resumes play after reaching the target; the target no longer ends the game.
    pub fn keep_playing(&mut self) -> Result<()> {
        match self.state.phase {
            Phase::Playing => Ok(()),
            Phase::Won => {
                self.state.phase = Phase::Playing;
                self.state.keep_playing = true;
                log::info!("Continuing past {}", self.config.target);
                Ok(())
            }
            Phase::Lost => Err(GameError::AlreadyEnded),
        }
    }

    pub fn check_win(&self) -> bool {
        !self.state.keep_playing && self.state.grid.contains(self.config.target)
    }

    pub fn check_lose(&self) -> bool {
        !has_moves(&self.state.grid)
    }

    fn end_game(&mut self, won: bool) {
        self.state.phase = if won { Phase::Won } else { Phase::Lost };
        log::info!(
            "Game over with score {}: {}",
            self.state.score,
            self.state.phase.reason().unwrap_or_default()
        );
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.phase.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
