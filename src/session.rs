//! Terminal game session
//!
//! [`GameSession`] owns the authoritative position and drives a
//! [`SearchCoordinator`] from a non-blocking tick. The caller runs the frame
//! loop: call [`GameSession::tick`] once per frame and feed lines typed by
//! the human to [`GameSession::submit_input`].
//!
//! Engine moves are applied only after they arrive and pass a legality
//! re-check against the current position.

use chess_ai::{
    is_mate_score, ChessAiResult, ChessMove, Hint, RulesEngine, Score, SearchCoordinator, Side,
    TaskPoll,
};
use std::fmt;
use tracing::{debug, info, warn};

/// Plies taken back by one `undo`
const UNDO_PLIES: usize = 2;

/// Who plays what and when the game stops early
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub engine_white: bool,
    pub engine_black: bool,
    pub show_hints: bool,
    pub max_plies: Option<usize>,
}

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Side },
    Stalemate,
    InsufficientMaterial,
    SeventyFiveMoveRule,
    PlyLimit,
    /// The engine had to move but produced no legal move
    EngineStalled,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Checkmate { winner } => write!(f, "checkmate, {winner:?} wins"),
            GameOutcome::Stalemate => f.write_str("stalemate"),
            GameOutcome::InsufficientMaterial => f.write_str("draw by insufficient material"),
            GameOutcome::SeventyFiveMoveRule => f.write_str("draw by the 75-move rule"),
            GameOutcome::PlyLimit => f.write_str("ply limit reached"),
            GameOutcome::EngineStalled => f.write_str("engine produced no move"),
        }
    }
}

/// Something the front end should show
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent<M> {
    /// A search was submitted for `side`
    Thinking { side: Side },
    EngineMoved { side: Side, mv: M },
    HumanMoved { side: Side, mv: M },
    Hints(Vec<Hint<M>>),
    IllegalInput(String),
    NotYourTurn,
    Undone { plies: usize },
    /// Undo is unavailable while the engine is thinking
    UndoRefused,
    GameOver(GameOutcome),
}

impl<M: ChessMove> fmt::Display for SessionEvent<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionEvent::Thinking { side } => write!(f, "{side:?} is thinking..."),
            SessionEvent::EngineMoved { side, mv } => {
                write!(f, "{side:?} (engine) plays {}", mv.uci())
            }
            SessionEvent::HumanMoved { side, mv } => write!(f, "{side:?} plays {}", mv.uci()),
            SessionEvent::Hints(hints) => {
                f.write_str("hints:")?;
                for hint in hints {
                    write!(f, " {} ({})", hint.mv.uci(), format_score(hint.score))?;
                }
                Ok(())
            }
            SessionEvent::IllegalInput(text) => write!(f, "illegal move: {text}"),
            SessionEvent::NotYourTurn => f.write_str("the engine is to move"),
            SessionEvent::Undone { plies } => write!(f, "took back {plies} plies"),
            SessionEvent::UndoRefused => f.write_str("cannot undo while the engine is thinking"),
            SessionEvent::GameOver(outcome) => write!(f, "game over: {outcome}"),
        }
    }
}

/// Render a score for display; forced mates read as "mate"
pub fn format_score(score: Score) -> String {
    if is_mate_score(score) {
        if score > 0 {
            "mate for White".to_string()
        } else {
            "mate for Black".to_string()
        }
    } else {
        format!("{score:+}")
    }
}

/// Terminal state of `position`, if any
pub fn detect_outcome<P: RulesEngine>(position: &P) -> Option<GameOutcome> {
    if position.is_checkmate() {
        Some(GameOutcome::Checkmate {
            winner: position.side_to_move().opponent(),
        })
    } else if position.is_stalemate() {
        Some(GameOutcome::Stalemate)
    } else if position.is_insufficient_material() {
        Some(GameOutcome::InsufficientMaterial)
    } else if position.is_game_over() {
        Some(GameOutcome::SeventyFiveMoveRule)
    } else {
        None
    }
}

/// One game between the engine and a human (or itself)
pub struct GameSession<P: RulesEngine> {
    position: P,
    /// Position before each ply, for undo
    snapshots: Vec<P>,
    history: Vec<P::Move>,
    coordinator: SearchCoordinator<P>,
    options: SessionOptions,
    /// Position key the latest hint request was made for
    hint_key: Option<String>,
    outcome: Option<GameOutcome>,
}

impl<P: RulesEngine> GameSession<P> {
    pub fn new(position: P, coordinator: SearchCoordinator<P>, options: SessionOptions) -> Self {
        Self {
            position,
            snapshots: Vec::new(),
            history: Vec::new(),
            coordinator,
            options,
            hint_key: None,
            outcome: None,
        }
    }

    pub fn position(&self) -> &P {
        &self.position
    }

    /// Moves played so far, oldest first
    pub fn history(&self) -> &[P::Move] {
        &self.history
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn is_thinking(&self) -> bool {
        self.coordinator.is_search_in_flight()
    }

    /// True when the side to move is played by the engine
    pub fn engine_to_move(&self) -> bool {
        match self.position.side_to_move() {
            Side::White => self.options.engine_white,
            Side::Black => self.options.engine_black,
        }
    }

    /// Advance one frame without blocking
    ///
    /// Collects finished work, applies a delivered engine move, detects the
    /// end of the game and submits new requests as needed.
    pub fn tick(&mut self) -> ChessAiResult<Vec<SessionEvent<P::Move>>> {
        let mut events = Vec::new();
        if self.outcome.is_some() {
            return Ok(events);
        }

        self.collect_hints(&mut events);
        self.collect_search(&mut events)?;

        if self.check_finished(&mut events) {
            return Ok(events);
        }

        if self.engine_to_move() && !self.coordinator.is_search_in_flight() {
            self.coordinator.request_search(&self.position)?;
            events.push(SessionEvent::Thinking {
                side: self.position.side_to_move(),
            });
        }

        if self.wants_hints() {
            let key = self.position.canonical_serialization();
            if self.hint_key.as_deref() != Some(key.as_str())
                && !self.coordinator.is_hints_in_flight()
            {
                self.coordinator.request_hints(&self.position)?;
                self.hint_key = Some(key);
            }
        }

        Ok(events)
    }

    /// Handle one line typed by the human
    ///
    /// `undo` takes back the last two plies; anything else is read as a move
    /// in coordinate notation.
    pub fn submit_input(&mut self, line: &str) -> ChessAiResult<Vec<SessionEvent<P::Move>>> {
        let text = line.trim();
        if text.eq_ignore_ascii_case("undo") {
            return Ok(vec![self.undo()]);
        }
        if let Some(outcome) = self.outcome {
            return Ok(vec![SessionEvent::GameOver(outcome)]);
        }
        if self.engine_to_move() {
            return Ok(vec![SessionEvent::NotYourTurn]);
        }

        let Some(mv) = self.position.parse_move(text) else {
            return Ok(vec![SessionEvent::IllegalInput(text.to_string())]);
        };

        let side = self.position.side_to_move();
        self.play(mv.clone())?;
        let mut events = vec![SessionEvent::HumanMoved { side, mv }];
        self.check_finished(&mut events);
        Ok(events)
    }

    /// Take back up to two plies
    pub fn undo(&mut self) -> SessionEvent<P::Move> {
        if self.coordinator.is_search_in_flight() {
            return SessionEvent::UndoRefused;
        }

        let mut plies = 0;
        while plies < UNDO_PLIES {
            let Some(previous) = self.snapshots.pop() else {
                break;
            };
            self.position = previous;
            self.history.pop();
            plies += 1;
        }

        if plies > 0 {
            self.outcome = None;
            self.hint_key = None;
            info!("[AI] Took back {} plies", plies);
        }
        SessionEvent::Undone { plies }
    }

    fn wants_hints(&self) -> bool {
        let self_play = self.options.engine_white && self.options.engine_black;
        self.options.show_hints && (self_play || !self.engine_to_move())
    }

    fn play(&mut self, mv: P::Move) -> ChessAiResult<()> {
        let next = self.position.apply(&mv)?;
        self.snapshots.push(std::mem::replace(&mut self.position, next));
        self.history.push(mv);
        Ok(())
    }

    fn collect_search(&mut self, events: &mut Vec<SessionEvent<P::Move>>) -> ChessAiResult<()> {
        let TaskPoll::Ready(delivered) = self.coordinator.poll_search() else {
            return Ok(());
        };

        let side = self.position.side_to_move();
        let legal = delivered.and_then(|mv| self.position.parse_move(&mv.uci()));
        match legal {
            Some(mv) => {
                self.play(mv.clone())?;
                events.push(SessionEvent::EngineMoved { side, mv });
            }
            None if detect_outcome(&self.position).is_none() => {
                warn!("[AI] Engine delivered no legal move for {:?}", side);
                self.finish(GameOutcome::EngineStalled, events);
            }
            None => {}
        }
        Ok(())
    }

    fn collect_hints(&mut self, events: &mut Vec<SessionEvent<P::Move>>) {
        let TaskPoll::Ready(hints) = self.coordinator.poll_hints() else {
            return;
        };

        let current = self.position.canonical_serialization();
        if self.hint_key.as_deref() == Some(current.as_str()) {
            events.push(SessionEvent::Hints(hints));
        } else {
            debug!("[HINTS] Dropping hints for a position no longer on the board");
        }
    }

    fn check_finished(&mut self, events: &mut Vec<SessionEvent<P::Move>>) -> bool {
        if self.outcome.is_some() {
            return true;
        }
        if let Some(outcome) = detect_outcome(&self.position) {
            self.finish(outcome, events);
            return true;
        }
        if let Some(limit) = self.options.max_plies {
            if self.history.len() >= limit {
                self.finish(GameOutcome::PlyLimit, events);
                return true;
            }
        }
        false
    }

    fn finish(&mut self, outcome: GameOutcome, events: &mut Vec<SessionEvent<P::Move>>) {
        info!("[AI] Game over: {}", outcome);
        self.outcome = Some(outcome);
        events.push(SessionEvent::GameOver(outcome));
    }
}
