//! Background search coordination
//!
//! The foreground owns a [`SearchCoordinator`] and drives it from its own
//! loop: submit a request, then poll once per tick until the result arrives.
//! Nothing here ever blocks the caller except the explicit `wait_*` methods.
//!
//! Each request runs on its own short-lived thread with a private clone of
//! the position and hands back exactly one value through a one-shot channel.
//! At most one search and one hint request can be in flight; a second
//! request of the same kind is refused, not queued. There is no
//! cancellation: a started request runs to completion, and a result that is
//! never polled is simply dropped with the coordinator.

use crate::book::OpeningBook;
use crate::config::AiConfig;
use crate::error::{ChessAiError, ChessAiResult};
use crate::rules::{ChessMove, RulesEngine};
use crate::search::{find_best_move, top_candidates};
use crate::types::{Hint, TaskKind};
use crossbeam_channel::{bounded, Receiver, TryRecvError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// State of a request slot as seen by one poll
#[derive(Debug, Clone, PartialEq)]
pub enum TaskPoll<T> {
    /// Nothing was requested
    Idle,
    /// The worker is still running
    Pending,
    /// The result, handed over exactly once
    Ready(T),
}

/// One in-flight request
#[derive(Debug)]
struct PendingTask<T> {
    receiver: Receiver<T>,
    started: Instant,
}

/// Run `job` on a fresh named thread and return the receiving end
fn spawn_worker<T, F>(kind: TaskKind, job: F) -> ChessAiResult<PendingTask<T>>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let (sender, receiver) = bounded(1);
    thread::Builder::new()
        .name(format!("chess-ai-{kind}"))
        .spawn(move || {
            // The coordinator may already be gone; nobody is left to tell
            let _ = sender.send(job());
        })
        .map_err(|source| ChessAiError::WorkerSpawn { kind, source })?;

    Ok(PendingTask {
        receiver,
        started: Instant::now(),
    })
}

/// Non-blocking check of one slot; clears the slot when a value is taken
fn poll_slot<T: Default>(slot: &mut Option<PendingTask<T>>, kind: TaskKind) -> TaskPoll<T> {
    let Some(task) = slot.as_ref() else {
        return TaskPoll::Idle;
    };

    let value = match task.receiver.try_recv() {
        Ok(value) => {
            debug!(
                "[AI] {} result ready after {:.2}s",
                kind,
                task.started.elapsed().as_secs_f32()
            );
            value
        }
        Err(TryRecvError::Empty) => return TaskPoll::Pending,
        Err(TryRecvError::Disconnected) => {
            error!("[AI] {} worker exited without a result", kind);
            T::default()
        }
    };

    *slot = None;
    TaskPoll::Ready(value)
}

/// Blocking receive on one slot; `None` when nothing was requested
fn wait_slot<T: Default>(slot: &mut Option<PendingTask<T>>, kind: TaskKind) -> Option<T> {
    let task = slot.take()?;
    match task.receiver.recv() {
        Ok(value) => Some(value),
        Err(_) => {
            error!("[AI] {} worker exited without a result", kind);
            Some(T::default())
        }
    }
}

/// Runs searches and hint scans off the foreground thread
#[derive(Debug)]
pub struct SearchCoordinator<P: RulesEngine> {
    config: AiConfig,
    book: Arc<OpeningBook>,
    rng: StdRng,
    pending_search: Option<PendingTask<Option<P::Move>>>,
    pending_hints: Option<PendingTask<Vec<Hint<P::Move>>>>,
}

impl<P: RulesEngine> SearchCoordinator<P> {
    /// Coordinator using the built-in opening book
    ///
    /// # Errors
    ///
    /// Returns [`ChessAiError::InvalidDepth`] when the configured depth is
    /// out of range.
    pub fn new(config: AiConfig) -> ChessAiResult<Self> {
        Self::with_book(config, Arc::new(OpeningBook::standard()))
    }

    /// Coordinator sharing an existing book
    pub fn with_book(config: AiConfig, book: Arc<OpeningBook>) -> ChessAiResult<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        Ok(Self {
            config,
            book,
            rng,
            pending_search: None,
            pending_hints: None,
        })
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    pub fn is_search_in_flight(&self) -> bool {
        self.pending_search.is_some()
    }

    pub fn is_hints_in_flight(&self) -> bool {
        self.pending_hints.is_some()
    }

    /// Start choosing a move for the side to move in `position`
    ///
    /// The worker tries the opening book first (when enabled) and falls back
    /// to a fixed-depth search. The result is `None` only when there is no
    /// legal move or the search failed.
    ///
    /// # Errors
    ///
    /// [`ChessAiError::RequestInFlight`] if a search result has not been
    /// collected yet, or [`ChessAiError::WorkerSpawn`] if no thread could be
    /// started.
    pub fn request_search(&mut self, position: &P) -> ChessAiResult<()> {
        if self.pending_search.is_some() {
            warn!("[AI] Search requested while another is in flight");
            return Err(ChessAiError::RequestInFlight {
                kind: TaskKind::Search,
            });
        }

        let position = position.clone();
        let depth = self.config.depth;
        let book = self
            .config
            .use_opening_book
            .then(|| Arc::clone(&self.book));
        let mut rng = StdRng::seed_from_u64(self.rng.random());

        info!("[AI] ========== SEARCH TASK SPAWNED ==========");
        info!(
            "[AI] Side: {:?} | Depth: {} | Book: {}",
            position.side_to_move(),
            depth,
            book.is_some()
        );

        let task = spawn_worker(TaskKind::Search, move || {
            if let Some(book) = book {
                if let Some(mv) = book.lookup(&position, &mut rng) {
                    info!("[AI] Book move: {}", mv.uci());
                    return Some(mv);
                }
            }
            find_best_move(&position, depth)
        })?;

        self.pending_search = Some(task);
        Ok(())
    }

    /// Start scoring the most promising moves in `position`
    ///
    /// # Errors
    ///
    /// Same as [`Self::request_search`], for the hint slot.
    pub fn request_hints(&mut self, position: &P) -> ChessAiResult<()> {
        if self.pending_hints.is_some() {
            warn!("[HINTS] Hints requested while another scan is in flight");
            return Err(ChessAiError::RequestInFlight {
                kind: TaskKind::Hints,
            });
        }

        let position = position.clone();
        let depth = self.config.depth;
        let pool = self.config.hint_pool;
        let count = self.config.hint_count;

        debug!("[HINTS] Scan spawned: depth {} | pool {} | count {}", depth, pool, count);

        let task = spawn_worker(TaskKind::Hints, move || {
            top_candidates(&position, depth, pool, count)
        })?;

        self.pending_hints = Some(task);
        Ok(())
    }

    /// Collect the search result if it is ready
    pub fn poll_search(&mut self) -> TaskPoll<Option<P::Move>> {
        poll_slot(&mut self.pending_search, TaskKind::Search)
    }

    /// Collect the hints if they are ready
    pub fn poll_hints(&mut self) -> TaskPoll<Vec<Hint<P::Move>>> {
        poll_slot(&mut self.pending_hints, TaskKind::Hints)
    }

    /// Block until the search result arrives; `None` if nothing is in flight
    pub fn wait_search(&mut self) -> Option<Option<P::Move>> {
        wait_slot(&mut self.pending_search, TaskKind::Search)
    }

    /// Block until the hints arrive; `None` if nothing is in flight
    pub fn wait_hints(&mut self) -> Option<Vec<Hint<P::Move>>> {
        wait_slot(&mut self.pending_hints, TaskKind::Hints)
    }
}
