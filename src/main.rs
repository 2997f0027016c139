use anyhow::Context;
use chess_ai::{position_from_fen, ChessMove, RulesEngine, SearchCoordinator};
use chessbot::{settings, Cli, GameSession};
use clap::Parser;
use crossbeam_channel::{unbounded, Receiver, TryRecvError};
use std::io::{self, BufRead};
use std::thread;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = cli.apply_overrides(settings::load_settings(cli.config.as_deref()));
    config.validate().context("invalid AI settings")?;
    if cli.save_config {
        settings::save_settings(&config, cli.config.as_deref())?;
    }

    let position = position_from_fen(&cli.fen).context("invalid starting position")?;
    let coordinator = SearchCoordinator::new(config.clone())?;
    let options = cli.session_options();
    let mut session = GameSession::new(position, coordinator, options);

    info!(
        "[AI] Engine plays {:?} | Depth: {} | Book: {} | Hints: {}",
        cli.engine, config.depth, config.use_opening_book, options.show_hints
    );

    let human_plays = !(options.engine_white && options.engine_black);
    let input = if human_plays {
        println!("Enter moves in coordinate notation (e2e4, e7e8q), `undo` or `quit`.");
        Some(spawn_stdin_reader()?)
    } else {
        None
    };

    println!("{}", session.position().canonical_serialization());
    let frame = Duration::from_millis(cli.frame_ms);

    'game: loop {
        for event in session.tick()? {
            println!("{event}");
        }
        if session.is_over() {
            break;
        }

        if let Some(input) = &input {
            loop {
                let line = match input.try_recv() {
                    Ok(line) => line,
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        warn!("[AI] Input closed, leaving the game");
                        break 'game;
                    }
                };
                if line.trim().eq_ignore_ascii_case("quit") {
                    break 'game;
                }
                let before = session.history().len();
                for event in session.submit_input(&line)? {
                    println!("{event}");
                }
                if session.history().len() != before {
                    println!("{}", session.position().canonical_serialization());
                }
            }
        }

        thread::sleep(frame);
    }

    let moves: Vec<String> = session.history().iter().map(|mv| mv.uci()).collect();
    println!("moves: {}", moves.join(" "));
    if let Some(outcome) = session.outcome() {
        println!("result: {outcome}");
    }
    Ok(())
}

/// Read stdin lines on a background thread so the frame loop never blocks
fn spawn_stdin_reader() -> io::Result<Receiver<String>> {
    let (sender, receiver) = unbounded();
    thread::Builder::new()
        .name("chessbot-stdin".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if sender.send(line).is_err() {
                    break;
                }
            }
        })?;
    Ok(receiver)
}
