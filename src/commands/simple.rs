//! Simple interactive CLI mode
//!
//! Line-oriented driver over the same session core as the TUI: type your
//! guess, then the feedback your puzzle gave you as a `G/Y/-` string. Useful
//! over plain terminals and for quick sanity checks against a local engine.

use crate::core::{LetterState, WORD_LENGTH};
use crate::engine::SuggestionEngine;
use crate::session::{Action, Phase, Session};
use anyhow::{Result, bail};
use colored::Colorize;
use std::io::{self, Write};
use std::sync::Arc;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub async fn run_simple(engine: Arc<dyn SuggestionEngine>) -> Result<()> {
    println!("\n{}", "╔══════════════════════════════════════════╗".cyan());
    println!("{}", "║        Wordle Oracle - Simple Mode       ║".cyan());
    println!("{}", "╚══════════════════════════════════════════╝".cyan());
    println!("\nEnter each guess you play, then the feedback your puzzle showed:");
    println!("  {} green (correct position)", "G".green().bold());
    println!("  {} yellow (wrong position)", "Y".yellow().bold());
    println!("  {} gray (not in word)", "-".dimmed().bold());
    println!("\nCommands: 'quit' to exit, 'new' for a new game\n");

    let mut session = Session::new(engine);

    loop {
        match session.phase() {
            Phase::Typing => {
                print_suggestions(&session);

                let line = prompt("Your guess")?;
                match line.as_str() {
                    "quit" | "q" => break,
                    "new" => {
                        session.reset();
                        println!("\n{}\n", "New game started!".cyan());
                    }
                    guess => {
                        let now = Instant::now();
                        enter_guess(&mut session, guess, now);
                        session.apply(Action::Advance, now);
                        if let Some(notice) = session.notice() {
                            println!("{}\n", notice.red());
                        }
                    }
                }
            }
            Phase::Coloring => {
                let line = prompt("Feedback (G/Y/-)")?;
                if line == "quit" || line == "q" {
                    break;
                }
                match parse_feedback(&line) {
                    Ok(targets) => {
                        let now = Instant::now();
                        color_last_turn(&mut session, &targets, now);
                        session.apply(Action::Advance, now);
                        if session.phase() == Phase::Analyzing {
                            println!("{}", "Consulting the oracle...".magenta());
                        }
                    }
                    Err(e) => println!("{}\n", e.to_string().red()),
                }
            }
            Phase::Analyzing => {
                session.poll(Instant::now());
                tokio::time::sleep(POLL_INTERVAL).await;
            }
            Phase::GameOver => {
                if let Some(result) = session.suggestions().first() {
                    println!("\n{}  {}\n", result.word.bold(), result.reasoning);
                }
                let line = prompt("'new' for another puzzle, 'quit' to exit")?;
                if line == "new" {
                    session.reset();
                    println!();
                } else {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Replace the guess buffer with a fresh line of input
fn enter_guess(session: &mut Session, guess: &str, now: Instant) {
    while !session.buffer().is_empty() {
        session.apply(Action::Delete, now);
    }
    for c in guess.chars() {
        session.apply(Action::Char(c), now);
    }
}

/// Cycle each tile of the last turn until it matches the target states
fn color_last_turn(session: &mut Session, targets: &[LetterState], now: Instant) {
    for (i, target) in targets.iter().enumerate() {
        for _ in 0..cycles_to(*target) {
            session.apply(Action::CycleTile(i), now);
        }
    }
}

/// Cycles needed to move a fresh (`Absent`) tile to the target state
const fn cycles_to(target: LetterState) -> usize {
    match target {
        LetterState::Absent | LetterState::Empty => 0,
        LetterState::Present => 1,
        LetterState::Correct => 2,
    }
}

fn print_suggestions(session: &Session) {
    let heading = if session.history().is_empty() {
        "Recommended starters:"
    } else {
        "Suggestions:"
    };
    println!("{}", heading.bold());
    for s in session.suggestions() {
        println!(
            "  {}  {}",
            format!("{:<8}", s.word).green().bold(),
            s.reasoning.dimmed()
        );
    }
    println!();
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_lowercase())
}

/// Parse a `G/Y/-` feedback line into target tile states
fn parse_feedback(line: &str) -> Result<Vec<LetterState>> {
    let chars: Vec<char> = line.chars().collect();
    if chars.len() != WORD_LENGTH {
        bail!("Feedback must be exactly {WORD_LENGTH} characters");
    }

    chars
        .into_iter()
        .map(|c| match c {
            'g' | 'G' => Ok(LetterState::Correct),
            'y' | 'Y' => Ok(LetterState::Present),
            '-' | '_' => Ok(LetterState::Absent),
            other => bail!("Unrecognized feedback character '{other}' (use G/Y/-)"),
        })
        .collect()
}
