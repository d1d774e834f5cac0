//! Line-oriented renderer for a `ConversationSession`.
//!
//! Turns are printed from the session's event stream; input is read one
//! line at a time and each exchange is awaited before the next line is
//! accepted, so submission is held back while a reply is pending.

use std::io::Write;
use std::sync::Arc;

use safeindy_chat::{utterance_for, ConversationSession, SessionEvent, SubmitOutcome, Turn};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, warn};

const HELP: &str = "\
Type a message and press Enter.
  /1, /2, ...     tap a quick action from the latest reply
  /action <key>   send a quick action by key
  /911            emergency dialing instructions
  /help           show this help
  /quit           leave";

const EMERGENCY_NOTICE: &str = "\
EMERGENCY? For life-threatening emergencies, call 911 immediately.
Dial 911 from any phone. This chat cannot place the call for you.";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Say(String),
    Tap(usize),
    Action(String),
    Dial911,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    let Some(rest) = trimmed.strip_prefix('/') else {
        return Command::Say(line.to_string());
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };
    match name {
        "quit" | "exit" | "q" => Command::Quit,
        "help" | "?" => Command::Help,
        "911" => Command::Dial911,
        "action" if !arg.is_empty() => Command::Action(arg.to_string()),
        n => match n.parse::<usize>() {
            Ok(index) if index > 0 => Command::Tap(index),
            _ => Command::Unknown(trimmed.to_string()),
        },
    }
}

pub fn render_turn(turn: &Turn) -> String {
    if turn.is_user() {
        return format!("you > {}", turn.text);
    }
    let mut out = format!("SafeIndy AI [{}]\n{}", turn.created_at.format("%H:%M"), turn.text);
    for (i, action) in turn.quick_actions.iter().enumerate() {
        out.push_str(&format!("\n  /{} {}", i + 1, action.label));
    }
    out
}

/// The quick action behind `/index` on the latest assistant turn.
pub fn quick_action_key(transcript: &[Turn], index: usize) -> Option<String> {
    transcript
        .iter()
        .rev()
        .find(|t| !t.is_user())
        .and_then(|t| t.quick_actions.get(index.checked_sub(1)?))
        .map(|a| a.action_key.clone())
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

/// Print session events until the session goes away.
async fn print_events(mut rx: tokio::sync::broadcast::Receiver<SessionEvent>) {
    loop {
        match rx.recv().await {
            Ok(SessionEvent::TurnAppended(turn)) => {
                // User lines are echoed by the input loop or the terminal.
                if !turn.is_user() {
                    println!("\n{}\n", render_turn(&turn));
                }
            }
            Ok(SessionEvent::PendingChanged(true)) => println!("SafeIndy AI is typing..."),
            Ok(SessionEvent::PendingChanged(false)) => prompt(),
            Err(RecvError::Lagged(n)) => warn!("renderer fell behind, skipped {n} events"),
            Err(RecvError::Closed) => break,
        }
    }
}

/// Show what a tap sends, then send it.
async fn tap(session: &ConversationSession, key: &str) -> SubmitOutcome {
    println!("you > {}", utterance_for(key));
    session.resolve_quick_action(key).await
}

/// Greet, then read commands from stdin until EOF or `/quit`.
pub async fn run(session: Arc<ConversationSession>) -> safeindy_common::Result<()> {
    println!("SafeIndy AI: 24/7 Public Safety Assistant for Indianapolis");
    println!("{EMERGENCY_NOTICE}\nType /help for commands.\n");

    let printer = tokio::spawn(print_events(session.subscribe()));
    session.initialize().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let outcome = match parse_command(&line) {
            Command::Quit => break,
            Command::Help => {
                println!("{HELP}");
                prompt();
                continue;
            }
            Command::Dial911 => {
                println!("{EMERGENCY_NOTICE}");
                prompt();
                continue;
            }
            Command::Unknown(cmd) => {
                println!("unknown command {cmd}, try /help");
                prompt();
                continue;
            }
            Command::Tap(index) => match quick_action_key(&session.transcript(), index) {
                Some(key) => tap(&session, &key).await,
                None => {
                    println!("no quick action /{index} on the latest reply");
                    prompt();
                    continue;
                }
            },
            Command::Action(key) => tap(&session, &key).await,
            Command::Say(text) => session.submit(&text).await,
        };

        match outcome {
            SubmitOutcome::Empty => prompt(),
            SubmitOutcome::Busy => println!("still waiting for the last reply"),
            other => debug!(?other, "exchange finished"),
        }
    }

    printer.abort();
    Ok(())
}
