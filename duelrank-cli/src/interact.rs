/// The choice loop: prompt for one pair, read one pick, advance.
///
/// Picks come from any `BufRead` — the user's terminal, or a pre-recorded
/// choices file for scripted replays. EOF mid-session counts as an abort.
use std::io::{self, BufRead, Write};

use duelrank_core::RankingSession;

/// One parsed line of choice input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceInput {
    First,
    Second,
    Abort,
}

/// Parse a line of input: `1`, `2`, or `q`/`quit` to abort.
pub fn parse_choice(line: &str) -> Option<ChoiceInput> {
    match line.trim().to_ascii_lowercase().as_str() {
        "1" => Some(ChoiceInput::First),
        "2" => Some(ChoiceInput::Second),
        "q" | "quit" => Some(ChoiceInput::Abort),
        _ => None,
    }
}

/// Drive `session` to completion. Prompts go to `out`, picks come from
/// `input`. Returns false if the session was aborted (quit or EOF).
///
/// Unparseable lines re-prompt; they never reach the session, so a stray
/// line in a choices file cannot count as a pick.
pub fn run_session(
    session: &mut RankingSession,
    names: &[String],
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> io::Result<bool> {
    let total = session.total_pairs();

    while let Some((a, b)) = session.current_pair() {
        writeln!(out)?;
        writeln!(out, "[{}/{}] Which do you prefer?", session.pairs_presented() + 1, total)?;
        writeln!(out, "  1) {}", names[a as usize])?;
        writeln!(out, "  2) {}", names[b as usize])?;

        loop {
            write!(out, "> ")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                session.abort();
                return Ok(false);
            }

            match parse_choice(&line) {
                Some(ChoiceInput::First) => {
                    let _ = session.record_choice(a);
                    break;
                }
                Some(ChoiceInput::Second) => {
                    let _ = session.record_choice(b);
                    break;
                }
                Some(ChoiceInput::Abort) => {
                    session.abort();
                    return Ok(false);
                }
                None => {
                    writeln!(out, "Enter 1, 2, or q to quit.")?;
                }
            }
        }

        session.advance();
    }

    Ok(true)
}
