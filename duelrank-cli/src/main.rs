mod config;
mod interact;
mod output;

use clap::Parser;
use duelrank_core::{pair_count, standings, RankingSession};
use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "duelrank", version, about = "Rank items by answering either-or questions, one pair at a time")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Run a pairwise ranking session over a list of items
    Rank(RankArgs),
    /// Create a default config file at ~/.config/duelrank/config.toml
    Init,
}

#[derive(Parser)]
struct RankArgs {
    /// File with one item per line
    #[arg(long)]
    items: Option<PathBuf>,

    /// Inline item (repeatable)
    #[arg(long = "item")]
    inline_items: Vec<String>,

    /// File with one pre-recorded pick per line (1, 2, or q) instead of prompting
    #[arg(long)]
    choices: Option<PathBuf>,

    /// Output JSON instead of table
    #[arg(long)]
    json: bool,

    /// Show progress during the session
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (default: ~/.config/duelrank/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Parse a string as either a JSON array of strings or plain text (one item per line).
fn parse_items_from_str(content: &str) -> Vec<String> {
    let trimmed = content.trim();
    if trimmed.starts_with('[') {
        // Try JSON array
        let items: Vec<String> = serde_json::from_str(trimmed)
            .unwrap_or_else(|e| bail(format!("File looks like JSON but failed to parse: {e}")));
        items.into_iter().filter(|s| !s.trim().is_empty()).collect()
    } else {
        // Plain text, one item per line
        trimmed
            .lines()
            .map(|l| l.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Load items from all sources: --items file, --item inline args, or stdin.
/// Returns the items and whether stdin was consumed to get them.
fn load_items(args: &RankArgs, config_items: Option<&str>) -> (Vec<String>, bool) {
    let mut items = Vec::new();

    // From file (auto-detects JSON array vs one-per-line); config supplies a
    // default path when the flag is absent.
    let items_path = args.items.clone().or_else(|| config_items.map(PathBuf::from));
    if let Some(ref path) = items_path {
        let content = std::fs::read_to_string(path)
            .unwrap_or_else(|e| bail(format!("Failed to read items file {}: {e}", path.display())));
        items = parse_items_from_str(&content);
    }

    // From inline --item flags
    items.extend(args.inline_items.iter().cloned());

    // From stdin (only if no file and no inline items)
    if items.is_empty() {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            bail("No items provided. Use --items <file>, --item <name>, or pipe items via stdin.");
        }
        let content: String = stdin.lock().lines()
            .map(|l| l.unwrap_or_else(|e| bail(format!("Failed to read from stdin: {e}"))))
            .collect::<Vec<_>>()
            .join("\n");
        return (parse_items_from_str(&content), true);
    }

    (items, false)
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rank(args) => run_rank(args),
        Commands::Init => {
            let path = config::create_default_config();
            println!("Created config at {}", path.display());
            println!("Edit it to set a default items file or output format.");
        }
    }
}

fn run_rank(args: RankArgs) {
    // Load config file, merge with CLI args (CLI wins)
    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    let cfg = config::load_config(&config_path);

    let json = args.json || cfg.json.unwrap_or(false);

    let (items, items_from_stdin) = load_items(&args, cfg.items.as_deref());

    // With nothing to compare there is no session and no submission.
    if items.len() < 2 {
        println!("Nothing to rank: need at least two items, got {}.", items.len());
        return;
    }

    let item_ids: Vec<i64> = (0..items.len() as i64).collect();
    let mut session = RankingSession::new(&item_ids)
        .unwrap_or_else(|e| bail(e));

    if args.verbose {
        eprintln!(
            "Ranking {} items ({} pairwise choices)",
            items.len(),
            pair_count(items.len()),
        );
    }

    let outcome = if let Some(ref path) = args.choices {
        let file = std::fs::File::open(path)
            .unwrap_or_else(|e| bail(format!("Failed to read choices file {}: {e}", path.display())));
        let mut reader = io::BufReader::new(file);
        interact::run_session(&mut session, &items, &mut reader, &mut io::stderr())
    } else {
        // Picks come from the terminal, or from piped stdin for scripted runs —
        // unless stdin was already drained to read the items themselves.
        let stdin = io::stdin();
        if items_from_stdin {
            bail("Items came from stdin, leaving nothing to read picks from. Pass --choices <file>, or provide items via --items/--item.");
        }
        let mut lock = stdin.lock();
        interact::run_session(&mut session, &items, &mut lock, &mut io::stderr())
    };
    let completed = outcome.unwrap_or_else(|e| bail(format!("Failed to read choices: {e}")));

    if !completed {
        eprintln!("Session aborted — no scores recorded.");
        return;
    }

    if args.verbose {
        eprintln!("Session complete: {} choices recorded", session.pairs_presented());
    }

    let scores = session.take_scores().unwrap_or_else(|e| bail(e));
    let rankings = standings(&scores, &item_ids);

    if json {
        output::print_json(&rankings, &items, &scores, session.total_pairs());
    } else {
        output::print_table(&rankings, &items, session.total_pairs());
    }
}
