/// Output formatting: terminal table and JSON.
use duelrank_core::{ScoreTable, Standing};
use serde::Serialize;

#[derive(Serialize)]
struct JsonStanding {
    rank: usize,
    name: String,
    wins: u32,
    comparisons: usize,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    items: Vec<JsonStanding>,
    /// Flat ID → win-count mapping, the submission payload shape.
    scores: &'a ScoreTable,
    total_comparisons: usize,
}

/// Print results as a formatted terminal table.
pub fn print_table(rankings: &[Standing], names: &[String], total_comparisons: usize) {
    // Find the widest item name for padding
    let name_width = rankings.iter()
        .map(|r| names[r.item as usize].len())
        .max()
        .unwrap_or(4)
        .max(4); // at least "Item"

    // Header
    println!(" # | {:<name_width$} | Wins | Comparisons", "Item");
    println!("---|-{}-|------|------------", "-".repeat(name_width));

    // Rows
    for (i, r) in rankings.iter().enumerate() {
        let name = &names[r.item as usize];
        println!(
            "{:>2} | {:<name_width$} | {:>4} | {:>11}",
            i + 1, name, r.wins, r.comparisons,
        );
    }

    println!(
        "\n{} items ranked ({} pairwise choices)",
        rankings.len(),
        total_comparisons,
    );
}

/// Print results as JSON.
pub fn print_json(rankings: &[Standing], names: &[String], scores: &ScoreTable, total_comparisons: usize) {
    let items: Vec<JsonStanding> = rankings
        .iter()
        .enumerate()
        .map(|(i, r)| JsonStanding {
            rank: i + 1,
            name: names[r.item as usize].clone(),
            wins: r.wins,
            comparisons: r.comparisons,
        })
        .collect();

    let output = JsonOutput {
        items,
        scores,
        total_comparisons,
    };

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
