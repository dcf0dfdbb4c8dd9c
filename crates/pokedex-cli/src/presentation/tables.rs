//! Table formatting utilities for CLI output.

use pokedex_core::{PokemonRecord, capitalize, format_dex_number};

use super::pokemon_display::type_names;

/// Truncates a string to a maximum number of characters, adding "..." if needed.
///
/// ```rust
/// use pokedex_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Pikachu", 10), "Pikachu");
/// assert_eq!(truncate_string("Crabominable", 8), "Crabo...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Print a horizontal separator line.
pub fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

/// One table row: number, name and types.
pub fn format_row(record: &PokemonRecord) -> String {
    let types = type_names(record).map_or_else(|| "failed to load".to_string(), |t| t.join(", "));
    format!(
        "{:<6} {:<20} {}",
        format_dex_number(record.id),
        truncate_string(&capitalize(&record.name), 19),
        types
    )
}

/// Print records as a table with a header.
pub fn print_pokemon_table(records: &[PokemonRecord]) {
    println!("{:<6} {:<20} Types", "No.", "Name");
    print_separator(48);
    for record in records {
        println!("{}", format_row(record));
    }
}
