//! Pokémon summary and detail rendering.

use pokedex_core::{PokemonDetail, PokemonRecord, capitalize, format_dex_number, type_color};

/// Capitalized type names in stored order, `None` if the blob is unreadable.
pub(crate) fn type_names(record: &PokemonRecord) -> Option<Vec<String>> {
    record.decode_types().ok().map(|types| {
        types
            .iter()
            .map(|slot| capitalize(&slot.kind.name))
            .collect()
    })
}

/// `#025 Pikachu`
pub fn format_header(record: &PokemonRecord) -> String {
    format!(
        "{} {}",
        format_dex_number(record.id),
        capitalize(&record.name)
    )
}

/// `Types: Grass, Poison`, or the load-failure text.
pub fn format_types(record: &PokemonRecord) -> String {
    match type_names(record) {
        Some(names) => format!("Types: {}", names.join(", ")),
        None => "Types: failed to load".to_string(),
    }
}

/// Header colour from the first type; white when there are none.
pub fn header_color(record: &PokemonRecord) -> &'static str {
    record
        .decode_types()
        .ok()
        .and_then(|types| types.first().map(|slot| type_color(&slot.kind.name)))
        .unwrap_or_else(|| type_color(""))
}

/// One `Name: value` line per stat, or a single failure line.
pub fn format_stats(record: &PokemonRecord) -> Vec<String> {
    match record.decode_stats() {
        Ok(stats) => stats
            .iter()
            .map(|entry| format!("{}: {}", capitalize(&entry.stat.name), entry.base_stat))
            .collect(),
        Err(_) => vec!["Failed to load stats.".to_string()],
    }
}

/// Short block used for confirmations and search results.
pub fn display_summary(record: &PokemonRecord) {
    println!("  {}", format_header(record));
    println!("  {}", format_types(record));
}

/// Full detail screen.
pub fn display_detail(detail: &PokemonDetail) {
    let record = &detail.record;

    println!("{}", format_header(record));
    println!("Color: {}", header_color(record));
    if !record.image_url.is_empty() {
        println!("Image: {}", record.image_url);
    }
    println!("{}", format_types(record));

    if let Ok(view) = &detail.view {
        if !view.is_cached() {
            // PokeAPI reports decimetres and hectograms
            println!(
                "Height: {:.1} m  Weight: {:.1} kg",
                tenths(view.height),
                tenths(view.weight)
            );
        }
    }

    println!();
    println!("Stats:");
    for line in format_stats(record) {
        println!("  {line}");
    }

    println!();
    println!("Description:");
    println!("  {}", detail.description);

    println!();
    println!("Evolution:");
    for line in detail.evolution.lines() {
        println!("  {line}");
    }
}

#[allow(clippy::cast_precision_loss)]
fn tenths(value: i64) -> f64 {
    value as f64 / 10.0
}
