//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: no lookups and no domain transforms beyond
//! decoding what a record already carries.

pub mod pokemon_display;
pub mod tables;

pub use pokemon_display::{
    display_detail, display_summary, format_header, format_stats, format_types, header_color,
};
pub use tables::{print_pokemon_table, print_separator, truncate_string};
