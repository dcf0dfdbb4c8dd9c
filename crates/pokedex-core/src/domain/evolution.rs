//! PokeAPI `evolution-chain/{id}` response shape and rendering helpers.

use serde::{Deserialize, Serialize};

use super::lenient::null_as_default;
use super::remote::NamedResource;
use crate::utils::formatting::capitalize;

/// Chain record. `id` and the root `chain` link are required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionChain {
    pub id: i64,
    #[serde(default)]
    pub baby_trigger_item: Option<NamedResource>,
    pub chain: ChainLink,
}

/// One node of the evolution tree. Branching evolutions (e.g. Eevee) have
/// several `evolves_to` children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainLink {
    pub evolution_details: Vec<EvolutionDetail>,
    pub evolves_to: Vec<ChainLink>,
    pub is_baby: bool,
    pub species: NamedResource,
}

/// Conditions that trigger an evolution step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionDetail {
    pub gender: Option<i64>,
    pub held_item: Option<NamedResource>,
    pub item: Option<NamedResource>,
    pub known_move: Option<NamedResource>,
    pub known_move_type: Option<NamedResource>,
    pub location: Option<NamedResource>,
    pub min_affection: Option<i64>,
    pub min_beauty: Option<i64>,
    pub min_happiness: Option<i64>,
    pub min_level: Option<i64>,
    pub needs_overworld_rain: bool,
    pub party_species: Option<NamedResource>,
    pub party_type: Option<NamedResource>,
    pub relative_physical_stats: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub time_of_day: String,
    pub trade_species: Option<NamedResource>,
    pub trigger: NamedResource,
    pub turn_upside_down: bool,
}

impl EvolutionChain {
    /// Depth-first `(depth, species name)` pairs, root at depth 0.
    pub fn stages(&self) -> Vec<(usize, &str)> {
        let mut out = Vec::new();
        collect_stages(&self.chain, 0, &mut out);
        out
    }
}

fn collect_stages<'a>(link: &'a ChainLink, depth: usize, out: &mut Vec<(usize, &'a str)>) {
    out.push((depth, link.species.name.as_str()));
    for next in &link.evolves_to {
        collect_stages(next, depth + 1, out);
    }
}

/// Render a chain as indented `Stage N: Name` lines, two spaces per level.
pub fn render_evolution_chain(chain: &EvolutionChain) -> String {
    chain
        .stages()
        .into_iter()
        .map(|(depth, name)| format!("{}Stage {}: {}\n", "  ".repeat(depth), depth + 1, capitalize(name)))
        .collect()
}

/// Trailing numeric id of a PokeAPI resource URL
/// (`.../evolution-chain/10/` gives `10`).
pub fn chain_id_from_url(url: &str) -> Option<i64> {
    url.split('/')
        .filter(|segment| !segment.is_empty())
        .next_back()
        .and_then(|segment| segment.parse().ok())
}
