//! URL builders for PokeAPI resources.

use url::Url;

use crate::error::ApiResult;

/// Parse a configured base URL.
pub fn parse_base_url(base_url: &str) -> ApiResult<Url> {
    Ok(Url::parse(base_url)?)
}

/// Build the URL for `pokemon/{name_or_id}`.
pub fn build_pokemon_url(base: &Url, name_or_id: &str) -> ApiResult<Url> {
    resource_url(base, "pokemon", name_or_id)
}

/// Build the URL for `pokemon-species/{name_or_id}`.
pub fn build_species_url(base: &Url, name_or_id: &str) -> ApiResult<Url> {
    resource_url(base, "pokemon-species", name_or_id)
}

/// Build the URL for `evolution-chain/{id}`.
pub fn build_evolution_chain_url(base: &Url, id: i64) -> ApiResult<Url> {
    resource_url(base, "evolution-chain", &id.to_string())
}

/// Join `{resource}/{key}` onto the base. The key is percent-encoded so
/// user input can never escape its path segment.
fn resource_url(base: &Url, resource: &str, key: &str) -> ApiResult<Url> {
    let path = format!("{resource}/{}", urlencoding::encode(key));
    Ok(base.join(&path)?)
}
