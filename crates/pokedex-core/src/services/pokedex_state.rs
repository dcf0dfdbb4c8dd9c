//! Presentation state holder.
//!
//! Owns the observable state a front end renders (busy flag, transient status
//! message, last search result) and the user actions that update it. Each
//! piece of state is a `tokio::sync::watch` channel so any number of views
//! can subscribe and always see the latest value.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures_util::StreamExt;
use tokio::sync::watch;
use tracing::debug;

use super::PokemonService;
use crate::domain::{
    EvolutionChain, PokemonRecord, PokemonSpecies, PokemonView, chain_id_from_url,
    render_evolution_chain,
};
use crate::ports::{ListOrder, RecordStream, RepositoryError};
use crate::utils::formatting::capitalize;

/// Names fetched by [`PokedexState::load_initial`].
pub const INITIAL_POKEMON: [&str; 10] = [
    "bulbasaur",
    "ivysaur",
    "venusaur",
    "charmander",
    "charmeleon",
    "charizard",
    "squirtle",
    "wartortle",
    "blastoise",
    "caterpie",
];

const DESCRIPTION_UNAVAILABLE: &str = "Description not available.";
const EVOLUTION_URL_MISSING: &str = "Evolution chain not available (URL not found).";
const EVOLUTION_ID_INVALID: &str = "Evolution chain not available (invalid ID).";
const EVOLUTION_UNAVAILABLE: &str = "Evolution chain not available.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// One-shot status line shown after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }

    pub const fn is_error(&self) -> bool {
        matches!(self.kind, MessageKind::Error)
    }
}

/// Everything the detail view shows for one cached Pokémon.
#[derive(Debug, Clone)]
pub struct PokemonDetail {
    pub record: PokemonRecord,
    /// Reverse-projected view. `Err` when the stored blobs are unreadable.
    pub view: Result<PokemonView, RepositoryError>,
    pub description: String,
    pub evolution: String,
}

pub struct PokedexState {
    service: Arc<PokemonService>,
    loading: watch::Sender<bool>,
    in_flight: AtomicUsize,
    message: watch::Sender<Option<StatusMessage>>,
    search_results: watch::Sender<Vec<PokemonRecord>>,
}

/// Keeps the busy flag raised while any action is in flight.
struct BusyGuard<'a> {
    state: &'a PokedexState,
}

impl<'a> BusyGuard<'a> {
    fn enter(state: &'a PokedexState) -> Self {
        if state.in_flight.fetch_add(1, Ordering::SeqCst) == 0 {
            state.loading.send_replace(true);
        }
        Self { state }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        if self.state.in_flight.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.state.loading.send_replace(false);
        }
    }
}

impl PokedexState {
    pub fn new(service: Arc<PokemonService>) -> Self {
        Self {
            service,
            loading: watch::channel(false).0,
            in_flight: AtomicUsize::new(0),
            message: watch::channel(None).0,
            search_results: watch::channel(Vec::new()).0,
        }
    }

    pub fn service(&self) -> &Arc<PokemonService> {
        &self.service
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Observable state
    // ─────────────────────────────────────────────────────────────────────────

    /// Live list of every cached Pokémon in storage order.
    pub fn pokemon_list(&self) -> RecordStream {
        self.service.watch_local(ListOrder::Unspecified)
    }

    pub fn is_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    pub fn message(&self) -> watch::Receiver<Option<StatusMessage>> {
        self.message.subscribe()
    }

    pub fn search_results(&self) -> watch::Receiver<Vec<PokemonRecord>> {
        self.search_results.subscribe()
    }

    pub fn clear_message(&self) {
        self.message.send_replace(None);
    }

    fn report(&self, message: StatusMessage) {
        debug!(kind = ?message.kind, text = %message.text, "Status message");
        self.message.send_replace(Some(message));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Actions
    // ─────────────────────────────────────────────────────────────────────────

    /// Look a name up through the cache and report the outcome.
    pub async fn search_and_save(&self, name: &str) -> Option<PokemonRecord> {
        if name.trim().is_empty() {
            self.report(StatusMessage::error("Please enter a Pokémon name"));
            return None;
        }

        let _busy = BusyGuard::enter(self);
        match self.service.get(name).await {
            Ok(record) => {
                self.report(StatusMessage::success(format!(
                    "{} saved successfully!",
                    capitalize(&record.name)
                )));
                Some(record)
            }
            Err(e) => {
                self.report(StatusMessage::error(format!("Error: {e}")));
                None
            }
        }
    }

    /// Read-through lookup for callers that handle absence themselves.
    pub async fn get_pokemon(&self, name: &str) -> Option<PokemonRecord> {
        let _busy = BusyGuard::enter(self);
        match self.service.get(name).await {
            Ok(record) => Some(record),
            Err(e) => {
                self.report(StatusMessage::error(format!("Error fetching Pokémon: {e}")));
                None
            }
        }
    }

    /// Substring search over cached names. A blank query clears the results.
    pub async fn search_local(&self, query: &str) -> Vec<PokemonRecord> {
        let query = query.trim();
        if query.is_empty() {
            self.search_results.send_replace(Vec::new());
            return Vec::new();
        }

        let hits = match self.service.search_local(query).next().await {
            Some(Ok(hits)) => hits,
            Some(Err(e)) => {
                self.report(StatusMessage::error(format!("Error: {e}")));
                Vec::new()
            }
            None => Vec::new(),
        };
        self.search_results.send_replace(hits.clone());
        hits
    }

    /// Populate the cache with the starter set.
    pub async fn load_initial(&self) -> Vec<PokemonRecord> {
        let _busy = BusyGuard::enter(self);
        let saved = self.service.fetch_many(&INITIAL_POKEMON).await;
        self.report(StatusMessage::success("Initial Pokémon load completed."));
        saved
    }

    /// Species data, or `None` if the lookup failed.
    pub async fn species_details(&self, name: &str) -> Option<PokemonSpecies> {
        self.service.species_details(name).await.ok()
    }

    /// Evolution chain, or `None` if the lookup failed.
    pub async fn evolution_chain(&self, id: i64) -> Option<EvolutionChain> {
        self.service.evolution_chain(id).await.ok()
    }

    /// Assemble the detail view for a cached record.
    ///
    /// Remote failures degrade to fallback text rather than errors.
    pub async fn load_detail(&self, record: &PokemonRecord) -> PokemonDetail {
        let _busy = BusyGuard::enter(self);
        let view = self.service.view(record);
        let species = self.species_details(&record.name).await;

        let description = species
            .as_ref()
            .and_then(PokemonSpecies::english_flavor_text)
            .unwrap_or_else(|| DESCRIPTION_UNAVAILABLE.to_string());

        let evolution = match species.as_ref().and_then(PokemonSpecies::evolution_chain_url) {
            None => EVOLUTION_URL_MISSING.to_string(),
            Some(url) => match chain_id_from_url(url) {
                None => EVOLUTION_ID_INVALID.to_string(),
                Some(id) => self
                    .evolution_chain(id)
                    .await
                    .map_or_else(|| EVOLUTION_UNAVAILABLE.to_string(), |chain| {
                        render_evolution_chain(&chain)
                    }),
            },
        };

        PokemonDetail {
            record: record.clone(),
            view,
            description,
            evolution,
        }
    }
}
