//! The browser event loop.
//!
//! Everything runs on one task. [`CatalogBrowser::run`] selects over user
//! commands, debounce settle messages, the startup category fetch, and the
//! set of in-flight product fetches. After every event it re-resolves the
//! query (issuing a fetch if it changed) and writes a new frame if the
//! rendered output differs from the last one.

use std::future::Future;
use std::io::Write;
use std::time::Duration;

use catalog_core::{FilterState, ALL_CATEGORIES};
use futures::stream::{FuturesUnordered, StreamExt};
use tokio::sync::mpsc;

use crate::categories::CategoryList;
use crate::command::Command;
use crate::debounce::Debouncer;
use crate::error::BrowserError;
use crate::orchestrator::{FetchOrchestrator, FetchOutcome, FetchTicket};
use crate::render::{render, View};
use crate::source::CatalogSource;

pub struct CatalogBrowser {
    filters: FilterState,
    categories: CategoryList,
    orchestrator: FetchOrchestrator,
    search_debounce: Duration,
}

impl CatalogBrowser {
    #[must_use]
    pub fn new(search_debounce: Duration) -> Self {
        Self {
            filters: FilterState::default(),
            categories: CategoryList::default(),
            orchestrator: FetchOrchestrator::new(),
            search_debounce,
        }
    }

    /// Starts from the given filters instead of the defaults. The initial
    /// search term is used as-is, without waiting for the debounce. The
    /// initial category is checked once the category list loads.
    #[must_use]
    pub fn with_filters(mut self, mut filters: FilterState) -> Self {
        filters.debounced_search_term = filters.search_term.clone();
        self.filters = filters;
        self
    }

    #[must_use]
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    #[must_use]
    pub fn categories(&self) -> &CategoryList {
        &self.categories
    }

    #[must_use]
    pub fn orchestrator(&self) -> &FetchOrchestrator {
        &self.orchestrator
    }

    /// Renders the current state.
    #[must_use]
    pub fn frame(&self) -> String {
        render(&View {
            loading: self.orchestrator.is_loading(),
            products: self.orchestrator.products(),
            filters: &self.filters,
            categories: self.categories.options(),
        })
    }

    /// Runs until `Quit` arrives or the command channel closes, then returns
    /// the final state. In-flight fetches are dropped on exit and the
    /// pending debounce timer is aborted.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::Io`] if a frame cannot be written to `out`.
    /// Fetch failures are logged, never returned.
    pub async fn run<S, W>(
        mut self,
        source: &S,
        mut commands: mpsc::Receiver<Command>,
        out: &mut W,
    ) -> Result<Self, BrowserError>
    where
        S: CatalogSource,
        W: Write,
    {
        let (settle_tx, mut settle_rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(self.search_debounce, settle_tx);
        let mut in_flight = FuturesUnordered::new();
        let categories = source.categories();
        tokio::pin!(categories);
        let mut categories_pending = true;
        let mut last_frame = String::new();

        tracing::info!("catalog browser started");

        loop {
            if let Some(ticket) = self.orchestrator.resolve(&self.filters) {
                in_flight.push(fetch_products(source, ticket));
            }
            self.write_frame_if_changed(out, &mut last_frame)?;

            tokio::select! {
                command = commands.recv() => match command {
                    Some(Command::Quit) | None => break,
                    Some(Command::Show) => last_frame.clear(),
                    Some(command) => self.apply(command, &mut debouncer),
                },
                Some(settled) = settle_rx.recv() => {
                    if let Some(term) = debouncer.accept(settled) {
                        self.filters.set_debounced_search_term(term);
                    }
                }
                result = &mut categories, if categories_pending => {
                    categories_pending = false;
                    self.categories.load(result);
                    self.reset_unknown_category();
                }
                Some(outcome) = in_flight.next() => {
                    self.orchestrator.complete(outcome);
                }
            }
        }

        debouncer.cancel();
        tracing::info!(abandoned_fetches = in_flight.len(), "catalog browser stopped");
        Ok(self)
    }

    fn apply(&mut self, command: Command, debouncer: &mut Debouncer) {
        match command {
            Command::Search(term) => {
                if self.filters.set_search_term(term.clone()) {
                    debouncer.push(term);
                }
            }
            Command::Category(category) => {
                if self.categories.accepts(&category) {
                    self.filters.set_selected_category(category);
                } else {
                    tracing::warn!(
                        %category,
                        options = ?self.categories.options(),
                        "ignoring unknown category"
                    );
                }
            }
            Command::MinPrice(value) => {
                self.filters.set_min_price(value);
            }
            Command::MaxPrice(value) => {
                self.filters.set_max_price(value);
            }
            Command::Sort(option) => {
                self.filters.set_sort_option(option);
            }
            Command::Show | Command::Quit => {}
        }
    }

    /// Falls back to "All" when the selected category is not among the
    /// loaded options, e.g. an initial `--category` the server doesn't know.
    fn reset_unknown_category(&mut self) {
        if self.categories.accepts(&self.filters.selected_category) {
            return;
        }
        tracing::warn!(
            category = %self.filters.selected_category,
            options = ?self.categories.options(),
            "selected category not offered by the server; using All"
        );
        self.filters.set_selected_category(ALL_CATEGORIES);
    }

    fn write_frame_if_changed<W: Write>(
        &self,
        out: &mut W,
        last_frame: &mut String,
    ) -> Result<(), BrowserError> {
        let frame = self.frame();
        if frame != *last_frame {
            out.write_all(frame.as_bytes())?;
            out.flush()?;
            *last_frame = frame;
        }
        Ok(())
    }
}

fn fetch_products<'a, S>(source: &'a S, ticket: FetchTicket) -> impl Future<Output = FetchOutcome> + 'a
where
    S: CatalogSource + 'a,
{
    async move {
        tracing::debug!(seq = ticket.seq, query = %ticket.query, "fetching products");
        let result = source.products(&ticket.query).await;
        FetchOutcome {
            seq: ticket.seq,
            result,
        }
    }
}
