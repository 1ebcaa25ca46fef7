//! Fetch orchestration for the product list.
//!
//! [`FetchOrchestrator::resolve`] rebuilds the query from the filter state
//! and hands out a [`FetchTicket`] only when the query differs from the last
//! one resolved. Tickets carry a monotonically increasing sequence number.
//! [`FetchOrchestrator::complete`] applies a response only if its sequence
//! number is the latest issued, so a slow earlier request can never overwrite
//! the result of a newer one.

use catalog_client::ClientError;
use catalog_core::{build_query, FilterState, Product, ProductQuery};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    /// Nothing resolved yet.
    Idle,
    Loading,
    Settled,
    Failed,
}

/// Permission to issue one `/products` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub query: ProductQuery,
}

/// Result of the request issued for a ticket.
#[derive(Debug)]
pub struct FetchOutcome {
    pub seq: u64,
    pub result: Result<Vec<Product>, ClientError>,
}

#[derive(Debug)]
pub struct FetchOrchestrator {
    status: FetchStatus,
    products: Vec<Product>,
    last_resolved: Option<ProductQuery>,
    latest_seq: u64,
}

impl Default for FetchOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchOrchestrator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            status: FetchStatus::Idle,
            products: Vec::new(),
            last_resolved: None,
            latest_seq: 0,
        }
    }

    #[must_use]
    pub fn status(&self) -> FetchStatus {
        self.status
    }

    /// `true` until the latest request has settled or failed.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.status, FetchStatus::Idle | FetchStatus::Loading)
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn last_resolved(&self) -> Option<&ProductQuery> {
        self.last_resolved.as_ref()
    }

    /// Recomputes the query and returns a ticket if it changed.
    pub fn resolve(&mut self, filters: &FilterState) -> Option<FetchTicket> {
        let query = build_query(filters);
        if self.last_resolved.as_ref() == Some(&query) {
            return None;
        }

        self.latest_seq += 1;
        self.status = FetchStatus::Loading;
        self.last_resolved = Some(query.clone());
        tracing::debug!(seq = self.latest_seq, query = %query, "resolved query changed");

        Some(FetchTicket {
            seq: self.latest_seq,
            query,
        })
    }

    /// Applies a response. Returns `false` if it was superseded.
    pub fn complete(&mut self, outcome: FetchOutcome) -> bool {
        if outcome.seq != self.latest_seq {
            tracing::debug!(
                seq = outcome.seq,
                latest = self.latest_seq,
                "discarding superseded product response"
            );
            return false;
        }

        match outcome.result {
            Ok(products) => {
                tracing::debug!(seq = outcome.seq, count = products.len(), "products loaded");
                self.products = products;
                self.status = FetchStatus::Settled;
            }
            Err(e) => {
                tracing::warn!(seq = outcome.seq, error = %e, "failed to fetch products");
                self.status = FetchStatus::Failed;
            }
        }
        true
    }
}
