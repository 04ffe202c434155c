//! Seams between the overlay controller and the outside world.
//!
//! The controller never talks to a data store, a router or a terminal
//! directly. It is handed implementations of these traits instead.

use std::sync::Arc;

use thiserror::Error;

use super::category::{Category, SearchHit};

/// Failure reported by a [`SearchSource`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
	#[error("search source unavailable: {0}")]
	Unavailable(String),
	#[error("search source rejected query `{query}`: {reason}")]
	Rejected { query: String, reason: String },
}

/// Asynchronous data source queried by the overlay.
///
/// Implementations run on the overlay's lookup worker thread, so blocking
/// (including simulated latency) is fine.
pub trait SearchSource: Send + Sync {
	/// Return candidate hits for `query`. Implementations may ignore
	/// `category`; the controller applies the filter again.
	fn search(&self, query: &str, category: Category) -> Result<Vec<SearchHit>, LookupError>;
}

impl<T: SearchSource + ?Sized> SearchSource for Arc<T> {
	fn search(&self, query: &str, category: Category) -> Result<Vec<SearchHit>, LookupError> {
		(**self).search(query, category)
	}
}

/// Fire-and-forget navigation.
pub trait Navigator {
	fn navigate_to(&mut self, path: &str);
}

/// Best-effort keyboard focus on the search input.
pub trait FocusTarget {
	fn focus(&mut self);
	fn blur(&mut self);
	fn has_focus(&self) -> bool;
}

/// Focus target for contexts without an input element.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoFocus;

impl FocusTarget for NoFocus {
	fn focus(&mut self) {}

	fn blur(&mut self) {}

	fn has_focus(&self) -> bool {
		false
	}
}

impl FocusTarget for hima_tui::QueryInput {
	fn focus(&mut self) {
		self.set_focused(true);
	}

	fn blur(&mut self) {
		self.set_focused(false);
	}

	fn has_focus(&self) -> bool {
		self.is_focused()
	}
}
