use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use super::catalog::Catalog;
use super::directory::MockDirectory;
use crate::overlay::{Category, LookupError, SearchHit, SearchSource};

/// Searches the full [`Catalog`], linking hits to detail pages.
#[derive(Debug, Clone)]
pub struct CatalogSource {
	catalog: Catalog,
	latency: Duration,
}

impl CatalogSource {
	#[must_use]
	pub fn new(catalog: Catalog, latency: Duration) -> Self {
		Self { catalog, latency }
	}
}

impl SearchSource for CatalogSource {
	fn search(&self, query: &str, category: Category) -> Result<Vec<SearchHit>, LookupError> {
		if !self.latency.is_zero() {
			thread::sleep(self.latency);
		}
		Ok(self.catalog.search(query, category))
	}
}

/// Which data source backs the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceKind {
	/// The four-entry [`MockDirectory`].
	#[default]
	Mock,
	/// The whole sample [`Catalog`].
	Catalog,
}

impl SourceKind {
	pub const ALL: [SourceKind; 2] = [SourceKind::Mock, SourceKind::Catalog];

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			SourceKind::Mock => "mock",
			SourceKind::Catalog => "catalog",
		}
	}

	/// Build the source with the given simulated latency.
	#[must_use]
	pub fn build(self, latency: Duration) -> Arc<dyn SearchSource> {
		match self {
			SourceKind::Mock => Arc::new(MockDirectory::new().with_latency(latency)),
			SourceKind::Catalog => Arc::new(CatalogSource::new(Catalog::sample(), latency)),
		}
	}
}

impl fmt::Display for SourceKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for SourceKind {
	type Err = String;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let value = value.trim();
		Self::ALL
			.into_iter()
			.find(|kind| kind.as_str().eq_ignore_ascii_case(value))
			.ok_or_else(|| format!("unknown search source `{value}`"))
	}
}
