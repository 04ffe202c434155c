use std::thread;
use std::time::Duration;

use crate::overlay::{Category, ContentKind, LookupError, SearchHit, SearchSource};
use crate::router::Route;

/// Latency the mock directory simulates per lookup.
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(300);

/// The fixed four-entry search directory used in place of a search backend.
///
/// Every lookup sleeps for the configured latency, then returns entries whose
/// title or subtitle contains the query. The category is ignored here.
#[derive(Debug, Clone)]
pub struct MockDirectory {
	entries: Vec<SearchHit>,
	latency: Duration,
	failure: Option<String>,
}

impl MockDirectory {
	#[must_use]
	pub fn new() -> Self {
		Self {
			entries: default_entries(),
			latency: SIMULATED_LATENCY,
			failure: None,
		}
	}

	#[must_use]
	pub fn with_latency(mut self, latency: Duration) -> Self {
		self.latency = latency;
		self
	}

	/// Make every lookup fail with `reason`.
	#[must_use]
	pub fn failing(mut self, reason: impl Into<String>) -> Self {
		self.failure = Some(reason.into());
		self
	}

	#[must_use]
	pub fn entries(&self) -> &[SearchHit] {
		&self.entries
	}
}

impl Default for MockDirectory {
	fn default() -> Self {
		Self::new()
	}
}

impl SearchSource for MockDirectory {
	fn search(&self, query: &str, _category: Category) -> Result<Vec<SearchHit>, LookupError> {
		if !self.latency.is_zero() {
			thread::sleep(self.latency);
		}
		if let Some(reason) = &self.failure {
			return Err(LookupError::Unavailable(reason.clone()));
		}

		let needle = query.trim().to_lowercase();
		if needle.is_empty() {
			return Ok(Vec::new());
		}
		Ok(self
			.entries
			.iter()
			.filter(|entry| entry.matches_text(&needle))
			.cloned()
			.collect())
	}
}

fn default_entries() -> Vec<SearchHit> {
	vec![
		SearchHit::new(
			"1",
			ContentKind::Article,
			"Pendaftaran Beasiswa Prestasi 2024 Dibuka",
			"Artikel · keputusan rapat pengurus",
			Route::List(ContentKind::Article).path(),
		),
		SearchHit::new(
			"2",
			ContentKind::Activity,
			"Rapat Kerja Pengurus Periode 2024",
			"Kegiatan · 12 Februari 2024",
			Route::List(ContentKind::Activity).path(),
		),
		SearchHit::new(
			"3",
			ContentKind::Member,
			"Ahmad Fauzi",
			"Anggota · Divisi Hubungan Masyarakat",
			Route::List(ContentKind::Member).path(),
		),
		SearchHit::new(
			"4",
			ContentKind::Division,
			"Divisi Hubungan Masyarakat",
			"Divisi · 12 anggota",
			Route::List(ContentKind::Division).path(),
		),
	]
}

#[cfg(test)]
mod tests {
	use super::*;

	fn directory() -> MockDirectory {
		MockDirectory::new().with_latency(Duration::ZERO)
	}

	#[test]
	fn raw_lookup_ignores_category() {
		let hits = directory().search("rapat", Category::Activity).unwrap();
		let kinds: Vec<ContentKind> = hits.iter().map(|hit| hit.kind).collect();
		assert_eq!(kinds, vec![ContentKind::Article, ContentKind::Activity]);
	}

	#[test]
	fn matching_is_case_insensitive_and_trims() {
		let hits = directory().search("  BEASISWA ", Category::All).unwrap();
		assert_eq!(hits.len(), 1);
		assert_eq!(hits[0].kind, ContentKind::Article);
		assert!(directory().search("   ", Category::All).unwrap().is_empty());
	}

	#[test]
	fn failing_directory_reports_unavailable() {
		let err = directory()
			.failing("jaringan terputus")
			.search("rapat", Category::All)
			.unwrap_err();
		assert_eq!(err, LookupError::Unavailable("jaringan terputus".into()));
	}
}
