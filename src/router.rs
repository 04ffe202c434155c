//! Admin routes and the in-process router that acts as the overlay's
//! navigation collaborator.

use std::collections::VecDeque;
use std::fmt;

use log::info;

use crate::overlay::{ContentKind, Navigator};

/// Prefix shared by every admin path.
pub const ADMIN_ROOT: &str = "/admin";

/// Most routes kept on the back stack; older entries are dropped first.
pub const HISTORY_LIMIT: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
	Dashboard,
	List(ContentKind),
	Detail(ContentKind, u32),
	NotFound(String),
}

impl Route {
	/// Parse an absolute path. Unknown paths become [`Route::NotFound`].
	#[must_use]
	pub fn parse(path: &str) -> Self {
		let trimmed = path.trim().trim_end_matches('/');
		let rest = match trimmed.strip_prefix(ADMIN_ROOT) {
			Some(rest) => rest,
			None if trimmed.is_empty() => "",
			None => return Route::NotFound(path.trim().to_string()),
		};

		let segments: Vec<&str> = rest.split('/').filter(|segment| !segment.is_empty()).collect();
		match segments.as_slice() {
			[] => Route::Dashboard,
			[section] => match kind_for_segment(section) {
				Some(kind) => Route::List(kind),
				None => Route::NotFound(path.trim().to_string()),
			},
			[section, id] => match (kind_for_segment(section), id.parse::<u32>()) {
				(Some(kind), Ok(id)) => Route::Detail(kind, id),
				_ => Route::NotFound(path.trim().to_string()),
			},
			_ => Route::NotFound(path.trim().to_string()),
		}
	}

	#[must_use]
	pub fn path(&self) -> String {
		match self {
			Route::Dashboard => ADMIN_ROOT.to_string(),
			Route::List(kind) => format!("{ADMIN_ROOT}/{}", segment_for_kind(*kind)),
			Route::Detail(kind, id) => format!("{ADMIN_ROOT}/{}/{id}", segment_for_kind(*kind)),
			Route::NotFound(path) => path.clone(),
		}
	}

	/// Heading shown above the page.
	#[must_use]
	pub fn title(&self) -> String {
		match self {
			Route::Dashboard => "Dasbor".to_string(),
			Route::List(kind) => section_title(*kind).to_string(),
			Route::Detail(kind, id) => format!("{} #{id}", section_title(*kind)),
			Route::NotFound(_) => "Halaman tidak ditemukan".to_string(),
		}
	}

	/// The list a detail page belongs to.
	#[must_use]
	pub fn parent(&self) -> Option<Route> {
		match self {
			Route::Detail(kind, _) => Some(Route::List(*kind)),
			Route::List(_) | Route::NotFound(_) => Some(Route::Dashboard),
			Route::Dashboard => None,
		}
	}
}

impl fmt::Display for Route {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.path())
	}
}

fn segment_for_kind(kind: ContentKind) -> &'static str {
	match kind {
		ContentKind::Article => "articles",
		ContentKind::Activity => "activities",
		ContentKind::Member => "members",
		ContentKind::Division => "divisions",
	}
}

fn kind_for_segment(segment: &str) -> Option<ContentKind> {
	ContentKind::ALL
		.into_iter()
		.find(|kind| segment_for_kind(*kind) == segment)
}

fn section_title(kind: ContentKind) -> &'static str {
	match kind {
		ContentKind::Article => "Artikel",
		ContentKind::Activity => "Kegiatan",
		ContentKind::Member => "Anggota",
		ContentKind::Division => "Divisi",
	}
}

/// Current route plus a back stack.
#[derive(Debug, Clone)]
pub struct Router {
	current: Route,
	history: VecDeque<Route>,
}

impl Router {
	#[must_use]
	pub fn new(start: Route) -> Self {
		Self {
			current: start,
			history: VecDeque::new(),
		}
	}

	#[must_use]
	pub fn current(&self) -> &Route {
		&self.current
	}

	/// Make `route` current, remembering the previous one.
	pub fn push(&mut self, route: Route) {
		if route == self.current {
			return;
		}
		info!("navigate {} -> {}", self.current, route);
		let previous = std::mem::replace(&mut self.current, route);
		if self.history.len() == HISTORY_LIMIT {
			self.history.pop_front();
		}
		self.history.push_back(previous);
	}

	/// Return to the previous route. Falls back to the parent route when the
	/// history is empty.
	pub fn back(&mut self) -> bool {
		let target = match self.history.pop_back() {
			Some(route) => route,
			None => match self.current.parent() {
				Some(parent) => parent,
				None => return false,
			},
		};
		info!("back {} -> {}", self.current, target);
		self.current = target;
		true
	}

	#[must_use]
	pub fn history_len(&self) -> usize {
		self.history.len()
	}
}

impl Default for Router {
	fn default() -> Self {
		Self::new(Route::Dashboard)
	}
}

impl Navigator for Router {
	fn navigate_to(&mut self, path: &str) {
		self.push(Route::parse(path));
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn paths_round_trip_through_parse() {
		for route in [
			Route::Dashboard,
			Route::List(ContentKind::Article),
			Route::Detail(ContentKind::Member, 7),
		] {
			assert_eq!(Route::parse(&route.path()), route);
		}
	}

	#[test]
	fn parse_tolerates_trailing_slashes_and_rejects_unknowns() {
		assert_eq!(Route::parse("/admin/"), Route::Dashboard);
		assert_eq!(
			Route::parse("/admin/activities/"),
			Route::List(ContentKind::Activity)
		);
		assert!(matches!(Route::parse("/admin/events"), Route::NotFound(_)));
		assert!(matches!(Route::parse("/admin/members/x"), Route::NotFound(_)));
		assert!(matches!(Route::parse("/login"), Route::NotFound(_)));
	}

	#[test]
	fn navigation_records_history_and_back_unwinds_it() {
		let mut router = Router::default();
		router.navigate_to("/admin/articles");
		router.navigate_to("/admin/articles/2");
		router.navigate_to("/admin/articles/2");
		assert_eq!(router.history_len(), 2);

		assert!(router.back());
		assert_eq!(router.current(), &Route::List(ContentKind::Article));
		assert!(router.back());
		assert_eq!(router.current(), &Route::Dashboard);
		assert!(!router.back());
	}

	#[test]
	fn history_keeps_only_the_most_recent_routes() {
		let mut router = Router::default();
		for id in 1..=(HISTORY_LIMIT as u32 + 10) {
			router.navigate_to(&format!("/admin/members/{id}"));
		}
		assert_eq!(router.history_len(), HISTORY_LIMIT);

		for _ in 0..HISTORY_LIMIT {
			assert!(router.back());
		}
		assert_eq!(router.current(), &Route::Detail(ContentKind::Member, 10));
		assert!(router.back());
		assert_eq!(router.current(), &Route::List(ContentKind::Member));
	}

	#[test]
	fn back_without_history_goes_to_parent() {
		let mut router = Router::new(Route::Detail(ContentKind::Division, 1));
		assert!(router.back());
		assert_eq!(router.current(), &Route::List(ContentKind::Division));
	}
}
