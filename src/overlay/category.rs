use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The content types a search hit can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
	Article,
	Activity,
	Member,
	Division,
}

impl ContentKind {
	/// Every kind in display order.
	pub const ALL: [ContentKind; 4] = [
		ContentKind::Article,
		ContentKind::Activity,
		ContentKind::Member,
		ContentKind::Division,
	];

	/// Stable identifier used in configuration and JSON output.
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			ContentKind::Article => "article",
			ContentKind::Activity => "activity",
			ContentKind::Member => "member",
			ContentKind::Division => "division",
		}
	}

	/// Human readable label.
	#[must_use]
	pub fn label(self) -> &'static str {
		Category::from(self).label()
	}
}

impl fmt::Display for ContentKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Filter tag narrowing search results to one content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
	#[default]
	All,
	Article,
	Activity,
	Member,
	Division,
}

impl Category {
	/// Categories in the order the filter tabs show them.
	pub const TABS: [Category; 5] = [
		Category::All,
		Category::Article,
		Category::Activity,
		Category::Member,
		Category::Division,
	];

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Category::All => "all",
			Category::Article => "article",
			Category::Activity => "activity",
			Category::Member => "member",
			Category::Division => "division",
		}
	}

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Category::All => "Semua",
			Category::Article => "Artikel",
			Category::Activity => "Kegiatan",
			Category::Member => "Anggota",
			Category::Division => "Divisi",
		}
	}

	/// The content kind this category narrows to, `None` for [`Category::All`].
	#[must_use]
	pub fn kind(self) -> Option<ContentKind> {
		match self {
			Category::All => None,
			Category::Article => Some(ContentKind::Article),
			Category::Activity => Some(ContentKind::Activity),
			Category::Member => Some(ContentKind::Member),
			Category::Division => Some(ContentKind::Division),
		}
	}

	/// Whether an entry of `kind` passes this filter.
	#[must_use]
	pub fn admits(self, kind: ContentKind) -> bool {
		self.kind().is_none_or(|wanted| wanted == kind)
	}

	/// Position of the category in [`Category::TABS`].
	#[must_use]
	pub fn index(self) -> usize {
		Self::TABS
			.iter()
			.position(|category| *category == self)
			.unwrap_or(0)
	}

	/// The category at `index`, wrapping around.
	#[must_use]
	pub fn from_index(index: usize) -> Self {
		Self::TABS[index % Self::TABS.len()]
	}

	#[must_use]
	pub fn next(self) -> Self {
		Self::from_index(self.index() + 1)
	}

	#[must_use]
	pub fn previous(self) -> Self {
		Self::from_index(self.index() + Self::TABS.len() - 1)
	}

	/// Labels of every tab, in order.
	#[must_use]
	pub fn tab_labels() -> [&'static str; 5] {
		Self::TABS.map(Category::label)
	}
}

impl From<ContentKind> for Category {
	fn from(kind: ContentKind) -> Self {
		match kind {
			ContentKind::Article => Category::Article,
			ContentKind::Activity => Category::Activity,
			ContentKind::Member => Category::Member,
			ContentKind::Division => Category::Division,
		}
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Category {
	type Err = String;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let value = value.trim();
		Self::TABS
			.into_iter()
			.find(|category| category.as_str().eq_ignore_ascii_case(value))
			.ok_or_else(|| format!("unknown category `{value}`"))
	}
}

/// A navigable search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
	pub id: String,
	#[serde(rename = "type")]
	pub kind: ContentKind,
	pub title: String,
	pub subtitle: String,
	pub destination: String,
}

impl SearchHit {
	pub fn new(
		id: impl Into<String>,
		kind: ContentKind,
		title: impl Into<String>,
		subtitle: impl Into<String>,
		destination: impl Into<String>,
	) -> Self {
		Self {
			id: id.into(),
			kind,
			title: title.into(),
			subtitle: subtitle.into(),
			destination: destination.into(),
		}
	}

	/// Case-insensitive substring match against title and subtitle.
	#[must_use]
	pub fn matches_text(&self, needle_lowercase: &str) -> bool {
		self.title.to_lowercase().contains(needle_lowercase)
			|| self.subtitle.to_lowercase().contains(needle_lowercase)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn all_admits_every_kind_and_tags_admit_their_own() {
		for kind in ContentKind::ALL {
			assert!(Category::All.admits(kind));
			assert!(Category::from(kind).admits(kind));
		}
		assert!(!Category::Activity.admits(ContentKind::Article));
	}

	#[test]
	fn tab_cycling_wraps_both_ways() {
		assert_eq!(Category::Division.next(), Category::All);
		assert_eq!(Category::All.previous(), Category::Division);
		assert_eq!(Category::Article.next(), Category::Activity);
	}

	#[test]
	fn categories_parse_case_insensitively() {
		assert_eq!("Activity".parse::<Category>(), Ok(Category::Activity));
		assert_eq!(" all ".parse::<Category>(), Ok(Category::All));
		assert!("event".parse::<Category>().is_err());
	}

	#[test]
	fn hits_serialize_kind_as_type() {
		let hit = SearchHit::new("a1", ContentKind::Article, "Judul", "Sub", "/admin/articles");
		let value = serde_json::to_value(&hit).unwrap();
		assert_eq!(value["type"], "article");
	}
}
