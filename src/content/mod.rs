//! Mock content and the search sources built on it.

mod catalog;
mod directory;
mod source;

pub use catalog::{
	Activity, ActivityStatus, Article, Catalog, Division, Member, PublishStatus,
};
pub use directory::{MockDirectory, SIMULATED_LATENCY};
pub use source::{CatalogSource, SourceKind};
