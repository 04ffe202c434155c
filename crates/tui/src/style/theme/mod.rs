mod builtins;
mod types;

pub use types::{Theme, ThemeDefinition};

/// Return the theme used when no name is configured.
#[must_use]
pub fn default_theme() -> Theme {
	builtins::DEFAULT.theme
}

/// Return the built-in themes bundled with the console.
#[must_use]
pub fn builtin_themes() -> &'static [ThemeDefinition] {
	builtins::ALL
}

/// Look up a built-in theme by name or alias, ignoring ASCII case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let name = name.trim();
	builtins::ALL
		.iter()
		.find(|definition| definition.matches(name))
		.map(|definition| definition.theme)
}

/// Return the canonical names of every built-in theme.
#[must_use]
pub fn names() -> Vec<&'static str> {
	builtins::ALL.iter().map(|definition| definition.name).collect()
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_accepts_aliases_and_case() {
		assert!(by_name("Slate").is_some());
		assert!(by_name("dark").is_some());
		assert!(by_name(" light ").is_some());
		assert!(by_name("neon").is_none());
	}

	#[test]
	fn names_list_canonical_entries_once() {
		let names = names();
		assert_eq!(names, vec!["default", "light", "slate"]);
	}
}
