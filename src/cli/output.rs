use anyhow::Result;
use hima_admin::SearchHit;
use serde_json::json;

/// Print one hit per line: kind, title, subtitle and destination.
pub(crate) fn print_plain(query: &str, hits: &[SearchHit]) {
	if hits.is_empty() {
		println!("Tidak ada hasil untuk \"{query}\"");
		return;
	}

	for hit in hits {
		println!(
			"{}\t{}\t{}\t{}",
			hit.kind.label(),
			hit.title,
			hit.subtitle,
			hit.destination
		);
	}
}

/// Format the hits as a JSON document.
pub(crate) fn format_hits_json(query: &str, hits: &[SearchHit]) -> Result<String> {
	let payload = json!({
		"query": query,
		"count": hits.len(),
		"results": hits,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the hits.
pub(crate) fn print_json(query: &str, hits: &[SearchHit]) -> Result<()> {
	println!("{}", format_hits_json(query, hits)?);
	Ok(())
}
