//! Indonesian-locale formatting for dates, counts and display text.

use chrono::{Datelike, NaiveDate};
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

const MONTHS: [&str; 12] = [
	"Januari",
	"Februari",
	"Maret",
	"April",
	"Mei",
	"Juni",
	"Juli",
	"Agustus",
	"September",
	"Oktober",
	"November",
	"Desember",
];

const MONTHS_SHORT: [&str; 12] = [
	"Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

const WEEKDAYS: [&str; 7] = [
	"Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu", "Minggu",
];

/// `18 Oktober 2026`
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
	format!("{} {} {}", date.day(), MONTHS[date.month0() as usize], date.year())
}

/// `18 Okt 2026`
#[must_use]
pub fn format_date_short(date: NaiveDate) -> String {
	format!(
		"{} {} {}",
		date.day(),
		MONTHS_SHORT[date.month0() as usize],
		date.year()
	)
}

/// `Minggu, 18 Oktober 2026`
#[must_use]
pub fn format_weekday_date(date: NaiveDate) -> String {
	let weekday = WEEKDAYS[date.weekday().num_days_from_monday() as usize];
	format!("{weekday}, {}", format_date(date))
}

/// Distance from `today` in words: `hari ini`, `kemarin`, `3 hari lalu`,
/// `dalam 2 hari`.
#[must_use]
pub fn format_relative(date: NaiveDate, today: NaiveDate) -> String {
	match (date - today).num_days() {
		0 => "hari ini".to_string(),
		-1 => "kemarin".to_string(),
		1 => "besok".to_string(),
		days if days < 0 => format!("{} hari lalu", -days),
		days => format!("dalam {days} hari"),
	}
}

/// Group thousands with `.` as the Indonesian locale does.
#[must_use]
pub fn format_number(value: u64) -> String {
	let digits = value.to_string();
	let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
	for (index, ch) in digits.chars().enumerate() {
		if index > 0 && (digits.len() - index) % 3 == 0 {
			grouped.push('.');
		}
		grouped.push(ch);
	}
	grouped
}

/// `12 anggota`. Indonesian nouns take no plural suffix.
#[must_use]
pub fn count_label(count: usize, noun: &str) -> String {
	format!("{} {noun}", format_number(count as u64))
}

/// Cut `text` to at most `width` columns, ending with `…` when shortened.
#[must_use]
pub fn truncate_text(text: &str, width: usize) -> String {
	if text.width() <= width {
		return text.to_string();
	}
	if width == 0 {
		return String::new();
	}
	let (head, _) = text.unicode_truncate(width - 1);
	format!("{}…", head.trim_end())
}

/// Up to two uppercase initials from a person's name.
#[must_use]
pub fn initials(name: &str) -> String {
	name.split_whitespace()
		.filter_map(|word| word.chars().next())
		.take(2)
		.flat_map(char::to_uppercase)
		.collect()
}
