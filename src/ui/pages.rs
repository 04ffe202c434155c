//! Page content for each route, built from the catalog.

use chrono::NaiveDate;
use hima_tui::components::{CARD_HEIGHT, render_card, render_card_list, render_stat_row};
use hima_tui::{Card, StatCard, Theme};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};

use crate::content::{Activity, Article, Catalog, Division, Member};
use crate::format::{
	count_label, format_date, format_date_short, format_number, format_relative,
	format_weekday_date, initials,
};
use crate::overlay::ContentKind;
use crate::router::Route;

/// Number of articles listed on the dashboard.
const RECENT_ARTICLES: usize = 3;

pub(crate) enum Page {
	Dashboard {
		stats: Vec<StatCard>,
		recent: Vec<Card>,
	},
	List {
		cards: Vec<Card>,
	},
	Detail {
		card: Card,
		lines: Vec<String>,
	},
	Missing {
		path: String,
	},
}

pub(crate) fn build(catalog: &Catalog, route: &Route, today: NaiveDate) -> Page {
	match route {
		Route::Dashboard => Page::Dashboard {
			stats: ContentKind::ALL
				.into_iter()
				.map(|kind| StatCard {
					label: kind.label().to_string(),
					value: format_number(catalog.count(kind) as u64),
				})
				.collect(),
			recent: recent_articles(catalog)
				.into_iter()
				.map(article_card)
				.collect(),
		},
		Route::List(kind) => Page::List {
			cards: list_cards(catalog, *kind, today),
		},
		Route::Detail(kind, id) => {
			detail(catalog, *kind, *id, today).unwrap_or_else(|| Page::Missing {
				path: route.path(),
			})
		}
		Route::NotFound(path) => Page::Missing { path: path.clone() },
	}
}

/// Number of selectable entries on the page for `route`.
pub(crate) fn selectable_len(catalog: &Catalog, route: &Route) -> usize {
	match route {
		Route::Dashboard => recent_articles(catalog).len(),
		Route::List(kind) => catalog.count(*kind),
		Route::Detail(..) | Route::NotFound(_) => 0,
	}
}

/// Where `Enter` leads from the entry at `selection`.
pub(crate) fn target(catalog: &Catalog, route: &Route, selection: usize) -> Option<Route> {
	match route {
		Route::Dashboard => recent_articles(catalog)
			.get(selection)
			.map(|article| Route::Detail(ContentKind::Article, article.id)),
		Route::List(kind) => catalog
			.ids(*kind)
			.get(selection)
			.map(|id| Route::Detail(*kind, *id)),
		Route::Detail(..) | Route::NotFound(_) => None,
	}
}

pub(crate) fn render(frame: &mut Frame, area: Rect, page: &Page, selection: usize, theme: &Theme) {
	match page {
		Page::Dashboard { stats, recent } => {
			let layout = Layout::default()
				.direction(Direction::Vertical)
				.constraints([
					Constraint::Length(4),
					Constraint::Length(1),
					Constraint::Min(0),
				])
				.split(area);
			render_stat_row(frame, layout[0], stats, theme);
			frame.render_widget(
				Paragraph::new(Line::styled("Artikel terbaru", theme.header)),
				layout[1],
			);
			render_card_list(frame, layout[2], recent, selection, theme);
		}
		Page::List { cards } => {
			if cards.is_empty() {
				render_message(frame, area, "Belum ada data", theme);
			} else {
				render_card_list(frame, area, cards, selection, theme);
			}
		}
		Page::Detail { card, lines } => {
			let layout = Layout::default()
				.direction(Direction::Vertical)
				.constraints([Constraint::Length(CARD_HEIGHT), Constraint::Min(0)])
				.split(area);
			render_card(frame, layout[0], card, true, theme);
			let body: Vec<Line> = lines.iter().map(|line| Line::from(line.as_str())).collect();
			frame.render_widget(Paragraph::new(body).wrap(Wrap { trim: true }), layout[1]);
		}
		Page::Missing { path } => {
			render_message(frame, area, &format!("Halaman {path} tidak ditemukan"), theme);
		}
	}
}

fn render_message(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
	let paragraph = Paragraph::new(message.to_string())
		.alignment(Alignment::Center)
		.style(theme.empty);
	frame.render_widget(paragraph, area);
}

fn recent_articles(catalog: &Catalog) -> Vec<&Article> {
	let mut articles: Vec<&Article> = catalog.articles.iter().collect();
	articles.sort_by(|a, b| b.published.cmp(&a.published));
	articles.truncate(RECENT_ARTICLES);
	articles
}

fn list_cards(catalog: &Catalog, kind: ContentKind, today: NaiveDate) -> Vec<Card> {
	match kind {
		ContentKind::Article => catalog.articles.iter().map(article_card).collect(),
		ContentKind::Activity => catalog
			.activities
			.iter()
			.map(|activity| activity_card(activity, today))
			.collect(),
		ContentKind::Member => catalog
			.members
			.iter()
			.map(|member| member_card(catalog, member))
			.collect(),
		ContentKind::Division => catalog
			.divisions
			.iter()
			.map(|division| division_card(catalog, division))
			.collect(),
	}
}

fn article_card(article: &Article) -> Card {
	Card {
		title: article.title.clone(),
		meta: format!(
			"{} · {} · {}",
			article.topic,
			article.author,
			format_date(article.published)
		),
		body: article.summary.clone(),
		badge: Some(article.status.label().to_string()),
	}
}

fn activity_card(activity: &Activity, today: NaiveDate) -> Card {
	Card {
		title: activity.name.clone(),
		meta: format!(
			"{} · {} ({})",
			activity.location,
			format_weekday_date(activity.date),
			format_relative(activity.date, today)
		),
		body: activity.description.clone(),
		badge: Some(activity.status.label().to_string()),
	}
}

fn member_card(catalog: &Catalog, member: &Member) -> Card {
	Card {
		title: member.name.clone(),
		meta: format!("{} · NIM {}", member.role, member.student_id),
		body: format!(
			"{} · bergabung {}",
			catalog.division_name(member.division_id),
			format_date_short(member.joined)
		),
		badge: Some(initials(&member.name)),
	}
}

fn division_card(catalog: &Catalog, division: &Division) -> Card {
	Card {
		title: division.name.clone(),
		meta: count_label(catalog.members_of(division.id).count(), "anggota"),
		body: division.description.clone(),
		badge: None,
	}
}

fn detail(catalog: &Catalog, kind: ContentKind, id: u32, today: NaiveDate) -> Option<Page> {
	let page = match kind {
		ContentKind::Article => {
			let article = catalog.article(id)?;
			Page::Detail {
				card: article_card(article),
				lines: vec![
					format!("Penulis: {}", article.author),
					format!("Diterbitkan: {}", format_weekday_date(article.published)),
					format!("Status: {}", article.status.label()),
				],
			}
		}
		ContentKind::Activity => {
			let activity = catalog.activity(id)?;
			Page::Detail {
				card: activity_card(activity, today),
				lines: vec![
					format!("Tanggal: {}", format_weekday_date(activity.date)),
					format!("Lokasi: {}", activity.location),
					format!("Status: {}", activity.status.label()),
				],
			}
		}
		ContentKind::Member => {
			let member = catalog.member(id)?;
			Page::Detail {
				card: member_card(catalog, member),
				lines: vec![
					format!("Divisi: {}", catalog.division_name(member.division_id)),
					format!("Jabatan: {}", member.role),
					format!("Bergabung: {}", format_date(member.joined)),
				],
			}
		}
		ContentKind::Division => {
			let division = catalog.division(id)?;
			let mut lines = vec!["Anggota:".to_string()];
			lines.extend(
				catalog
					.members_of(division.id)
					.map(|member| format!("  {} ({})", member.name, member.role)),
			);
			Page::Detail {
				card: division_card(catalog, division),
				lines,
			}
		}
	};
	Some(page)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn today() -> NaiveDate {
		NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
	}

	#[test]
	fn dashboard_counts_every_kind() {
		let catalog = Catalog::sample();
		let Page::Dashboard { stats, recent } = build(&catalog, &Route::Dashboard, today()) else {
			panic!("expected dashboard");
		};
		let values: Vec<&str> = stats.iter().map(|stat| stat.value.as_str()).collect();
		assert_eq!(values, vec!["3", "3", "5", "3"]);
		assert_eq!(recent[0].title, "Panduan Pengajuan Proposal Kegiatan");
	}

	#[test]
	fn activity_cards_use_relative_dates() {
		let catalog = Catalog::sample();
		let route = Route::List(ContentKind::Activity);
		let Page::List { cards } = build(&catalog, &route, today()) else {
			panic!("expected list");
		};
		assert!(cards[1].meta.contains("3 hari lalu"), "{}", cards[1].meta);
	}

	#[test]
	fn division_detail_lists_members() {
		let catalog = Catalog::sample();
		let route = Route::Detail(ContentKind::Division, 1);
		let Page::Detail { card, lines } = build(&catalog, &route, today()) else {
			panic!("expected detail");
		};
		assert_eq!(card.meta, "2 anggota");
		assert!(lines.iter().any(|line| line.contains("Budi Santoso")));
	}

	#[test]
	fn unknown_detail_is_missing() {
		let catalog = Catalog::sample();
		let route = Route::Detail(ContentKind::Member, 99);
		assert!(matches!(build(&catalog, &route, today()), Page::Missing { .. }));
		assert_eq!(target(&catalog, &route, 0), None);
	}

	#[test]
	fn enter_targets_follow_list_order() {
		let catalog = Catalog::sample();
		let members = Route::List(ContentKind::Member);
		assert_eq!(selectable_len(&catalog, &members), 5);
		assert_eq!(
			target(&catalog, &members, 2),
			Some(Route::Detail(ContentKind::Member, 3))
		);
		assert_eq!(
			target(&catalog, &Route::Dashboard, 0),
			Some(Route::Detail(ContentKind::Article, 3))
		);
	}
}
