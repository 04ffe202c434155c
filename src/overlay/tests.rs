use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use ratatui::crossterm::event::{
	Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
	MouseEventKind,
};
use ratatui::layout::Rect;

use super::worker::LookupResult;
use super::*;
use crate::content::MockDirectory;
use crate::events::{EventRegistry, Interest};

#[derive(Default)]
struct RecordingRouter {
	paths: Vec<String>,
}

impl Navigator for RecordingRouter {
	fn navigate_to(&mut self, path: &str) {
		self.paths.push(path.to_string());
	}
}

#[derive(Default)]
struct FakeFocus {
	focused: bool,
	focus_calls: usize,
}

impl FocusTarget for FakeFocus {
	fn focus(&mut self) {
		self.focused = true;
		self.focus_calls += 1;
	}

	fn blur(&mut self) {
		self.focused = false;
	}

	fn has_focus(&self) -> bool {
		self.focused
	}
}

/// Records every query it receives, answering from the mock directory.
#[derive(Default)]
struct RecordingSource {
	calls: Mutex<Vec<(String, Category)>>,
}

impl SearchSource for RecordingSource {
	fn search(&self, query: &str, category: Category) -> Result<Vec<SearchHit>, LookupError> {
		self.calls
			.lock()
			.unwrap()
			.push((query.to_string(), category));
		MockDirectory::new()
			.with_latency(Duration::ZERO)
			.search(query, category)
	}
}

struct Harness {
	overlay: SearchOverlay,
	clock: Arc<ManualClock>,
	registry: EventRegistry,
}

impl Harness {
	fn with_source(source: Arc<dyn SearchSource>) -> Self {
		let clock = Arc::new(ManualClock::new());
		let mut registry = EventRegistry::new();
		let overlay = SearchOverlay::mount_with_clock(
			source,
			OverlayConfig::default(),
			clock.clone(),
			&mut registry,
		);
		Self {
			overlay,
			clock,
			registry,
		}
	}

	fn new() -> Self {
		Self::with_source(Arc::new(MockDirectory::new().with_latency(Duration::ZERO)))
	}

	fn advance(&mut self, millis: u64) {
		self.clock.advance(Duration::from_millis(millis));
		self.overlay.tick();
	}

	/// Let the debounce window elapse and wait for the worker to answer.
	fn settle(&mut self) {
		self.advance(300);
		let deadline = Instant::now() + Duration::from_secs(2);
		while self.overlay.is_settling() && Instant::now() < deadline {
			thread::sleep(Duration::from_millis(5));
			self.overlay.pump_results();
		}
		self.overlay.pump_results();
	}

	fn key(
		&mut self,
		key: KeyEvent,
		focus: &mut FakeFocus,
		router: &mut RecordingRouter,
	) -> EventOutcome {
		self.overlay
			.handle_event(&self.registry, &Event::Key(key), focus, router)
	}

	fn click(&mut self, column: u16, row: u16, focus: &mut FakeFocus) -> EventOutcome {
		let event = Event::Mouse(MouseEvent {
			kind: MouseEventKind::Down(MouseButton::Left),
			column,
			row,
			modifiers: KeyModifiers::NONE,
		});
		self.overlay.handle_event(
			&self.registry,
			&event,
			focus,
			&mut RecordingRouter::default(),
		)
	}
}

fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
	KeyEvent {
		code,
		modifiers,
		kind: KeyEventKind::Press,
		state: KeyEventState::NONE,
	}
}

fn titles(overlay: &SearchOverlay) -> Vec<&str> {
	overlay
		.results()
		.iter()
		.map(|hit| hit.title.as_str())
		.collect()
}

#[test]
fn whitespace_queries_never_issue_lookups() {
	let mut harness = Harness::new();
	harness.overlay.set_query("   ");
	harness.settle();

	assert!(harness.overlay.results().is_empty());
	assert!(!harness.overlay.is_loading());
	assert_eq!(harness.overlay.lookups_issued(), 0);
}

#[test]
fn clearing_the_query_drops_results_synchronously() {
	let mut harness = Harness::new();
	harness.overlay.set_query("rapat");
	harness.settle();
	assert!(!harness.overlay.results().is_empty());

	harness.overlay.set_query("");
	assert!(harness.overlay.results().is_empty());
	assert!(!harness.overlay.is_loading());
	assert!(!harness.overlay.is_settling());
}

#[test]
fn rapid_mutations_issue_one_lookup_for_the_final_snapshot() {
	let source = Arc::new(RecordingSource::default());
	let mut harness = Harness::with_source(source.clone());
	for prefix in ["b", "be", "bea", "beas", "beasiswa"] {
		harness.overlay.set_query(prefix);
		harness.advance(120);
	}
	assert_eq!(harness.overlay.lookups_issued(), 0);
	assert!(harness.overlay.is_loading());

	harness.settle();

	assert_eq!(harness.overlay.lookups_issued(), 1);
	let calls = source.calls.lock().unwrap().clone();
	assert_eq!(calls, vec![("beasiswa".to_string(), Category::All)]);
}

#[test]
fn category_change_rides_the_same_debounce_window() {
	let source = Arc::new(RecordingSource::default());
	let mut harness = Harness::with_source(source.clone());
	harness.overlay.set_query("rapat");
	harness.advance(200);
	harness.overlay.set_category(Category::Activity);
	harness.advance(200);
	assert_eq!(harness.overlay.lookups_issued(), 0);

	harness.settle();
	let calls = source.calls.lock().unwrap().clone();
	assert_eq!(calls, vec![("rapat".to_string(), Category::Activity)]);
	assert_eq!(harness.overlay.query(), "rapat");
}

#[test]
fn beasiswa_scenario_selects_article_and_resets_query() {
	let mut harness = Harness::new();
	harness.overlay.open();
	harness.overlay.set_query("beasiswa");
	harness.settle();

	let hit = harness
		.overlay
		.results()
		.iter()
		.find(|hit| hit.kind == ContentKind::Article)
		.cloned()
		.expect("article hit");
	assert!(hit.title.to_lowercase().contains("beasiswa"));

	let mut router = RecordingRouter::default();
	harness.overlay.select_result(&hit, &mut router);

	assert_eq!(router.paths, vec!["/admin/articles".to_string()]);
	assert_eq!(harness.overlay.query(), "");
	assert!(!harness.overlay.is_open());
	assert!(harness.overlay.results().is_empty());
}

#[test]
fn rapat_in_activity_category_excludes_articles() {
	let mut harness = Harness::new();
	harness.overlay.set_category(Category::Activity);
	harness.overlay.set_query("rapat");
	harness.settle();

	assert!(!harness.overlay.results().is_empty());
	assert!(
		harness
			.overlay
			.results()
			.iter()
			.all(|hit| hit.kind == ContentKind::Activity)
	);
}

#[test]
fn switching_category_refilters_existing_results() {
	let mut harness = Harness::new();
	harness.overlay.set_query("rapat");
	harness.settle();
	assert_eq!(harness.overlay.results().len(), 2);

	harness.overlay.set_category(Category::Article);
	assert!(
		harness
			.overlay
			.results()
			.iter()
			.all(|hit| hit.kind == ContentKind::Article)
	);
	assert!(harness.overlay.is_loading());
}

#[test]
fn switching_category_while_idle_does_nothing_visible() {
	let mut harness = Harness::new();
	harness.overlay.open();
	harness.overlay.set_category(Category::Member);
	harness.settle();

	assert_eq!(harness.overlay.view(), OverlayView::Idle);
	assert_eq!(harness.overlay.lookups_issued(), 0);
}

#[test]
fn stale_responses_are_discarded() {
	let mut harness = Harness::new();
	harness.overlay.set_query("be");
	harness.advance(300);
	harness.overlay.set_query("beasiswa");
	harness.settle();
	assert_eq!(harness.overlay.lookups_issued(), 2);
	assert_eq!(titles(&harness.overlay), vec!["Pendaftaran Beasiswa Prestasi 2024 Dibuka"]);

	// The first lookup resolves late, after the second one has landed.
	harness.overlay.apply_lookup(LookupResult {
		id: 1,
		query: "be".into(),
		category: Category::All,
		outcome: Ok(Vec::new()),
	});
	assert_eq!(harness.overlay.results().len(), 1);
}

#[test]
fn responses_for_an_outdated_snapshot_are_discarded() {
	let mut harness = Harness::new();
	harness.overlay.set_query("rapat");
	harness.settle();
	let before = harness.overlay.results().to_vec();

	harness.overlay.set_category(Category::All);
	harness.overlay.set_query("ahmad");
	harness.overlay.apply_lookup(LookupResult {
		id: harness.overlay.lookups_issued(),
		query: "rapat".into(),
		category: Category::All,
		outcome: Ok(Vec::new()),
	});
	assert_eq!(harness.overlay.results(), before.as_slice());
	assert!(harness.overlay.is_loading());
}

#[test]
fn lookup_failure_reads_as_no_match() {
	let source = Arc::new(
		MockDirectory::new()
			.with_latency(Duration::ZERO)
			.failing("server error"),
	);
	let mut harness = Harness::with_source(source);
	harness.overlay.open();
	harness.overlay.set_query("rapat");
	harness.settle();

	assert!(harness.overlay.results().is_empty());
	assert!(!harness.overlay.is_loading());
	assert_eq!(harness.overlay.view(), OverlayView::NoMatch("rapat"));
	assert_eq!(harness.overlay.lookups_issued(), 1);
}

#[test]
fn view_follows_state_table() {
	let mut harness = Harness::new();
	assert_eq!(harness.overlay.view(), OverlayView::Hidden);

	harness.overlay.open();
	assert_eq!(harness.overlay.view(), OverlayView::Idle);

	harness.overlay.set_query("beasiswa");
	assert_eq!(harness.overlay.view(), OverlayView::Loading);

	harness.settle();
	assert!(matches!(harness.overlay.view(), OverlayView::Results(hits) if hits.len() == 1));

	harness.overlay.close();
	assert_eq!(harness.overlay.view(), OverlayView::Hidden);
	assert_eq!(harness.overlay.query(), "beasiswa");
	assert_eq!(harness.overlay.results().len(), 1);
}

#[test]
fn ctrl_k_focuses_and_opens_from_any_state() {
	let mut harness = Harness::new();
	let mut focus = FakeFocus::default();
	let mut router = RecordingRouter::default();

	for _ in 0..2 {
		let outcome = harness.key(
			press(KeyCode::Char('k'), KeyModifiers::CONTROL),
			&mut focus,
			&mut router,
		);
		assert_eq!(outcome, EventOutcome::Consumed);
		assert!(harness.overlay.is_open());
		assert!(focus.focused);
	}

	let outcome = harness.key(
		press(KeyCode::Char('K'), KeyModifiers::SUPER | KeyModifiers::SHIFT),
		&mut focus,
		&mut router,
	);
	assert_eq!(outcome, EventOutcome::Consumed);
	assert_eq!(focus.focus_calls, 3);
}

#[test]
fn escape_closes_and_releases_focus() {
	let mut harness = Harness::new();
	let mut focus = FakeFocus::default();
	let mut router = RecordingRouter::default();
	harness.key(
		press(KeyCode::Char('k'), KeyModifiers::CONTROL),
		&mut focus,
		&mut router,
	);

	harness.key(press(KeyCode::Esc, KeyModifiers::NONE), &mut focus, &mut router);
	assert!(!harness.overlay.is_open());
	assert!(!focus.focused);
}

#[test]
fn arrow_keys_and_enter_navigate_results() {
	let mut harness = Harness::new();
	let mut focus = FakeFocus::default();
	let mut router = RecordingRouter::default();
	harness.key(
		press(KeyCode::Char('k'), KeyModifiers::CONTROL),
		&mut focus,
		&mut router,
	);
	harness.overlay.set_query("rapat");
	harness.settle();
	assert_eq!(harness.overlay.selected_index(), Some(0));

	harness.key(press(KeyCode::Down, KeyModifiers::NONE), &mut focus, &mut router);
	harness.key(press(KeyCode::Down, KeyModifiers::NONE), &mut focus, &mut router);
	assert_eq!(harness.overlay.selected_index(), Some(1));

	let outcome = harness.key(press(KeyCode::Enter, KeyModifiers::NONE), &mut focus, &mut router);
	assert_eq!(outcome, EventOutcome::Consumed);
	assert_eq!(router.paths, vec!["/admin/activities".to_string()]);
	assert_eq!(harness.overlay.query(), "");
}

#[test]
fn tab_cycles_category_and_ctrl_u_clears() {
	let mut harness = Harness::new();
	let mut focus = FakeFocus::default();
	let mut router = RecordingRouter::default();
	harness.key(
		press(KeyCode::Char('k'), KeyModifiers::CONTROL),
		&mut focus,
		&mut router,
	);
	harness.overlay.set_query("rapat");

	harness.key(press(KeyCode::Tab, KeyModifiers::NONE), &mut focus, &mut router);
	assert_eq!(harness.overlay.category(), Category::Article);
	harness.key(press(KeyCode::BackTab, KeyModifiers::SHIFT), &mut focus, &mut router);
	assert_eq!(harness.overlay.category(), Category::All);

	focus.focused = false;
	harness.key(
		press(KeyCode::Char('u'), KeyModifiers::CONTROL),
		&mut focus,
		&mut router,
	);
	assert_eq!(harness.overlay.query(), "rapat", "ignored without focus");

	focus.focused = true;
	harness.key(
		press(KeyCode::Char('u'), KeyModifiers::CONTROL),
		&mut focus,
		&mut router,
	);
	assert_eq!(harness.overlay.query(), "");
	assert!(focus.focused);
}

#[test]
fn clear_resets_and_restores_focus() {
	let mut harness = Harness::new();
	harness.overlay.set_query("rapat");
	harness.settle();

	let mut focus = FakeFocus::default();
	harness.overlay.clear(&mut focus);
	assert_eq!(harness.overlay.query(), "");
	assert!(harness.overlay.results().is_empty());
	assert_eq!(focus.focus_calls, 1);
}

#[test]
fn pointer_down_outside_closes_inside_does_not() {
	let mut harness = Harness::new();
	harness.overlay.set_layout(OverlayLayout {
		input: Rect::new(0, 0, 40, 1),
		panel: Some(Rect::new(0, 1, 40, 8)),
		tabs: Some(Rect::new(1, 2, 38, 1)),
	});
	let mut focus = FakeFocus::default();
	harness.overlay.open();

	assert_eq!(harness.click(10, 5, &mut focus), EventOutcome::Consumed);
	assert!(harness.overlay.is_open());

	assert_eq!(harness.click(50, 5, &mut focus), EventOutcome::Ignored);
	assert!(!harness.overlay.is_open());

	harness.click(3, 0, &mut focus);
	assert!(harness.overlay.is_open());
	assert!(focus.focused);
}

#[test]
fn clicking_a_tab_switches_category() {
	let mut harness = Harness::new();
	harness.overlay.set_layout(OverlayLayout {
		input: Rect::new(0, 0, 60, 1),
		panel: Some(Rect::new(0, 1, 60, 8)),
		tabs: Some(Rect::new(1, 2, 58, 1)),
	});
	harness.overlay.open();
	let mut focus = FakeFocus::default();

	// "Semua" spans columns 0..8 of the tab row, "Artikel" 8..18.
	harness.click(1 + 9, 2, &mut focus);
	assert_eq!(harness.overlay.category(), Category::Article);
}

#[test]
fn unmount_cancels_timer_and_detaches_listeners() {
	let source = Arc::new(RecordingSource::default());
	let mut harness = Harness::with_source(source.clone());
	assert_eq!(harness.registry.count(Interest::Key), 1);

	harness.overlay.set_query("rapat");
	harness.overlay.unmount(&mut harness.registry);
	harness.advance(1_000);

	assert!(harness.registry.is_empty());
	assert_eq!(harness.overlay.lookups_issued(), 0);
	assert!(source.calls.lock().unwrap().is_empty());

	let mut focus = FakeFocus::default();
	let mut router = RecordingRouter::default();
	let outcome = harness.key(
		press(KeyCode::Char('k'), KeyModifiers::CONTROL),
		&mut focus,
		&mut router,
	);
	assert_eq!(outcome, EventOutcome::Ignored);
	assert!(!harness.overlay.is_open());
}

#[test]
fn lookup_in_flight_at_unmount_is_ignored() {
	let source = Arc::new(MockDirectory::new().with_latency(Duration::from_millis(50)));
	let mut harness = Harness::with_source(source);
	harness.overlay.set_query("rapat");
	harness.advance(300);
	let id = harness.overlay.lookups_issued();
	assert_eq!(id, 1);
	assert!(harness.overlay.is_loading());

	harness.overlay.unmount(&mut harness.registry);
	assert!(!harness.overlay.is_mounted());
	assert!(!harness.overlay.is_loading());

	let hits = MockDirectory::new()
		.with_latency(Duration::ZERO)
		.search("rapat", Category::All)
		.unwrap();
	assert!(!hits.is_empty());
	harness.overlay.apply_lookup(LookupResult {
		id,
		query: "rapat".to_string(),
		category: Category::All,
		outcome: Ok(hits),
	});
	thread::sleep(Duration::from_millis(100));
	harness.overlay.pump_results();

	assert!(harness.overlay.results().is_empty());
	assert!(!harness.overlay.is_loading());
	assert_eq!(harness.overlay.view(), OverlayView::Hidden);
}

#[test]
fn mounted_overlays_are_independent() {
	let mut registry = EventRegistry::new();
	let source: Arc<dyn SearchSource> = Arc::new(MockDirectory::new().with_latency(Duration::ZERO));
	let mut first = SearchOverlay::mount(source.clone(), OverlayConfig::default(), &mut registry);
	let mut second = SearchOverlay::mount(source, OverlayConfig::default(), &mut registry);
	assert_eq!(registry.count(Interest::PointerDown), 2);

	first.set_query("rapat");
	assert_eq!(second.query(), "");

	first.unmount(&mut registry);
	assert_eq!(registry.count(Interest::Key), 1);

	let mut focus = NoFocus;
	let mut router = RecordingRouter::default();
	let shortcut = press(KeyCode::Char('k'), KeyModifiers::CONTROL);
	assert!(
		second
			.handle_key(&registry, shortcut, &mut focus, &mut router)
			.is_consumed()
	);
	assert!(!first
		.handle_key(&registry, shortcut, &mut focus, &mut router)
		.is_consumed());

	second.unmount(&mut registry);
	assert!(registry.is_empty());
}
