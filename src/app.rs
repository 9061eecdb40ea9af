//! App Core for Toolvana.
//!
//! `App` is the explicit application context: it owns the page, the durable
//! storage, the search widget and the debounce timer, and dispatches page events
//! to the components. All work happens on one task; the only deferred work is the
//! debounced search.

use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::managers::recent_tools::{now_millis, RecentToolsStore, RecentToolsStoreTrait};
use crate::services::debouncer::Debouncer;
use crate::services::theme_preference::{self, ThemePreferenceStore, ThemePreferenceTrait};
use crate::services::tool_catalog;
use crate::services::tool_search::SearchOutcome;
use crate::storage::{KeyValueStore, SafeStorage};
use crate::types::settings::ToolvanaSettings;
use crate::types::theme::ThemePreference;
use crate::types::tool::RecentToolEntry;
use crate::ui::dom::Page;
use crate::ui::recent_tools_widget::{self, LINK_CLASS};
use crate::ui::search_widget::SearchWidget;

/// Events delivered by the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// The page finished loading.
    Ready { system_prefers_dark: bool },
    /// A link was clicked. `class` is the link's class attribute; only
    /// `widget-link` links are tracked.
    LinkClicked { href: String, class: String },
    /// The search input's value changed.
    SearchInput { value: String },
    /// A key was pressed inside the search input.
    SearchKeyDown { key: String },
    /// The reset-recent-tools button was clicked.
    ResetRecentClicked,
    /// The theme toggle was clicked.
    ThemeToggleClicked,
}

/// Central application struct.
pub struct App<S: KeyValueStore> {
    pub settings: ToolvanaSettings,
    pub page: Page,
    storage: SafeStorage<S>,
    search: Option<SearchWidget>,
    debouncer: Debouncer<String>,
    clock: fn() -> i64,
    recomputations: usize,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(storage: S, settings: ToolvanaSettings, page: Page) -> Self {
        let debouncer = Debouncer::from_millis(settings.search.debounce_ms);
        Self {
            settings,
            page,
            storage: SafeStorage::new(storage),
            search: None,
            debouncer,
            clock: now_millis,
            recomputations: 0,
        }
    }

    /// Replaces the timestamp source used for recent tool entries.
    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    /// Recent tools store over this app's storage.
    pub fn recent_tools(&mut self) -> RecentToolsStore<'_, S> {
        RecentToolsStore::new(&mut self.storage, &self.settings.recent).with_clock(self.clock)
    }

    /// Theme preference store over this app's storage.
    pub fn theme(&mut self) -> ThemePreferenceStore<'_, S> {
        ThemePreferenceStore::new(&mut self.storage, &self.settings.storage.theme_key)
    }

    pub fn storage(&self) -> &SafeStorage<S> {
        &self.storage
    }

    pub fn search(&self) -> Option<&SearchWidget> {
        self.search.as_ref()
    }

    /// Number of search recomputations applied to the page so far.
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }

    /// When the pending debounced search is due, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Writes the persisted recent tools into the list container.
    pub fn render_recent(&mut self) -> bool {
        let entries = self.recent_tools().get();
        recent_tools_widget::render(&mut self.page, &self.settings.selectors.recent_list, &entries)
    }

    /// Records a tool visit and refreshes the list.
    pub fn use_tool(&mut self, tool_id: &str, url: Option<&str>) -> bool {
        let saved = match url {
            Some(url) => self.recent_tools().save_with_url(tool_id, url),
            None => self.recent_tools().save(tool_id),
        };
        self.render_recent();
        saved
    }

    pub fn recent_entries(&mut self) -> Vec<RecentToolEntry> {
        self.recent_tools().get()
    }

    /// Forgets every recent tool and renders the empty state.
    pub fn clear_recent(&mut self) -> bool {
        let cleared = self.recent_tools().clear();
        self.render_recent();
        cleared
    }

    /// Restores the theme, attaches the search bar and renders recent tools.
    fn on_ready(&mut self, system_prefers_dark: bool) {
        let stored = self.theme().load();
        let preference = theme_preference::resolve(stored, system_prefers_dark);
        theme_preference::apply(&mut self.page, preference);

        self.search = SearchWidget::initialize(&mut self.page, &self.settings.selectors);
        self.render_recent();
        info!(
            theme = %preference,
            search = self.search.is_some(),
            "page ready"
        );
    }

    fn toggle_theme(&mut self) -> ThemePreference {
        let current = theme_preference::current(&self.page);
        let next = self.theme().toggle(current);
        theme_preference::apply(&mut self.page, next);
        debug!(announcement = theme_preference::announcement(next), "theme switched");
        next
    }

    /// Dispatches one page event. `now` drives the search debounce.
    pub fn handle_event(&mut self, event: PageEvent, now: Instant) {
        match event {
            PageEvent::Ready { system_prefers_dark } => self.on_ready(system_prefers_dark),
            PageEvent::LinkClicked { href, class } => {
                if !class.split_whitespace().any(|c| c == LINK_CLASS) {
                    debug!(href = %href, "ignoring untracked link");
                    return;
                }
                match tool_catalog::tool_id_from_href(&href) {
                    Some(id) => {
                        self.use_tool(&id, Some(href.as_str()));
                    }
                    None => debug!(href = %href, "ignoring link without a tool id"),
                }
            }
            PageEvent::SearchInput { value } => {
                let Some(search) = &self.search else {
                    return;
                };
                search.set_input_value(&mut self.page, &value);
                search.focus(&mut self.page);
                self.debouncer.push(value.trim().to_string(), now);
            }
            PageEvent::SearchKeyDown { key } => {
                if key != "Escape" {
                    return;
                }
                let Some(search) = &self.search else {
                    return;
                };
                self.debouncer.cancel();
                search.reset(&mut self.page);
                self.recomputations += 1;
            }
            PageEvent::ResetRecentClicked => {
                self.clear_recent();
            }
            PageEvent::ThemeToggleClicked => {
                self.toggle_theme();
            }
        }
    }

    /// Runs the debounced search if its quiet period has elapsed.
    pub fn tick(&mut self, now: Instant) -> Option<SearchOutcome> {
        let term = self.debouncer.poll(now)?;
        let search = self.search.as_ref()?;
        let outcome = search.apply(&mut self.page, &term);
        self.recomputations += 1;
        Some(outcome)
    }

    /// Runs the pending debounced search right away, if there is one.
    pub fn flush(&mut self) -> Option<SearchOutcome> {
        let term = self.debouncer.cancel()?;
        let search = self.search.as_ref()?;
        let outcome = search.apply(&mut self.page, &term);
        self.recomputations += 1;
        Some(outcome)
    }

    /// Event loop: handles page events as they arrive and fires the debounced
    /// search when it falls due. Returns once the event channel closes, after
    /// running any search still pending.
    pub async fn run(&mut self, mut events: mpsc::Receiver<PageEvent>) {
        loop {
            let deadline = self.debouncer.deadline();
            tokio::select! {
                event = events.recv() => match event {
                    Some(event) => self.handle_event(event, Instant::now()),
                    None => break,
                },
                _ = tokio::time::sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    self.tick(Instant::now());
                }
            }
        }
        if self.flush().is_some() {
            debug!("ran pending search on close");
        }
        debug!("event channel closed");
    }
}
