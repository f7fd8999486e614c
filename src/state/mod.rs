use crate::config::EnvConfig;
use crate::models::{Filter, ListOrder, Note, NoteError};
use crate::store::NoteStore;
use leptos::prelude::*;

/// Per-category totals shown next to the filter buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct FilterCounts {
    pub all: usize,
    pub active: usize,
    pub completed: usize,
}

impl FilterCounts {
    pub fn get(&self, filter: Filter) -> usize {
        match filter {
            Filter::All => self.all,
            Filter::Active => self.active,
            Filter::Completed => self.completed,
        }
    }
}

/// The note store plus the current filter selection.
///
/// Every UI event maps to exactly one method here; the page only reads
/// [`NoteBoard::visible`] to render.
#[derive(Clone, Debug, Default)]
pub(crate) struct NoteBoard {
    store: NoteStore,
    filter: Filter,
}

impl NoteBoard {
    pub fn new(order: ListOrder) -> Self {
        Self {
            store: NoteStore::with_order(order),
            filter: Filter::All,
        }
    }

    /// Adds a note. On error the board is left as it was.
    pub fn submit(&mut self, name: &str, status: &str) -> Result<Note, NoteError> {
        self.store.add_note(name, status)
    }

    pub fn select(&mut self, filter: Filter) {
        if self.filter != filter {
            log::trace!("filter {} -> {}", self.filter, filter);
        }
        self.filter = filter;
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn visible(&self) -> Vec<Note> {
        self.store.get_notes(self.filter)
    }

    pub fn counts(&self) -> FilterCounts {
        let all = self.store.len();
        let completed = self.store.recent().filter(|n| n.is_completed()).count();
        FilterCounts {
            all,
            active: all - completed,
            completed,
        }
    }

    /// Text shown in place of an empty list, `None` when notes are visible.
    pub fn empty_message(&self) -> Option<String> {
        if self.store.is_empty() {
            Some("No notes yet.".to_string())
        } else if self.visible().is_empty() {
            Some(format!("No {} notes.", self.filter.as_ref().to_ascii_lowercase()))
        } else {
            None
        }
    }

    #[cfg(test)]
    pub fn store(&self) -> &NoteStore {
        &self.store
    }
}

#[derive(Clone)]
pub(crate) struct AppState {
    pub board: RwSignal<NoteBoard>,

    /// Form fields, cleared after a successful add.
    pub name_input: RwSignal<String>,
    pub status_input: RwSignal<String>,
}

impl AppState {
    pub fn new(config: &EnvConfig) -> Self {
        Self {
            board: RwSignal::new(NoteBoard::new(config.list_order)),
            name_input: RwSignal::new(String::new()),
            status_input: RwSignal::new(String::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&EnvConfig::default())
    }
}

#[derive(Clone)]
pub(crate) struct AppContext(pub AppState);

#[cfg(test)]
mod tests {
    use super::*;

    fn names(notes: &[Note]) -> Vec<&str> {
        notes.iter().map(|n| n.name.as_str()).collect()
    }

    #[test]
    fn test_board_starts_on_all_with_nothing_visible() {
        let board = NoteBoard::default();
        assert_eq!(board.filter(), Filter::All);
        assert!(board.visible().is_empty());
        assert_eq!(board.counts(), FilterCounts::default());
    }

    #[test]
    fn test_submit_single_note_without_status() {
        let mut board = NoteBoard::default();
        board.submit("Study", "").expect("should add");
        let visible = board.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Study");
        assert_eq!(visible[0].status, "");
    }

    #[test]
    fn test_submit_empty_name_is_a_no_op() {
        let mut board = NoteBoard::default();
        board.submit("Movie", "active").expect("should add");
        board.select(Filter::Completed);

        assert_eq!(board.submit("", "completed"), Err(NoteError::EmptyName));
        assert_eq!(board.filter(), Filter::Completed);
        assert!(board.visible().is_empty());
        assert_eq!(board.store().len(), 1);
    }

    #[test]
    fn test_completed_added_under_active_stays_hidden() {
        let mut board = NoteBoard::default();
        board.submit("Movie", "active").expect("should add");
        board.submit("Fill form", "active").expect("should add");
        board.select(Filter::Active);
        board.submit("Stocks investing", "completed").expect("should add");

        assert_eq!(names(&board.visible()), vec!["Movie", "Fill form"]);

        board.select(Filter::Completed);
        assert_eq!(names(&board.visible()), vec!["Stocks investing"]);
    }

    #[test]
    fn test_switching_filters_round_trip() {
        let mut board = NoteBoard::default();
        for (name, status) in [
            ("Study", "progress"),
            ("Movie", "active"),
            ("Stocks investing", "completed"),
        ] {
            board.submit(name, status).expect("should add");
        }

        let all = board.visible();
        assert_eq!(names(&all), vec!["Movie", "Stocks investing", "Study"]);

        board.select(Filter::Active);
        assert_eq!(names(&board.visible()), vec!["Movie", "Study"]);

        board.select(Filter::Completed);
        assert_eq!(names(&board.visible()), vec!["Stocks investing"]);

        board.select(Filter::All);
        assert_eq!(board.visible(), all);
    }

    #[test]
    fn test_repeated_select_does_not_change_view() {
        let mut board = NoteBoard::new(ListOrder::Recent);
        board.submit("a", "x").expect("should add");
        board.submit("b", "completed").expect("should add");

        board.select(Filter::Active);
        let first = board.visible();
        board.select(Filter::Active);
        board.select(Filter::Active);
        assert_eq!(board.visible(), first);
        assert_eq!(names(&first), vec!["a"]);
    }

    #[test]
    fn test_empty_message_depends_on_store_and_filter() {
        let mut board = NoteBoard::default();
        assert_eq!(board.empty_message().as_deref(), Some("No notes yet."));

        board.submit("Movie", "active").expect("should add");
        assert_eq!(board.empty_message(), None);

        board.select(Filter::Completed);
        assert_eq!(board.empty_message().as_deref(), Some("No completed notes."));

        board.submit("Stocks investing", "completed").expect("should add");
        assert_eq!(board.empty_message(), None);

        board.select(Filter::Active);
        assert_eq!(board.empty_message(), None);
    }

    #[test]
    fn test_counts_track_categories() {
        let mut board = NoteBoard::default();
        board.submit("a", "active").expect("should add");
        board.submit("b", "completed").expect("should add");
        board.submit("c", "").expect("should add");
        let counts = board.counts();
        assert_eq!(counts.all, 3);
        assert_eq!(counts.get(Filter::Active), 2);
        assert_eq!(counts.get(Filter::Completed), 1);
    }

    #[test]
    fn test_app_state_uses_configured_order() {
        let config = EnvConfig {
            list_order: ListOrder::Recent,
            ..EnvConfig::default()
        };
        let state = AppState::new(&config);
        assert_eq!(state.board.get_untracked().store().order(), ListOrder::Recent);
        assert!(state.name_input.get_untracked().is_empty());
    }
}
