use serde::Deserialize;
use strum::{AsRefStr, Display, EnumIter};

/// Status literal that marks a note as done. Compared exactly, no trimming.
pub(crate) const COMPLETED_STATUS: &str = "completed";

/// Status literal ranked first by [`ListOrder::Grouped`].
pub(crate) const ACTIVE_STATUS: &str = "active";

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Note {
    /// Insertion sequence number assigned by the store (1-based).
    pub seq: u64,
    pub name: String,
    /// Free text. Only `"completed"` has meaning for filtering.
    pub status: String,
}

impl Note {
    pub fn is_completed(&self) -> bool {
        self.status == COMPLETED_STATUS
    }
}

/// Transient list selection. Never stored on a note.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter)]
pub(crate) enum Filter {
    #[default]
    All,
    /// Everything that is not completed.
    Active,
    Completed,
}

impl Filter {
    pub fn matches(self, note: &Note) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !note.is_completed(),
            Filter::Completed => note.is_completed(),
        }
    }

    /// `data-testid` of the button selecting this filter.
    pub fn test_id(self) -> &'static str {
        match self {
            Filter::All => "allButton",
            Filter::Active => "activeButton",
            Filter::Completed => "completedButton",
        }
    }
}

/// Display order applied by the store on top of its head-first sequence.
#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ListOrder {
    /// `"active"` notes, then `"completed"`, then the rest; oldest first inside a group.
    #[default]
    Grouped,
    /// Most recently added first.
    Recent,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum NoteError {
    EmptyName,
}

impl std::fmt::Display for NoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoteError::EmptyName => write!(f, "Name cannot be empty"),
        }
    }
}

impl std::error::Error for NoteError {}
