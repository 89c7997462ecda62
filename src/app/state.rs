use crate::service::Record;

/// Local view of the remote feed account.
///
/// `Uninitialized` is deliberately distinct from `Loaded` with an empty list:
/// the first means the account could not be fetched (most likely it was never
/// created) and the UI offers one-time initialization; the second is a real,
/// existing feed with nothing in it yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedState {
    /// Nothing fetched yet in this session
    NotLoaded,
    /// Fetch failed - account missing or unreachable
    Uninitialized,
    /// Authoritative snapshot, sorted ascending by upvotes
    Loaded(Vec<Record>),
}

impl FeedState {
    pub fn records(&self) -> Option<&[Record]> {
        match self {
            FeedState::Loaded(records) => Some(records),
            _ => None,
        }
    }

    pub fn is_uninitialized(&self) -> bool {
        matches!(self, FeedState::Uninitialized)
    }
}

/// Submit input state
#[derive(Default)]
pub struct SubmitState {
    /// In-progress link text
    pub draft: String,
    /// Input line has keyboard focus
    pub is_active: bool,
}

/// Status bar message (for displaying errors/info)
pub struct StatusMessage {
    pub message: String,
    pub is_error: bool,
    pub timestamp: std::time::Instant,
}
