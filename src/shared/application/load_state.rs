use serde::Serialize;

/// Render state of a screen region backed by a remote request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "camelCase")]
pub enum LoadState<T> {
    /// Nothing requested yet
    Idle,
    /// A request is in flight; views show a loading indication
    Loading,
    /// The request settled with something to show
    Loaded(T),
    /// The request settled with nothing to show (no results or a failure)
    Empty,
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> LoadState<Vec<T>> {
    /// Empty vectors settle as `Empty` so views render their empty state
    pub fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() {
            LoadState::Empty
        } else {
            LoadState::Loaded(items)
        }
    }
}

impl<T> From<Option<T>> for LoadState<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => LoadState::Loaded(v),
            None => LoadState::Empty,
        }
    }
}
