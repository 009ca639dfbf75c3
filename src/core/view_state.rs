/// Lifecycle of one fetch-and-render cycle in a view
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Failed(String),
    Loaded(T),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Loading
    }
}

impl<T> ViewState<T> {
    /// Settle a fetch result; `describe` turns the error into the text the
    /// view shows
    pub fn settle<E, F>(result: Result<T, E>, describe: F) -> Self
    where
        F: FnOnce(E) -> String,
    {
        match result {
            Ok(value) => ViewState::Loaded(value),
            Err(err) => ViewState::Failed(describe(err)),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            ViewState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ViewState<U> {
        match self {
            ViewState::Loading => ViewState::Loading,
            ViewState::Failed(message) => ViewState::Failed(message),
            ViewState::Loaded(value) => ViewState::Loaded(f(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_loading() {
        let state: ViewState<Vec<u8>> = ViewState::default();
        assert!(state.is_loading());
        assert!(state.loaded().is_none());
    }

    #[test]
    fn test_settle() {
        let ok: ViewState<u32> = ViewState::settle(Ok::<_, ()>(7), |_| unreachable!());
        assert_eq!(ok.loaded(), Some(&7));

        let failed: ViewState<u32> = ViewState::settle(Err("boom"), |e| format!("failed: {}", e));
        assert_eq!(failed.error(), Some("failed: boom"));
    }
}
