/// Toast notification state
///
/// At most one toast is visible. Showing a toast while another is up
/// replaces it, so repeated clicks never stack duplicates. Each toast
/// gets a new id; a dismissal scheduled for an older id is a no-op.

/// A visible toast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Default)]
pub struct ToastState {
    current: Option<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Show a toast, replacing any visible one. Returns its id.
    pub fn show(&mut self, title: impl Into<String>, description: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.current = Some(Toast {
            id,
            title: title.into(),
            description: description.into(),
        });
        id
    }

    /// Hide the toast with `id`. Returns false if it is no longer showing.
    pub fn dismiss(&mut self, id: u64) -> bool {
        match &self.current {
            Some(toast) if toast.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}
