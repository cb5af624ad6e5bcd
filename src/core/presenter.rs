// src/core/presenter.rs — Presentation-layer seam
//
// The orchestrator never prints, scrolls or writes files itself; it emits
// effects through this trait. The CLI installs a console implementation,
// tests install a recording one.

use crate::infra::errors::ChemvizError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

pub trait Presenter: Send + Sync {
    /// Transient user-visible notification.
    fn notify(&self, level: NoticeLevel, message: &str);

    /// Bring the summary view back into view after a history selection.
    fn scroll_to_top(&self) {}

    /// Deliver a downloaded file to the user (the browser-save analogue).
    fn save_file(&self, filename: &str, bytes: &[u8]) -> Result<(), ChemvizError>;
}
