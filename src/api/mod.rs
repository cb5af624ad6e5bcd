// src/api/mod.rs — Typed gateway to the Chemical Equipment Visualizer backend

pub mod http;
pub mod types;

use async_trait::async_trait;

use crate::infra::errors::ChemvizError;

pub use http::HttpGateway;
pub use types::{
    DatasetFile, EquipmentRow, RegisteredUser, Summary, TypeDistribution, UploadReceipt,
};

/// Upper bound on the history list, matching the server contract.
pub const HISTORY_LIMIT: usize = 5;

/// The single outbound channel to the backend. Every operation suspends for
/// one network round-trip; transport failures are normalized into
/// `ChemvizError`.
///
/// Implemented by `HttpGateway` in production and by in-memory fakes in
/// tests, so the dashboard orchestrator never touches the network directly.
#[async_trait]
pub trait ApiGateway: Send + Sync {
    /// POST /login/. Stores the returned token in the credential store as a
    /// side effect.
    async fn authenticate(&self, username: &str, password: &str) -> Result<String, ChemvizError>;

    /// POST /register/. No credential side effect; a successful registration
    /// only unlocks a return to the login entry point.
    async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<RegisteredUser, ChemvizError>;

    /// POST /upload/ (multipart field `file`). Non-CSV files are rejected
    /// before any network I/O.
    async fn upload_dataset(&self, file: DatasetFile) -> Result<UploadReceipt, ChemvizError>;

    /// GET /summary/. `Ok(None)` is the expected "no dataset yet" steady
    /// state, not a fault.
    async fn fetch_summary(&self) -> Result<Option<Summary>, ChemvizError>;

    /// GET /history/. Most-recent-first, at most `HISTORY_LIMIT` entries.
    async fn fetch_history(&self) -> Result<Vec<Summary>, ChemvizError>;

    /// GET /report/{id}/. Raw PDF bytes; never cached.
    async fn fetch_report(&self, id: i64) -> Result<Vec<u8>, ChemvizError>;
}
