/// Retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    /// A content provider could not be reached or answered malformed data.
    /// The retrieval engine recovers this into an empty result set.
    #[error("content provider unavailable: {reason}")]
    ProviderUnavailable { reason: String },
}
