use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// A snapshot source failed to materialize a collection. The in-memory
    /// store never produces this; remote implementations of `SnapshotSource`
    /// surface their transport failures through it.
    #[error("Snapshot source unavailable: {0}")]
    Unavailable(String),
}
