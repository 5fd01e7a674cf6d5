#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateSyncStatus {
    /// Registered, computes have not seen it yet.
    #[default]
    Init,
    Dirty,
    Clean,
}
