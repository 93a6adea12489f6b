use std::path::PathBuf;

/// Work the store asks the async runtime to perform. Fire-and-forget: each
/// effect's completion comes back later as its own [`super::Action`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Read one accepted file as text.
    ReadFile { name: String, path: PathBuf },
    /// List a directory for the picker.
    LoadDir(PathBuf),
}
