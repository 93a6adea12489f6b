use std::io;
use std::path::PathBuf;
use std::sync::mpsc::Sender;

use crate::kernel::PickerEntry;

use super::message::AppMessage;

/// Tokio-backed executor for the kernel's effects. Every spawn is
/// fire-and-forget; completions come back over the channel and are drained
/// once per tick on the UI thread. There is no cancellation for in-flight
/// reads.
pub struct AsyncRuntime {
    runtime: tokio::runtime::Runtime,
    tx: Sender<AppMessage>,
}

impl AsyncRuntime {
    pub fn new(tx: Sender<AppMessage>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .or_else(|e| {
                tracing::error!(
                    error = %e,
                    "Failed to create multi-thread tokio runtime, falling back to current-thread"
                );
                tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
            })?;
        Ok(Self { runtime, tx })
    }

    /// Reads one accepted file as text. `name` is the display/dedup name the
    /// acceptor validated; it travels with the result so the kernel never has
    /// to re-derive it from the path.
    pub fn read_file(&self, name: String, path: PathBuf) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            match tokio::fs::read_to_string(&path).await {
                Ok(content) => {
                    tracing::debug!(path = %path.display(), bytes = content.len(), "file read");
                    let _ = tx.send(AppMessage::FileRead {
                        name,
                        path,
                        size: content.len() as u64,
                        content,
                    });
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "file read failed");
                    let _ = tx.send(AppMessage::FileReadError {
                        name,
                        path,
                        error: e.to_string(),
                    });
                }
            }
        });
    }

    /// Lists a directory for the picker.
    pub fn load_dir(&self, path: PathBuf) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            match tokio::fs::read_dir(&path).await {
                Ok(mut entries) => {
                    let mut result = Vec::new();
                    loop {
                        let entry = match entries.next_entry().await {
                            Ok(Some(entry)) => entry,
                            Ok(None) => break,
                            Err(e) => {
                                let _ = tx.send(AppMessage::DirLoadError {
                                    path,
                                    error: e.to_string(),
                                });
                                return;
                            }
                        };

                        let name = entry.file_name().to_string_lossy().to_string();
                        if name.starts_with('.') {
                            continue;
                        }

                        if let Ok(file_type) = entry.file_type().await {
                            result.push(PickerEntry {
                                name,
                                is_dir: file_type.is_dir(),
                            });
                        }
                    }
                    let _ = tx.send(AppMessage::DirLoaded {
                        path,
                        entries: result,
                    });
                }
                Err(e) => {
                    let _ = tx.send(AppMessage::DirLoadError {
                        path,
                        error: e.to_string(),
                    });
                }
            }
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/async_runtime.rs"]
mod tests;
