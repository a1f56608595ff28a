//! Store setup and first-run initialization.
//!
//! Entry points call [`setup_store`] with the resolved documents directory.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use homedash_core::{DocumentKind, DocumentStore};

use crate::repositories::FileDocumentStore;

/// Create the documents directory and seed any missing documents.
///
/// Failing to create the directory is fatal. Seeding failures are logged per
/// document and do not stop startup.
///
/// # Example
///
/// ```rust,no_run
/// use homedash_store::setup_store;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// let store = setup_store(Path::new("/var/lib/homedash/data")).await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_store(dir: &Path) -> Result<Arc<FileDocumentStore>> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create data directory {}", dir.display()))?;

    let store = Arc::new(FileDocumentStore::new(dir));
    let seeded = initialize_defaults(store.as_ref()).await;

    tracing::info!(
        target: "homedash.store",
        dir = %dir.display(),
        seeded = seeded.len(),
        "Document store ready"
    );
    Ok(store)
}

/// Write the default for every document that does not exist yet.
///
/// Existing documents are left untouched. Returns the kinds that were
/// written.
pub async fn initialize_defaults(store: &dyn DocumentStore) -> Vec<DocumentKind> {
    let mut written = Vec::new();

    for kind in DocumentKind::ALL {
        match store.read(kind).await {
            Ok(Some(_)) => {}
            Ok(None) => match store.write(kind, &kind.default_value()).await {
                Ok(()) => {
                    tracing::info!(target: "homedash.store", document = %kind, "Initialized default document");
                    written.push(kind);
                }
                Err(e) => {
                    tracing::error!(target: "homedash.store", document = %kind, error = %e, "Failed to initialize document");
                }
            },
            Err(e) => {
                tracing::error!(target: "homedash.store", document = %kind, error = %e, "Failed to check document");
            }
        }
    }

    written
}
