//! Durable blob and metadata storage for imgvault.
//!
//! Persists the mapping `id -> (original format, blob)` on the local
//! filesystem: the raw bytes live at `{blob_dir}/{id}.{ext}` and a small
//! JSON metadata document at `{metadata_dir}/{id}.json`. Both roots are
//! injected at construction so tests can run against scoped temporary
//! directories.

mod record;
mod store;

pub use record::ImageRecord;
pub use store::{ImageStore, SavedImage};
