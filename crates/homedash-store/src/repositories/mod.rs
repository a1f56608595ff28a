//! `DocumentStore` implementations.
//!
//! Filesystem and serialization details are confined to this module and
//! never exposed through the port trait signatures.

mod file_document_store;
mod memory_document_store;

pub use file_document_store::FileDocumentStore;
pub use memory_document_store::MemoryDocumentStore;
