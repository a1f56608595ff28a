#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::CoreFactory;

// Re-export store implementations
pub use repositories::{FileDocumentStore, MemoryDocumentStore};

// Re-export setup functions for convenient access
pub use setup::{initialize_defaults, setup_store};
