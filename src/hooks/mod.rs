//! Custom hooks.
pub mod identity;

// Re-exports
pub use identity::use_identity;
