//! Shared test fixtures for the widget workspace.
//!
//! A dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`arctic`] - the "Arctic Report" repository content shared by the fixtures
//! - [`tree`] - [`TestTree`] builder for directory-backed hosts

pub mod arctic;
pub mod tree;

pub use arctic::arctic_host;
pub use tree::TestTree;
