//! Host content-repository capabilities for configurable editor widgets.
//!
//! The widget engine never talks to a content repository directly. Everything
//! it needs (existence checks, file reads, property lookups, link rewriting,
//! locale defaults) goes through the [`ContentHost`] trait defined here.
//!
//! Two implementations ship with the crate:
//!
//! - [`MemoryHost`] - an in-memory repository assembled with builder methods
//! - [`FsHost`] - a directory tree acting as the repository, described by a
//!   [`HostManifest`] TOML file

pub mod error;
pub mod fs;
pub mod host;
pub mod locale;
pub mod manifest;
pub mod memory;
pub mod path;

pub use error::{Error, Result};
pub use fs::FsHost;
pub use host::{ContentHost, ResourceContext, ResourceKind, decode_text};
pub use locale::ContentLocale;
pub use manifest::{HostManifest, MANIFEST_FILE_NAME};
pub use memory::MemoryHost;
pub use path::VfsPath;
