//! Repository references and endpoint resolution for cog.
//!
//! A [`RepoReference`] names a model repository (`owner/name` or
//! `host/owner/name`). [`resolve`] turns one into the URL of a service call,
//! falling back to the process-wide [`Settings`] when the reference has no
//! host. Nothing here performs network I/O.

pub mod client;
pub mod error;
pub mod logging;
pub mod repo;
pub mod settings;

pub use client::{Client, SCHEME, expand_path, resolve};
pub use error::{Error, Result};
pub use repo::RepoReference;
pub use settings::{DEFAULT_HOST_ENV, Settings};
