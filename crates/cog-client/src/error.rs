//! Error types for cog-client

/// Result type for cog-client operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(
        "Invalid repository reference {input:?} ({segments} segments): \
         expected 'owner/name' or 'host/owner/name' with no empty segments"
    )]
    InvalidFormat { input: String, segments: usize },

    #[error("Repo {reference} is missing host. It should be in the format 'host/user/repository'")]
    MissingHost { reference: String },

    #[error("Path template {template:?} has {expected} placeholders but {given} arguments were given")]
    TemplateArguments {
        template: String,
        expected: usize,
        given: usize,
    },

    #[error("Path template {template:?} has an unsupported placeholder at byte {position}")]
    InvalidPlaceholder { template: String, position: usize },
}
