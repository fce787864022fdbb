use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for project identity values.
#[derive(Debug, Error, Diagnostic)]
pub enum IdentityError {
    /// A required coordinate field was empty.
    #[error("{field} cannot be empty")]
    #[diagnostic(help("group id, artifact id and version must all be non-empty"))]
    MissingField { field: &'static str },

    /// A shorthand coordinate string did not split into three parts.
    #[error("invalid coordinate `{input}`: expected `group:artifact:version`")]
    Malformed { input: String },
}
