use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::IdentityError;

/// The unique identifier for a packaged Maven project.
///
/// Holds the project's group id, artifact id and version. Fields are private
/// so every live instance went through validation; the type has value
/// semantics and no mutation surface.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct ProjectCoordinate {
    group_id: String,
    artifact_id: String,
    version: String,
}

impl ProjectCoordinate {
    /// Create a coordinate from its three parts.
    ///
    /// Each part must be non-empty; fails naming the first empty field,
    /// checked as group id, then artifact id, then version.
    pub fn new(group_id: &str, artifact_id: &str, version: &str) -> Result<Self, IdentityError> {
        if group_id.is_empty() {
            return Err(IdentityError::MissingField { field: "groupId" });
        }
        if artifact_id.is_empty() {
            return Err(IdentityError::MissingField { field: "artifactId" });
        }
        if version.is_empty() {
            return Err(IdentityError::MissingField { field: "version" });
        }
        Ok(Self {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            version: version.to_string(),
        })
    }

    /// Parse `"group:artifact:version"` into a coordinate.
    pub fn parse(s: &str) -> Result<Self, IdentityError> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 3 {
            return Err(IdentityError::Malformed {
                input: s.to_string(),
            });
        }
        Self::new(parts[0], parts[1], parts[2])
    }

    /// The group id.
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    /// The artifact id.
    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    /// The version.
    pub fn version(&self) -> &str {
        &self.version
    }
}

/// Diagnostic form; not a parseable serialization format.
impl fmt::Display for ProjectCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ProjectCoordinate[groupId={},artifactId={},version={}]",
            self.group_id, self.artifact_id, self.version
        )
    }
}

/// Deserialization mirror; routes incoming data through `new` so serde
/// cannot produce a coordinate with empty fields.
#[derive(Deserialize)]
struct RawCoordinate {
    group_id: String,
    artifact_id: String,
    version: String,
}

impl TryFrom<RawCoordinate> for ProjectCoordinate {
    type Error = IdentityError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Self::new(&raw.group_id, &raw.artifact_id, &raw.version)
    }
}
