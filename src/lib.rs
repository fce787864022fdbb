//! Maven project identity types.
//!
//! This crate defines the coordinate triple (group id, artifact id, version)
//! that uniquely names a packaged Maven project. Builds record this triple
//! inside the packaged artifact under
//! `/META-INF/maven/<groupId>/<artifactId>/pom.properties`; consumers that
//! read it back get a validated, immutable value type rather than three loose
//! strings. A minimal build-session capability is included so tests can
//! supply execution properties without a real build environment.
//!
//! This crate is intentionally free of async code and network I/O.

pub mod coordinate;
pub mod errors;
pub mod session;
