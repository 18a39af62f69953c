//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the orchestration in `main` and
//! something that produces a file. Implementations live in `src/adapters/`.

pub mod demo_generator;

pub use demo_generator::{Artifact, ArtifactKind, DemoGenerator};
