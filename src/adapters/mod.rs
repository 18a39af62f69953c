//! Adapter implementations for the [`DemoGenerator`](crate::ports::DemoGenerator) port.
//!
//! - `recorder` - External terminal recorder driven by a tape script
//! - `fallback` - Static image drawn in-process

pub mod fallback;
pub mod recorder;
