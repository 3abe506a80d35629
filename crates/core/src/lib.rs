//! Core types for omniwriter
//!
//! Domain types shared by the generation, storage and service crates.

pub mod constants;
mod env_config;
mod error;
mod options;
mod record;
mod request;

pub use env_config::env_parse_with_default;
pub use error::CoreError;
pub use options::{ContentType, Language, Length, Tone};
pub use record::{GenerationRecord, RecordDraft, RecordSource};
pub use request::{GenerationRequest, GenerationResult, GroundingReference};
