//! Gemini integration for omniwriter
//!
//! `GeminiClient` speaks the `generateContent` REST API; `RequestOrchestrator`
//! turns a form submission into exactly one provider call and normalizes the
//! answer into a `GenerationResult`.

pub mod ai_types;
mod client;
mod error;
mod orchestrator;
mod persona;


pub use client::{GeminiClient, GenerationProvider, DEFAULT_BASE_URL};
pub use error::LlmError;
pub use orchestrator::{Capability, RequestOrchestrator};
pub use persona::{build_system_instruction, build_user_prompt};
