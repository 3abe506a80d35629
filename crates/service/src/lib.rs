//! Service layer for omniwriter
//!
//! Centralizes the logic between the HTTP handlers and the llm/storage crates.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod error;
mod history_service;
mod writing_service;


pub use error::ServiceError;
pub use history_service::HistoryService;
pub use writing_service::WritingService;
