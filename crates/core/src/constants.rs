//! Shared constants for omniwriter.

/// Maximum number of history records kept by either store and shown in the view.
pub const HISTORY_LIMIT: usize = 50;

/// Generation model used for every request.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Thinking budget attached when extended reasoning is requested.
pub const THINKING_BUDGET: u32 = 2048;

/// Text returned when the provider produced no text parts.
pub const EMPTY_GENERATION_TEXT: &str = "No text generated.";

/// Remote table holding generation records.
pub const GENERATIONS_TABLE: &str = "generations";

/// Message shown to users when generation fails.
pub const GENERATION_FAILURE_MESSAGE: &str =
    "An error occurred while generating content. Please try again.";
