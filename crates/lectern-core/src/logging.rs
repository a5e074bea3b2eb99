//! Structured logging field name constants for lectern.
//!
//! All crates use these constants for consistent structured logging fields,
//! so log aggregation tools can query by standardized names across every
//! subsystem.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Degraded service, requires operator attention |
//! | WARN  | Recoverable issue, automatic fallback applied |
//! | INFO  | Lifecycle events (startup, shutdown), operation completions |
//! | DEBUG | Decision points, intermediate values, config choices |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Correlation ID propagated across request → provider sub-calls.
/// Format: UUIDv7 (time-ordered).
pub const REQUEST_ID: &str = "request_id";

/// Subsystem originating the log event.
/// Values: "api", "inference", "context"
pub const SUBSYSTEM: &str = "subsystem";

/// Logical operation name.
/// Examples: "edit", "merge_lecture", "diagram", "query_nearest"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Note identifier supplied by the client on the process route.
pub const NOTE_ID: &str = "note_id";

/// Fragment UUID in the context store.
pub const FRAGMENT_ID: &str = "fragment_id";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Byte length of a prompt sent to the provider.
pub const PROMPT_LEN: &str = "prompt_len";

/// Byte length of a model response.
pub const RESPONSE_LEN: &str = "response_len";

/// Number of fragments returned by a nearest-neighbor query.
pub const RESULT_COUNT: &str = "result_count";

// ─── Inference fields ──────────────────────────────────────────────────────

/// Model name used for inference.
pub const MODEL: &str = "model";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
