//! # Error Types
//!
//! Domain-specific error types for lumi-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                           Error Types                               │
//! │                                                                     │
//! │  lumi-core errors (this file)                                       │
//! │  ├── CoreError        - Domain rule violations                      │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  lumi-terminal errors (separate crate)                              │
//! │  └── ApiError         - What the frontend sees (serialized)         │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (table id, product id, status)
//! 3. Errors are enum variants, never String
//! 4. Every command either fully applies or rejects before any mutation

use thiserror::Error;

use crate::table::TableStatus;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These represent domain rule violations. They are returned synchronously
/// and are all recoverable by the caller.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No table on the floor has the given identifier.
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// No product with the given identifier (unknown to the catalog, or
    /// not currently in the cart).
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A lifecycle command was issued against a table whose current status
    /// is not in the command's valid-from set.
    ///
    /// ## Example
    /// `seat` on a table that is already `Occupied`:
    /// ```text
    /// InvalidTransition { table_id: "..", command: "seat", status: Occupied }
    /// ```
    #[error("Table {table_id} is {status:?}, cannot {command}")]
    InvalidTransition {
        table_id: String,
        command: &'static str,
        status: TableStatus,
    },

    /// Cart has exceeded the maximum number of unique lines.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Line quantity exceeds the maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when caller input doesn't meet requirements, before any
/// business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., malformed barcode or UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., barcode or table number already taken).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
