//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Field Limits
// =============================================================================

/// Minimum customer name length
pub const MIN_NAME_LENGTH: u64 = 1;

/// Maximum customer name length
pub const MAX_NAME_LENGTH: u64 = 100;

/// Maximum email length (RFC 5321 path limit)
pub const MAX_EMAIL_LENGTH: u64 = 254;

/// Maximum phone number length
pub const MAX_PHONE_LENGTH: u64 = 32;

/// Maximum postal address length
pub const MAX_ADDRESS_LENGTH: u64 = 255;

// =============================================================================
// REST Contract
// =============================================================================

/// Collection path shared by the server routes and the console client
pub const CUSTOMERS_PATH: &str = "customers";
