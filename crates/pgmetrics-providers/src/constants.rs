//! Provider constants

// ============================================================================
// POSTGRESQL CONSTANTS
// ============================================================================

/// Provider name used in logs
pub const POSTGRES_PROVIDER_NAME: &str = "postgres";

/// Milliseconds per second, for `statement_timeout`
pub const MILLIS_PER_SECOND: u64 = 1000;

// ============================================================================
// NUMERIC WIRE FORMAT CONSTANTS
// ============================================================================

/// Sign word of a positive NUMERIC
pub const NUMERIC_POS: u16 = 0x0000;

/// Sign word of a negative NUMERIC
pub const NUMERIC_NEG: u16 = 0x4000;

/// Sign word of a NaN NUMERIC
pub const NUMERIC_NAN: u16 = 0xC000;

/// Decimal digits carried by one NUMERIC base-10000 digit
pub const NUMERIC_DIGIT_WIDTH: i32 = 4;

/// NUMERIC header size in bytes (ndigits, weight, sign, dscale)
pub const NUMERIC_HEADER_LEN: usize = 8;
