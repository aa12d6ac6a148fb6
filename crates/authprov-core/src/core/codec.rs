// authprov-core/src/core/codec.rs
// ============================================================================
// Module: AuthProv Codec Helpers
// Description: Hex, integer, and fixed-width bit-vector conversions.
// Purpose: Provide the lenient numeric conversions used by rules and SQN.
// Dependencies: None
// ============================================================================

//! ## Overview
//! Conversions here are lenient: they parse the longest leading hex prefix
//! and fall back to zero rather than failing. Validation rules decide whether
//! an attribute is well-formed; the codec only converts.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Width of the SEQHE/SQN bit vector.
pub const BITS48_WIDTH: u32 = 48;

/// Mask selecting the low 48 bits.
const BITS48_MASK: u64 = (1 << BITS48_WIDTH) - 1;

/// Hex digits needed to render a 48-bit vector.
const BITS48_HEX_DIGITS: usize = 12;

// ============================================================================
// SECTION: Hex and Integers
// ============================================================================

/// Returns the longest leading run of hex digits after leading whitespace.
fn leading_hex(text: &str) -> &str {
    let trimmed = text.trim_start();
    let end = trimmed.find(|ch: char| !ch.is_ascii_hexdigit()).unwrap_or(trimmed.len());
    &trimmed[..end]
}

/// Parses the leading hex prefix of `text`; empty or overflowing input yields 0.
#[must_use]
pub fn hex_to_uint(text: &str) -> u32 {
    u32::from_str_radix(leading_hex(text), 16).unwrap_or(0)
}

/// Renders `value` as upper-case hex left-padded with zeros to `width`.
#[must_use]
pub fn uint_to_hex(value: u32, width: usize) -> String {
    format!("{value:0width$X}")
}

/// Returns true when the character at `position` (0 = rightmost) is `'1'`.
///
/// Out-of-range positions return false.
#[must_use]
pub fn bit_is_set(mask: &str, position: usize) -> bool {
    mask.bytes().rev().nth(position) == Some(b'1')
}

// ============================================================================
// SECTION: 48-bit Vectors
// ============================================================================

/// Fixed-width 48-bit vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bits48(u64);

impl Bits48 {
    /// Builds a vector from the low 48 bits of `value`.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value & BITS48_MASK)
    }

    /// Returns the vector as an integer.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Bits48 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:048b}", self.0)
    }
}

/// Parses the leading hex prefix of `text` into a vector, truncated to 48 bits.
#[must_use]
pub fn hex_to_bits48(text: &str) -> Bits48 {
    Bits48::new(u64::from_str_radix(leading_hex(text), 16).unwrap_or(0))
}

/// Shifts the vector left by `count` bits, discarding overflow.
#[must_use]
pub fn left_shift_bits(bits: Bits48, count: u32) -> Bits48 {
    if count >= BITS48_WIDTH {
        return Bits48::default();
    }
    Bits48::new(bits.value() << count)
}

/// Renders the vector as 12 upper-case hex characters.
#[must_use]
pub fn bits48_to_hex(bits: Bits48) -> String {
    format!("{:0width$X}", bits.value(), width = BITS48_HEX_DIGITS)
}
