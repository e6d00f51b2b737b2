//! Basic Arithmetic Operations
//!
//! Four pure functions over `f64` operands: addition, subtraction,
//! multiplication, and division. Division is the only fallible operation;
//! it rejects a zero divisor. Everything else follows native floating-point
//! semantics (overflow produces infinities, NaN propagates).

use eyre::{bail, Result};

/// Add two numbers and return the sum
///
/// # Examples
/// ```
/// use calculator::arithmetic::add;
///
/// assert_eq!(add(2.0, 3.0), 5.0);
/// assert_eq!(add(-1.0, 1.0), 0.0);
/// ```
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Subtract `b` from `a`
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Multiply two numbers
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `a` by `b`
///
/// The comparison `b == 0.0` also matches a negative zero divisor, so
/// `-0.0` is rejected like `0.0`.
///
/// # Arguments
/// * `a` - Dividend
/// * `b` - Divisor, must be non-zero
///
/// # Errors
/// Returns an error if the divisor is zero. The failure is deterministic
/// and permanent for that input, not transient: callers must supply a
/// non-zero divisor to succeed.
///
/// # Examples
/// ```
/// use calculator::arithmetic::divide;
///
/// assert_eq!(divide(6.0, 2.0).unwrap(), 3.0);
/// assert_eq!(divide(5.0, 2.0).unwrap(), 2.5);
///
/// let err = divide(1.0, 0.0).unwrap_err();
/// assert_eq!(err.to_string(), "Cannot divide by zero");
/// ```
pub fn divide(a: f64, b: f64) -> Result<f64> {
    log::debug!("Dividing {a} by {b}");

    if b == 0.0 {
        bail!("Cannot divide by zero");
    }

    let quotient = a / b;

    if !quotient.is_finite() {
        log::warn!("Quotient is not finite");
    }

    Ok(quotient)
}
