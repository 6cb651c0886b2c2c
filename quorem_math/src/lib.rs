use thiserror::Error;

/// Quotient and remainder of a truncating integer division.
///
/// For non-zero `b`, `a == quo * b + rem` holds, the quotient is rounded
/// toward zero, and the remainder carries the sign of the dividend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuoRem {
    pub quo: i32,
    pub rem: i32,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DivisionError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("quotient of {0} / {1} does not fit in i32")]
    Overflow(i32, i32),
}

/// Computes the truncating quotient and remainder of `a / b`.
///
/// `i32::MIN / -1` is the one case where the quotient itself overflows.
pub fn calc_quo_rem(a: i32, b: i32) -> Result<QuoRem, DivisionError> {
    if b == 0 {
        return Err(DivisionError::DivisionByZero);
    }

    match (a.checked_div(b), a.checked_rem(b)) {
        (Some(quo), Some(rem)) => Ok(QuoRem { quo, rem }),
        _ => Err(DivisionError::Overflow(a, b)),
    }
}
