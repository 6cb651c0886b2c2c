use crate::result::FFIResult;
use quorem_math::QuoRem;

/// FFI-safe mirror of [`quorem_math::QuoRem`].
#[repr(C)]
#[derive(Clone, Copy)]
pub struct FFIQuoRem {
    /// Truncating quotient of a / b
    pub quo: i32,

    /// Remainder a - quo * b, sign-consistent with the dividend
    pub rem: i32,
}

impl From<QuoRem> for FFIQuoRem {
    fn from(value: QuoRem) -> Self {
        FFIQuoRem {
            quo: value.quo,
            rem: value.rem,
        }
    }
}

impl From<FFIQuoRem> for QuoRem {
    fn from(value: FFIQuoRem) -> Self {
        QuoRem {
            quo: value.quo,
            rem: value.rem,
        }
    }
}

/// By-value variant of the quotient/remainder entry point.
#[no_mangle]
pub extern "C" fn calc_quo_rem_value(a: i32, b: i32) -> FFIResult<FFIQuoRem> {
    match quorem_math::calc_quo_rem(a, b) {
        Ok(res) => FFIResult::ok(res.into()),
        Err(e) => FFIResult::err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ffiquorem_conversion() {
        // Positive pair
        let pair = QuoRem { quo: 14, rem: 2 };
        let ffi_pair = FFIQuoRem::from(pair);
        assert_eq!(QuoRem::from(ffi_pair), pair);

        // Negative quotient
        let negative = QuoRem { quo: -17, rem: 11 };
        let ffi_negative = FFIQuoRem::from(negative);
        assert_eq!(QuoRem::from(ffi_negative), negative);

        // Extremes
        let extreme = QuoRem {
            quo: i32::MIN,
            rem: i32::MAX,
        };
        let ffi_extreme = FFIQuoRem::from(extreme);
        assert_eq!(QuoRem::from(ffi_extreme), extreme);
    }

    #[test]
    fn test_calc_quo_rem_value_ok() {
        let res = calc_quo_rem_value(300, -17);
        assert!(res.is_ok());
        let pair = res.into_ok().unwrap();
        assert_eq!(pair.quo, -17);
        assert_eq!(pair.rem, 11);
    }

    #[test]
    fn test_calc_quo_rem_value_division_by_zero() {
        let res = calc_quo_rem_value(100, 0);
        assert!(!res.is_ok());
        assert_eq!(res.err_message().unwrap(), "division by zero");
    }
}
