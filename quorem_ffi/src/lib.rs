mod option;
mod quorem;
mod result;

use crate::option::nullable_ptr_to_option;
use crate::result::FFIResult;
use thiserror::Error;

#[derive(Error, Debug)]
enum PointerError {
    #[error("null pointer passed for `{0}`")]
    Null(&'static str),
}

/// Out-pointer entry point: computes the truncating quotient and
/// remainder of `*a / *b` and writes them through `quo` and `rem`.
#[no_mangle]
pub extern "C" fn calc_quo_rem(
    a: *const i32,
    b: *const i32,
    quo: *mut i32,
    rem: *mut i32,
) -> FFIResult<u8> {
    let Some(a) = nullable_ptr_to_option(a) else {
        return FFIResult::err(PointerError::Null("a"));
    };
    let Some(b) = nullable_ptr_to_option(b) else {
        return FFIResult::err(PointerError::Null("b"));
    };
    if quo.is_null() {
        return FFIResult::err(PointerError::Null("quo"));
    }
    if rem.is_null() {
        return FFIResult::err(PointerError::Null("rem"));
    }

    match quorem_math::calc_quo_rem(a, b) {
        Ok(res) => {
            unsafe {
                *quo = res.quo;
                *rem = res.rem;
            }
            FFIResult::ok(0)
        }
        Err(e) => FFIResult::err(e),
    }
}
