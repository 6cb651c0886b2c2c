use std::{ffi::CString, fmt::Display};

/// C-ABI result envelope: exactly one of `ok` and `err` is non-null.
/// The caller takes ownership of whichever pointer is set.
#[repr(C)]
pub struct FFIResult<T> {
    ok: *const T,
    err: *const std::ffi::c_char,
}

impl<T> FFIResult<T> {
    pub fn ok(value: T) -> Self {
        Self {
            ok: Box::into_raw(Box::new(value)),
            err: std::ptr::null(),
        }
    }

    pub fn err<E: Display>(value: E) -> Self {
        let err =
            CString::new(value.to_string()).expect("string must not contain zero internal byte");

        Self {
            ok: std::ptr::null(),
            err: err.into_raw(),
        }
    }

    #[cfg(test)]
    pub(crate) fn is_ok(&self) -> bool {
        !self.ok.is_null()
    }

    /// Reclaims the ok value, as a C caller would by taking the pointer.
    #[cfg(test)]
    pub(crate) fn into_ok(self) -> Option<T> {
        if self.ok.is_null() {
            None
        } else {
            Some(*unsafe { Box::from_raw(self.ok as *mut T) })
        }
    }

    #[cfg(test)]
    pub(crate) fn err_message(&self) -> Option<String> {
        if self.err.is_null() {
            None
        } else {
            let msg = unsafe { std::ffi::CStr::from_ptr(self.err) };
            Some(msg.to_string_lossy().into_owned())
        }
    }
}
