pub fn nullable_ptr_to_option<T: Copy>(ptr: *const T) -> Option<T> {
    if ptr.is_null() {
        None
    } else {
        Some(unsafe { *ptr })
    }
}
