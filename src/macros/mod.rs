// log::error

/// Unwraps a `Result`, logging the error and returning the given
/// fallback value from the enclosing function.
///
/// Patterns reaching this point come out of region metadata, which is
/// validated when the plans are authored, so a failure here is a data
/// bug rather than a caller error and must not take the call down.
macro_rules! ok_or_log_return {
    ($result:expr, $fallback:expr) => {{
        match $result {
            Ok(value) => value,
            Err(err) => {
                log::error!("Invalid pattern in region metadata: {}", err);
                return $fallback;
            }
        }
    }};
}

pub(crate) use ok_or_log_return;
