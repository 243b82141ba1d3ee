//! Internal helpers shared across the crate.

/// Early-returns `Err($error)` when `$predicate` does not hold.
///
/// Used by the message builders for their construction-time validation
/// checks, where a failed check means the value object must not exist.
macro_rules! ensure {
    ($predicate:expr, $error:expr) => {
        if !$predicate {
            return Err($error);
        }
    };
}

pub(crate) use ensure;
