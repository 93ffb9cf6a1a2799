//! Small numeric helpers with no domain coupling.

use core::ops::Mul;

use crate::error::{DomainError, DomainResult};

pub fn square<T>(value: T) -> T
where
    T: Mul<Output = T> + Copy,
{
    value * value
}

/// Limit `value` to `[min, max]`.
///
/// Unlike [`Ord::clamp`], an inverted range is reported as an error instead of
/// panicking.
pub fn clamp<T>(value: T, min: T, max: T) -> DomainResult<T>
where
    T: PartialOrd + Copy + core::fmt::Debug,
{
    if min > max {
        return Err(DomainError::invalid_argument(format!(
            "min ({min:?}) cannot be greater than max ({max:?})"
        )));
    }
    if value < min {
        Ok(min)
    } else if value > max {
        Ok(max)
    } else {
        Ok(value)
    }
}
