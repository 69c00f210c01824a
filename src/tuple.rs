//! Fixed-arity heterogeneous scan results.
//!
//! A tuple of [`ScanValue`] types is the list of targets of one scan. Every
//! field is parsed even when an earlier one failed, and all field errors
//! are reported together.

use std::ops::Deref;

use crate::error::ScanError;
use crate::value::{ScanValue, parse_value_with_format};

/// Largest supported number of placeholders in one scan.
pub const MAX_ARITY: usize = 16;

/// A tuple of scannable types.
pub trait ScanTuple<'a>: Sized {
    /// Number of values in the tuple.
    const ARITY: usize;

    /// Parses one value per `(input, specifier)` pair.
    ///
    /// Both slices must hold exactly [`Self::ARITY`] entries.
    fn parse_fields(inputs: &[&'a str], formats: &[&str]) -> Result<Self, ScanError>;
}

impl<'a> ScanTuple<'a> for () {
    const ARITY: usize = 0;

    fn parse_fields(inputs: &[&'a str], formats: &[&str]) -> Result<Self, ScanError> {
        check_field_count(Self::ARITY, inputs, formats)
    }
}

fn check_field_count(arity: usize, inputs: &[&str], formats: &[&str]) -> Result<(), ScanError> {
    if formats.len() != inputs.len() {
        return Err(ScanError::input_count_mismatch(formats.len(), inputs.len()));
    }
    if formats.len() != arity {
        return Err(ScanError::parameter_count_mismatch(formats.len(), arity));
    }
    Ok(())
}

macro_rules! impl_scan_tuple_for {
    ($($T:ident $value:ident),+) => {
        impl<'a, $($T: ScanValue<'a>),+> ScanTuple<'a> for ($($T,)+) {
            const ARITY: usize = [$(stringify!($T)),+].len();

            fn parse_fields(inputs: &[&'a str], formats: &[&str]) -> Result<Self, ScanError> {
                check_field_count(Self::ARITY, inputs, formats)?;
                let mut fields = inputs.iter().zip(formats);
                $(
                    let $value = match fields.next() {
                        Some((&input, &format)) => parse_value_with_format::<$T>(input, format),
                        None => return Err(ScanError::parameter_count_mismatch(inputs.len(), Self::ARITY)),
                    };
                )+
                match ($($value,)+) {
                    ($(Ok($value),)+) => Ok(($($value,)+)),
                    ($($value,)+) => Err(ScanError::combine([$($value.err()),+].into_iter().flatten())),
                }
            }
        }
    };
}

macro_rules! impl_scan_tuple {
    ($T:ident $value:ident) => {
        impl_scan_tuple_for!($T $value);
    };
    ($T:ident $value:ident, $($Ts:ident $values:ident),+) => {
        impl_scan_tuple_for!($T $value, $($Ts $values),+);
        impl_scan_tuple!($($Ts $values),+);
    };
}

impl_scan_tuple!(
    T0 v0, T1 v1, T2 v2, T3 v3, T4 v4, T5 v5, T6 v6, T7 v7,
    T8 v8, T9 v9, T10 v10, T11 v11, T12 v12, T13 v13, T14 v14, T15 v15
);

/// Values of a successful scan, in placeholder order.
///
/// Dereferences to the value tuple, so fields are reachable as
/// `result.0`, `result.1`, ...
#[derive(Debug, Clone, PartialEq)]
pub struct ScanResult<T> {
    values: T,
}

impl<T> ScanResult<T> {
    pub(crate) fn new(values: T) -> Self {
        Self { values }
    }

    /// Borrows the value tuple.
    pub fn values(&self) -> &T {
        &self.values
    }

    /// Returns the value tuple.
    pub fn into_values(self) -> T {
        self.values
    }
}

impl<T> Deref for ScanResult<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.values
    }
}
