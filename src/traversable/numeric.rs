//! Numeric reductions over sequences.
//!
//! `sum`, `product`, `average`, `min` and `max` work on any sequence whose
//! element type belongs to a [`NumericFamily`]. The family is resolved once
//! per call from the element type, then the whole reduction runs in that
//! family's arithmetic and the result is handed back as the element type.
//!
//! | Family | Element type | `sum` / `product` | `average` |
//! |---|---|---|---|
//! | `Boolean` | `bool` | logical OR / AND | rounds half up |
//! | `Int8`..`UInt64` | `i8`..`u64` | wrapping | truncates toward zero |
//! | `Float32`, `Float64` | `f32`, `f64` | IEEE 754 | quotient |
//! | `BigInteger` | [`BigInt`] | exact | truncates toward zero |
//! | `BigDecimal` | [`Decimal`] | checked | quotient, or a running mean if the total overflows |
//! | `Character` | `char` | on code points, only the result is checked | truncates |
//!
//! An empty sequence is always reported as such, whatever its element type.
//!
//! # Examples
//!
//! ```rust
//! use traversa::list;
//! use traversa::error::ErrorKind;
//!
//! assert_eq!(list![1, 2, 3].sum().unwrap(), 6);
//! assert_eq!(list![2.0, 4.0].average().unwrap(), 3.0);
//! assert_eq!(list![true, false].product().unwrap(), false);
//!
//! let words = list!["a".to_string()];
//! assert_eq!(words.sum().unwrap_err().kind(), ErrorKind::UnsupportedOperation);
//! ```

use std::any::{Any, TypeId, type_name};
use std::cmp::Ordering;
use std::fmt;

use num_bigint::BigInt;
use rust_decimal::Decimal;

use super::Sequence;
use crate::error::{Result, TraversableError};
use crate::persistent::PersistentList;

// =============================================================================
// Numeric Families
// =============================================================================

/// The arithmetic an element type is reduced with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericFamily {
    /// `bool`, where `false` is 0 and `true` is 1.
    Boolean,
    /// `i8`
    Int8,
    /// `i16`
    Int16,
    /// `i32`
    Int32,
    /// `i64`
    Int64,
    /// `u8`
    UInt8,
    /// `u16`
    UInt16,
    /// `u32`
    UInt32,
    /// `u64`
    UInt64,
    /// `f32`
    Float32,
    /// `f64`
    Float64,
    /// [`num_bigint::BigInt`]
    BigInteger,
    /// [`rust_decimal::Decimal`]
    BigDecimal,
    /// `char`, reduced on its code point.
    Character,
}

impl NumericFamily {
    /// Resolves the family of an element type.
    ///
    /// Returns `None` for types with no numeric interpretation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::traversable::NumericFamily;
    ///
    /// assert_eq!(NumericFamily::of::<u16>(), Some(NumericFamily::UInt16));
    /// assert_eq!(NumericFamily::of::<String>(), None);
    /// ```
    #[must_use]
    pub fn of<T: Any>() -> Option<Self> {
        let candidates = [
            (TypeId::of::<bool>(), Self::Boolean),
            (TypeId::of::<i8>(), Self::Int8),
            (TypeId::of::<i16>(), Self::Int16),
            (TypeId::of::<i32>(), Self::Int32),
            (TypeId::of::<i64>(), Self::Int64),
            (TypeId::of::<u8>(), Self::UInt8),
            (TypeId::of::<u16>(), Self::UInt16),
            (TypeId::of::<u32>(), Self::UInt32),
            (TypeId::of::<u64>(), Self::UInt64),
            (TypeId::of::<f32>(), Self::Float32),
            (TypeId::of::<f64>(), Self::Float64),
            (TypeId::of::<BigInt>(), Self::BigInteger),
            (TypeId::of::<Decimal>(), Self::BigDecimal),
            (TypeId::of::<char>(), Self::Character),
        ];
        let element = TypeId::of::<T>();
        candidates
            .into_iter()
            .find_map(|(candidate, family)| (candidate == element).then_some(family))
    }

    /// Short lowercase name of the family.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Boolean => "bool",
            Self::Int8 => "i8",
            Self::Int16 => "i16",
            Self::Int32 => "i32",
            Self::Int64 => "i64",
            Self::UInt8 => "u8",
            Self::UInt16 => "u16",
            Self::UInt32 => "u32",
            Self::UInt64 => "u64",
            Self::Float32 => "f32",
            Self::Float64 => "f64",
            Self::BigInteger => "bigint",
            Self::BigDecimal => "decimal",
            Self::Character => "char",
        }
    }
}

impl fmt::Display for NumericFamily {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

// =============================================================================
// Family Arithmetic
// =============================================================================

trait Numeric: Any + Clone {
    const FAMILY: NumericFamily;

    fn zero() -> Self;

    fn one() -> Self;

    fn plus(&self, other: &Self) -> Result<Self>;

    fn times(&self, other: &Self) -> Result<Self>;

    fn natural_order(&self, other: &Self) -> Ordering;

    fn total<'a, I>(mut values: I) -> Result<Self>
    where
        I: Iterator<Item = &'a Self>,
        Self: 'a,
    {
        values.try_fold(Self::zero(), |total, value| total.plus(value))
    }

    fn product_of<'a, I>(mut values: I) -> Result<Self>
    where
        I: Iterator<Item = &'a Self>,
        Self: 'a,
    {
        values.try_fold(Self::one(), |product, value| product.times(value))
    }

    /// Called with at least one value.
    fn mean<'a, I>(values: I) -> Result<Self>
    where
        I: Iterator<Item = &'a Self>,
        Self: 'a;
}

fn overflow<X: Numeric>(operation: &'static str) -> TraversableError {
    TraversableError::ArithmeticOverflow {
        operation,
        family: X::FAMILY.name(),
    }
}

fn character(code_point: u32, operation: &'static str) -> Result<char> {
    char::from_u32(code_point).ok_or_else(|| TraversableError::InvalidCodePoint {
        operation,
        code_point,
    })
}

macro_rules! integral_numeric {
    ($($integral:ty => $family:ident),+ $(,)?) => {
        $(
            impl Numeric for $integral {
                const FAMILY: NumericFamily = NumericFamily::$family;

                fn zero() -> Self {
                    0
                }

                fn one() -> Self {
                    1
                }

                fn plus(&self, other: &Self) -> Result<Self> {
                    Ok(self.wrapping_add(*other))
                }

                fn times(&self, other: &Self) -> Result<Self> {
                    Ok(self.wrapping_mul(*other))
                }

                fn natural_order(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }

                fn mean<'a, I>(values: I) -> Result<Self>
                where
                    I: Iterator<Item = &'a Self>,
                {
                    let (total, count) = values.fold((0_i128, 0_i128), |(total, count), value| {
                        (total + i128::from(*value), count + 1)
                    });
                    Self::try_from(total / count.max(1)).map_err(|_| overflow::<Self>("average"))
                }
            }
        )+
    };
}

integral_numeric! {
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => UInt8,
    u16 => UInt16,
    u32 => UInt32,
    u64 => UInt64,
}

impl Numeric for f32 {
    const FAMILY: NumericFamily = NumericFamily::Float32;

    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn plus(&self, other: &Self) -> Result<Self> {
        Ok(self + other)
    }

    fn times(&self, other: &Self) -> Result<Self> {
        Ok(self * other)
    }

    fn natural_order(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn mean<'a, I>(values: I) -> Result<Self>
    where
        I: Iterator<Item = &'a Self>,
    {
        let (total, count) = values.fold((0.0_f64, 0_usize), |(total, count), value| {
            (total + f64::from(*value), count + 1)
        });
        Ok((total / count.max(1) as f64) as Self)
    }
}

impl Numeric for f64 {
    const FAMILY: NumericFamily = NumericFamily::Float64;

    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn plus(&self, other: &Self) -> Result<Self> {
        Ok(self + other)
    }

    fn times(&self, other: &Self) -> Result<Self> {
        Ok(self * other)
    }

    fn natural_order(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }

    #[allow(clippy::cast_precision_loss)]
    fn mean<'a, I>(values: I) -> Result<Self>
    where
        I: Iterator<Item = &'a Self>,
    {
        let (total, count) = values.fold((0.0, 0_usize), |(total, count), value| {
            (total + value, count + 1)
        });
        Ok(total / count.max(1) as Self)
    }
}

impl Numeric for bool {
    const FAMILY: NumericFamily = NumericFamily::Boolean;

    fn zero() -> Self {
        false
    }

    fn one() -> Self {
        true
    }

    fn plus(&self, other: &Self) -> Result<Self> {
        Ok(*self || *other)
    }

    fn times(&self, other: &Self) -> Result<Self> {
        Ok(*self && *other)
    }

    fn natural_order(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn mean<'a, I>(values: I) -> Result<Self>
    where
        I: Iterator<Item = &'a Self>,
    {
        let (truths, count) = values.fold((0_usize, 0_usize), |(truths, count), value| {
            (truths + usize::from(*value), count + 1)
        });
        Ok(truths * 2 >= count)
    }
}

impl Numeric for char {
    const FAMILY: NumericFamily = NumericFamily::Character;

    fn zero() -> Self {
        '\0'
    }

    fn one() -> Self {
        '\u{1}'
    }

    fn plus(&self, other: &Self) -> Result<Self> {
        Self::total([self, other].into_iter())
    }

    fn times(&self, other: &Self) -> Result<Self> {
        Self::product_of([self, other].into_iter())
    }

    fn natural_order(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    // Intermediate code points may be surrogates; only the result must be a
    // valid character.
    fn total<'a, I>(values: I) -> Result<Self>
    where
        I: Iterator<Item = &'a Self>,
    {
        let code_point = values.fold(0_u32, |total, value| total.wrapping_add(u32::from(*value)));
        character(code_point, "sum")
    }

    fn product_of<'a, I>(values: I) -> Result<Self>
    where
        I: Iterator<Item = &'a Self>,
    {
        let code_point = values.fold(1_u32, |product, value| product.wrapping_mul(u32::from(*value)));
        character(code_point, "product")
    }

    fn mean<'a, I>(values: I) -> Result<Self>
    where
        I: Iterator<Item = &'a Self>,
    {
        let (total, count) = values.fold((0_u64, 0_u64), |(total, count), value| {
            (total + u64::from(u32::from(*value)), count + 1)
        });
        let code_point = u32::try_from(total / count.max(1)).map_err(|_| overflow::<Self>("average"))?;
        character(code_point, "average")
    }
}

impl Numeric for BigInt {
    const FAMILY: NumericFamily = NumericFamily::BigInteger;

    fn zero() -> Self {
        Self::from(0)
    }

    fn one() -> Self {
        Self::from(1)
    }

    fn plus(&self, other: &Self) -> Result<Self> {
        Ok(self + other)
    }

    fn times(&self, other: &Self) -> Result<Self> {
        Ok(self * other)
    }

    fn natural_order(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn mean<'a, I>(values: I) -> Result<Self>
    where
        I: Iterator<Item = &'a Self>,
    {
        let (total, count) = values.fold((Self::zero(), 0_usize), |(total, count), value| {
            (total + value, count + 1)
        });
        Ok(total / Self::from(count.max(1)))
    }
}

impl Numeric for Decimal {
    const FAMILY: NumericFamily = NumericFamily::BigDecimal;

    fn zero() -> Self {
        Self::ZERO
    }

    fn one() -> Self {
        Self::ONE
    }

    fn plus(&self, other: &Self) -> Result<Self> {
        self.checked_add(*other).ok_or_else(|| overflow::<Self>("sum"))
    }

    fn times(&self, other: &Self) -> Result<Self> {
        self.checked_mul(*other)
            .ok_or_else(|| overflow::<Self>("product"))
    }

    fn natural_order(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn mean<'a, I>(values: I) -> Result<Self>
    where
        I: Iterator<Item = &'a Self>,
    {
        let values: Vec<Self> = values.copied().collect();
        let count = Self::from(values.len().max(1));
        values
            .iter()
            .try_fold(Self::ZERO, |total, value| total.checked_add(*value))
            .map_or_else(|| running_mean(&values), |total| total.checked_div(count))
            .ok_or_else(|| overflow::<Self>("average"))
    }
}

/// Mean of values whose exact total does not fit in a `Decimal`.
fn running_mean(values: &[Decimal]) -> Option<Decimal> {
    values
        .iter()
        .zip(1_usize..)
        .try_fold(Decimal::ZERO, |mean, (value, position)| {
            value
                .checked_sub(mean)?
                .checked_div(Decimal::from(position))?
                .checked_add(mean)
        })
}

// =============================================================================
// Dispatch
// =============================================================================

/// Expands a call to `function::<S, X>(..)` for the family's type `X`.
macro_rules! dispatch {
    ($family:expr, $function:ident::<$sequence:ty>($($argument:expr),* $(,)?)) => {
        match $family {
            NumericFamily::Boolean => $function::<$sequence, bool>($($argument),*),
            NumericFamily::Int8 => $function::<$sequence, i8>($($argument),*),
            NumericFamily::Int16 => $function::<$sequence, i16>($($argument),*),
            NumericFamily::Int32 => $function::<$sequence, i32>($($argument),*),
            NumericFamily::Int64 => $function::<$sequence, i64>($($argument),*),
            NumericFamily::UInt8 => $function::<$sequence, u8>($($argument),*),
            NumericFamily::UInt16 => $function::<$sequence, u16>($($argument),*),
            NumericFamily::UInt32 => $function::<$sequence, u32>($($argument),*),
            NumericFamily::UInt64 => $function::<$sequence, u64>($($argument),*),
            NumericFamily::Float32 => $function::<$sequence, f32>($($argument),*),
            NumericFamily::Float64 => $function::<$sequence, f64>($($argument),*),
            NumericFamily::BigInteger => $function::<$sequence, BigInt>($($argument),*),
            NumericFamily::BigDecimal => $function::<$sequence, Decimal>($($argument),*),
            NumericFamily::Character => $function::<$sequence, char>($($argument),*),
        }
    };
}

/// Checks emptiness first, then resolves the element family.
fn resolve<S>(sequence: &S, operation: &'static str) -> Result<NumericFamily>
where
    S: Sequence,
    S::Element: Any,
{
    if sequence.is_empty() {
        return Err(TraversableError::empty(operation));
    }
    let element_type = type_name::<S::Element>();
    NumericFamily::of::<S::Element>().map_or_else(
        || {
            tracing::debug!(operation, element_type, "element type has no numeric family");
            Err(TraversableError::UnsupportedElementType {
                operation,
                element_type,
            })
        },
        |family| {
            tracing::trace!(operation, %family, "resolved numeric family");
            Ok(family)
        },
    )
}

fn view<'a, T: Any, X: Any>(element: &'a T, operation: &'static str) -> Result<&'a X> {
    (element as &dyn Any)
        .downcast_ref::<X>()
        .ok_or_else(|| TraversableError::TypeMismatch {
            operation,
            expected: type_name::<X>(),
            found: type_name::<T>(),
        })
}

fn lift<X: Any, T: Any>(value: X, operation: &'static str) -> Result<T> {
    let mut slot = Some(value);
    (&mut slot as &mut dyn Any)
        .downcast_mut::<Option<T>>()
        .and_then(Option::take)
        .ok_or_else(|| TraversableError::TypeMismatch {
            operation,
            expected: type_name::<T>(),
            found: type_name::<X>(),
        })
}

fn views<'a, S, X>(sequence: &'a S, operation: &'static str) -> Result<Vec<&'a X>>
where
    S: Sequence,
    S::Element: Any,
    X: Numeric,
{
    sequence
        .iter()
        .map(|element| view::<_, X>(element, operation))
        .collect()
}

fn sum_as<S, X>(sequence: &S) -> Result<S::Element>
where
    S: Sequence,
    S::Element: Any,
    X: Numeric,
{
    let values = views::<S, X>(sequence, "sum")?;
    lift(X::total(values.into_iter())?, "sum")
}

fn product_as<S, X>(sequence: &S) -> Result<S::Element>
where
    S: Sequence,
    S::Element: Any,
    X: Numeric,
{
    let values = views::<S, X>(sequence, "product")?;
    lift(X::product_of(values.into_iter())?, "product")
}

fn average_as<S, X>(sequence: &S) -> Result<S::Element>
where
    S: Sequence,
    S::Element: Any,
    X: Numeric,
{
    let values = views::<S, X>(sequence, "average")?;
    lift(X::mean(values.into_iter())?, "average")
}

fn extremum_as<'a, S, X>(
    sequence: &'a S,
    keep: Ordering,
    operation: &'static str,
) -> Result<&'a S::Element>
where
    S: Sequence,
    S::Element: Any,
    X: Numeric,
{
    let mut elements = sequence.iter();
    let first = elements
        .next()
        .ok_or_else(|| TraversableError::empty(operation))?;
    elements.try_fold(first, |best, candidate| {
        let order = view::<_, X>(candidate, operation)?
            .natural_order(view::<_, X>(best, operation)?);
        Ok(if order == keep { candidate } else { best })
    })
}

fn select_by<'a, S, F>(
    sequence: &'a S,
    operation: &'static str,
    mut replaces: F,
) -> Result<&'a S::Element>
where
    S: Sequence,
    F: FnMut(&S::Element, &S::Element) -> bool,
{
    let mut elements = sequence.iter();
    let first = elements
        .next()
        .ok_or_else(|| TraversableError::empty(operation))?;
    Ok(elements.fold(first, |best, candidate| {
        if replaces(candidate, best) {
            candidate
        } else {
            best
        }
    }))
}

// =============================================================================
// Sequence Reductions
// =============================================================================

/// Adds up the elements in their family's arithmetic.
///
/// # Errors
///
/// - [`TraversableError::EmptySequence`] if the sequence is empty
/// - [`TraversableError::UnsupportedElementType`] if the element type has no
///   [`NumericFamily`]
/// - [`TraversableError::ArithmeticOverflow`] or
///   [`TraversableError::InvalidCodePoint`] if the result is not representable
pub fn sum<S>(sequence: &S) -> Result<S::Element>
where
    S: Sequence,
    S::Element: Any,
{
    let family = resolve(sequence, "sum")?;
    dispatch!(family, sum_as::<S>(sequence))
}

/// Multiplies the elements in their family's arithmetic.
///
/// # Errors
///
/// Same as [`sum`].
pub fn product<S>(sequence: &S) -> Result<S::Element>
where
    S: Sequence,
    S::Element: Any,
{
    let family = resolve(sequence, "product")?;
    dispatch!(family, product_as::<S>(sequence))
}

/// Computes the arithmetic mean, rounded the way the family divides.
///
/// # Errors
///
/// Same as [`sum`].
pub fn average<S>(sequence: &S) -> Result<S::Element>
where
    S: Sequence,
    S::Element: Any,
{
    let family = resolve(sequence, "average")?;
    dispatch!(family, average_as::<S>(sequence))
}

/// Returns the greatest element in natural order; the first one on ties.
///
/// # Errors
///
/// - [`TraversableError::EmptySequence`] if the sequence is empty
/// - [`TraversableError::UnsupportedElementType`] if the element type has no
///   [`NumericFamily`]
pub fn max<S>(sequence: &S) -> Result<&S::Element>
where
    S: Sequence,
    S::Element: Any,
{
    let family = resolve(sequence, "max")?;
    dispatch!(family, extremum_as::<S>(sequence, Ordering::Greater, "max"))
}

/// Returns the least element in natural order; the first one on ties.
///
/// # Errors
///
/// Same as [`max`].
pub fn min<S>(sequence: &S) -> Result<&S::Element>
where
    S: Sequence,
    S::Element: Any,
{
    let family = resolve(sequence, "min")?;
    dispatch!(family, extremum_as::<S>(sequence, Ordering::Less, "min"))
}

/// Returns the greatest element according to `comparator`; the first one on
/// ties.
///
/// # Errors
///
/// Returns [`TraversableError::EmptySequence`] if the sequence is empty.
pub fn max_by<S, F>(sequence: &S, mut comparator: F) -> Result<&S::Element>
where
    S: Sequence,
    F: FnMut(&S::Element, &S::Element) -> Ordering,
{
    select_by(sequence, "max_by", |candidate, best| {
        comparator(candidate, best) == Ordering::Greater
    })
}

/// Returns the least element according to `comparator`; the first one on
/// ties.
///
/// # Errors
///
/// Returns [`TraversableError::EmptySequence`] if the sequence is empty.
pub fn min_by<S, F>(sequence: &S, mut comparator: F) -> Result<&S::Element>
where
    S: Sequence,
    F: FnMut(&S::Element, &S::Element) -> Ordering,
{
    select_by(sequence, "min_by", |candidate, best| {
        comparator(candidate, best) == Ordering::Less
    })
}

// =============================================================================
// PersistentList Methods
// =============================================================================

impl<T: Any> PersistentList<T> {
    /// Adds up the elements. See [`sum`](fn@sum).
    ///
    /// # Errors
    ///
    /// See [`sum`](fn@sum).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::list;
    ///
    /// assert_eq!(list![1u8, 2, 3].sum().unwrap(), 6);
    /// assert_eq!(list![127i8, 1].sum().unwrap(), -128);
    /// assert_eq!(list![false, true].sum().unwrap(), true);
    /// ```
    pub fn sum(&self) -> Result<T> {
        sum(self)
    }

    /// Multiplies the elements. See [`product`](fn@product).
    ///
    /// # Errors
    ///
    /// See [`product`](fn@product).
    pub fn product(&self) -> Result<T> {
        product(self)
    }

    /// Averages the elements. See [`average`](fn@average).
    ///
    /// # Errors
    ///
    /// See [`average`](fn@average).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::list;
    ///
    /// assert_eq!(list![1, 2].average().unwrap(), 1);
    /// assert_eq!(list!['a', 'b', 'c'].average().unwrap(), 'b');
    /// ```
    pub fn average(&self) -> Result<T> {
        average(self)
    }

    /// Returns the greatest element. See [`max`](fn@max).
    ///
    /// # Errors
    ///
    /// See [`max`](fn@max).
    pub fn max(&self) -> Result<&T> {
        max(self)
    }

    /// Returns the least element. See [`min`](fn@min).
    ///
    /// # Errors
    ///
    /// See [`min`](fn@min).
    pub fn min(&self) -> Result<&T> {
        min(self)
    }
}

impl<T> PersistentList<T> {
    /// Returns the greatest element according to `comparator`.
    ///
    /// # Errors
    ///
    /// Returns [`TraversableError::EmptySequence`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::list;
    ///
    /// let words = list!["pear", "fig", "banana"];
    /// assert_eq!(words.max_by(|a, b| a.len().cmp(&b.len())).unwrap(), &"banana");
    /// ```
    pub fn max_by<F>(&self, comparator: F) -> Result<&T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        max_by(self, comparator)
    }

    /// Returns the least element according to `comparator`.
    ///
    /// # Errors
    ///
    /// Returns [`TraversableError::EmptySequence`] if the list is empty.
    pub fn min_by<F>(&self, comparator: F) -> Result<&T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        min_by(self, comparator)
    }
}
