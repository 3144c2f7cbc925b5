//! Fixed-size and sliding windows over a list.
//!
//! All three operations are one algorithm: starting at the front, emit up
//! to `size` elements of what remains, then advance by `step`, until nothing
//! remains. The final window may be shorter than `size`.
//!
//! ```text
//! [1, 2, 3, 4, 5].sliding_with_step(2, 3)
//!
//!  1  2  3  4  5
//! [1  2]
//!          [4  5]
//! ```

use crate::error::{Result, TraversableError};
use crate::persistent::PersistentList;

const fn require_positive(
    operation: &'static str,
    argument: &'static str,
    value: usize,
) -> Result<()> {
    if value == 0 {
        return Err(TraversableError::InvalidArgument {
            operation,
            argument,
            value,
        });
    }
    Ok(())
}

impl<T: Clone> PersistentList<T> {
    /// Splits the list into consecutive windows of `size` elements.
    ///
    /// Equivalent to `sliding_with_step(size, size)`. The last window holds
    /// the remainder and may be shorter.
    ///
    /// # Errors
    ///
    /// Returns [`TraversableError::InvalidArgument`] if `size` is 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::list;
    ///
    /// let list = list![1, 2, 3, 4];
    /// assert_eq!(list.grouped(3).unwrap(), list![list![1, 2, 3], list![4]]);
    /// assert!(list.grouped(0).is_err());
    /// ```
    pub fn grouped(&self, size: usize) -> Result<PersistentList<Self>> {
        self.windows("grouped", size, size)
    }

    /// Windows of `size` elements advancing one element at a time.
    ///
    /// Equivalent to `sliding_with_step(size, 1)`.
    ///
    /// # Errors
    ///
    /// Returns [`TraversableError::InvalidArgument`] if `size` is 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::list;
    ///
    /// assert_eq!(
    ///     list![1, 2, 3].sliding(2).unwrap(),
    ///     list![list![1, 2], list![2, 3], list![3]]
    /// );
    /// ```
    pub fn sliding(&self, size: usize) -> Result<PersistentList<Self>> {
        self.windows("sliding", size, 1)
    }

    /// Windows of up to `size` elements, each starting `step` elements after
    /// the previous one.
    ///
    /// With `step > size` the elements between windows are skipped. Windows
    /// stop once the start offset passes the end of the list, so an empty
    /// list has no windows.
    ///
    /// # Errors
    ///
    /// Returns [`TraversableError::InvalidArgument`] if `size` or `step` is 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::list;
    ///
    /// let list = list![1, 2, 3, 4, 5];
    /// assert_eq!(list.sliding_with_step(2, 3).unwrap(), list![list![1, 2], list![4, 5]]);
    /// assert_eq!(list.sliding_with_step(2, 4).unwrap(), list![list![1, 2], list![5]]);
    /// assert_eq!(list.sliding_with_step(2, 5).unwrap(), list![list![1, 2]]);
    /// ```
    pub fn sliding_with_step(&self, size: usize, step: usize) -> Result<PersistentList<Self>> {
        self.windows("sliding", size, step)
    }

    fn windows(
        &self,
        operation: &'static str,
        size: usize,
        step: usize,
    ) -> Result<PersistentList<Self>> {
        require_positive(operation, "size", size)?;
        require_positive(operation, "step", step)?;

        let mut windows = Vec::new();
        let mut remaining = self.clone();
        while !remaining.is_empty() {
            windows.push(remaining.take(size));
            remaining = remaining.drop_first(step);
        }
        Ok(PersistentList::of(windows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::list;
    use rstest::rstest;

    fn one_to(count: i32) -> PersistentList<i32> {
        (1..=count).collect()
    }

    // =========================================================================
    // grouped
    // =========================================================================

    #[rstest]
    fn test_grouped_empty() {
        let empty: PersistentList<i32> = PersistentList::empty();
        assert!(empty.grouped(1).unwrap().is_empty());
    }

    #[rstest]
    fn test_grouped_evenly() {
        assert_eq!(
            one_to(4).grouped(2).unwrap(),
            list![list![1, 2], list![3, 4]]
        );
    }

    #[rstest]
    fn test_grouped_with_remainder() {
        assert_eq!(
            one_to(5).grouped(2).unwrap(),
            list![list![1, 2], list![3, 4], list![5]]
        );
    }

    #[rstest]
    fn test_grouped_larger_than_list() {
        assert_eq!(one_to(3).grouped(10).unwrap(), list![list![1, 2, 3]]);
    }

    #[rstest]
    fn test_grouped_zero_is_invalid() {
        let error = one_to(3).grouped(0).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidArgument);
        assert_eq!(error.to_string(), "grouped: size must be positive, got 0");
    }

    // =========================================================================
    // sliding
    // =========================================================================

    #[rstest]
    fn test_sliding_empty() {
        let empty: PersistentList<i32> = PersistentList::empty();
        assert!(empty.sliding(1).unwrap().is_empty());
    }

    #[rstest]
    fn test_sliding_by_one() {
        assert_eq!(
            one_to(5).sliding(1).unwrap(),
            list![list![1], list![2], list![3], list![4], list![5]]
        );
    }

    #[rstest]
    fn test_sliding_by_two_keeps_trailing_window() {
        assert_eq!(
            one_to(3).sliding(2).unwrap(),
            list![list![1, 2], list![2, 3], list![3]]
        );
    }

    #[rstest]
    #[case(2, 3, list![list![1, 2], list![4, 5]])]
    #[case(2, 4, list![list![1, 2], list![5]])]
    #[case(2, 5, list![list![1, 2]])]
    fn test_sliding_with_step_skips(
        #[case] size: usize,
        #[case] step: usize,
        #[case] expected: PersistentList<PersistentList<i32>>,
    ) {
        assert_eq!(one_to(5).sliding_with_step(size, step).unwrap(), expected);
    }

    #[rstest]
    fn test_sliding_with_step_smaller_than_size() {
        assert_eq!(
            one_to(4).sliding_with_step(5, 3).unwrap(),
            list![list![1, 2, 3, 4], list![4]]
        );
    }

    #[rstest]
    #[case(0, 1, "size")]
    #[case(1, 0, "step")]
    fn test_sliding_with_step_rejects_zero(
        #[case] size: usize,
        #[case] step: usize,
        #[case] argument: &str,
    ) {
        let error = one_to(3).sliding_with_step(size, step).unwrap_err();
        assert!(matches!(
            error,
            TraversableError::InvalidArgument { argument: rejected, value: 0, .. } if rejected == argument
        ));
    }

    #[rstest]
    fn test_windows_share_the_source_suffix() {
        let list = one_to(4);
        let windows = list.sliding(4).unwrap();
        let last = windows.iter().last().unwrap();
        assert!(PersistentList::ptr_eq(last, &list.drop_first(3)));
    }
}
