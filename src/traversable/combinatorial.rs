//! Pairing lists element by element, and splitting pairs apart again.

use crate::persistent::PersistentList;

impl<T: Clone> PersistentList<T> {
    /// Pairs up the elements of two lists.
    ///
    /// The result is as long as the shorter list; the surplus of the longer
    /// one is ignored.
    ///
    /// # Complexity
    ///
    /// O(min(n, m)) where n and m are the lengths of the two lists
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::list;
    ///
    /// let numbers = list![1, 2, 3];
    /// let letters = list!['a', 'b'];
    /// assert_eq!(numbers.zip(&letters), list![(1, 'a'), (2, 'b')]);
    /// ```
    #[must_use]
    pub fn zip<U: Clone>(&self, other: &PersistentList<U>) -> PersistentList<(T, U)> {
        self.iter()
            .zip(other.iter())
            .map(|(a, b)| (a.clone(), b.clone()))
            .collect()
    }

    /// Pairs up the elements of two lists, padding the shorter one.
    ///
    /// The result is as long as the longer list. Missing elements of the
    /// receiver are filled with `this_pad`, missing elements of `other` with
    /// `other_pad`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::list;
    ///
    /// let letters = list!["a"];
    /// let numbers = list![1, 2];
    /// assert_eq!(letters.zip_all(&numbers, "z", 9), list![("a", 1), ("z", 2)]);
    /// assert_eq!(numbers.zip_all(&letters, 9, "z"), list![(1, "a"), (2, "z")]);
    /// ```
    #[must_use]
    pub fn zip_all<U: Clone>(
        &self,
        other: &PersistentList<U>,
        this_pad: T,
        other_pad: U,
    ) -> PersistentList<(T, U)> {
        let mut left = self.iter();
        let mut right = other.iter();
        let mut pairs = Vec::new();
        loop {
            let pair = match (left.next(), right.next()) {
                (Some(a), Some(b)) => (a.clone(), b.clone()),
                (Some(a), None) => (a.clone(), other_pad.clone()),
                (None, Some(b)) => (this_pad.clone(), b.clone()),
                (None, None) => break,
            };
            pairs.push(pair);
        }
        PersistentList::of(pairs)
    }

    /// Pairs every element with its position, counting from 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::list;
    ///
    /// assert_eq!(list!['a', 'b'].zip_with_index(), list![('a', 0), ('b', 1)]);
    /// ```
    #[must_use]
    pub fn zip_with_index(&self) -> PersistentList<(T, usize)> {
        self.iter()
            .enumerate()
            .map(|(index, element)| (element.clone(), index))
            .collect()
    }
}

impl<T> PersistentList<T> {
    /// Splits every element into a pair and separates the two halves.
    ///
    /// Both resulting lists keep the order of the receiver.
    ///
    /// # Complexity
    ///
    /// O(n) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::list;
    ///
    /// let words = list!["a1", "b2"];
    /// let (letters, digits) = words.unzip(|word| {
    ///     let (letter, digit) = word.split_at(1);
    ///     (letter.to_string(), digit.to_string())
    /// });
    /// assert_eq!(letters, list!["a".to_string(), "b".to_string()]);
    /// assert_eq!(digits, list!["1".to_string(), "2".to_string()]);
    /// ```
    pub fn unzip<A, B, F>(&self, mut splitter: F) -> (PersistentList<A>, PersistentList<B>)
    where
        F: FnMut(&T) -> (A, B),
    {
        let (first_elements, second_elements): (Vec<A>, Vec<B>) =
            self.iter().map(|element| splitter(element)).unzip();
        (
            PersistentList::of(first_elements),
            PersistentList::of(second_elements),
        )
    }
}
