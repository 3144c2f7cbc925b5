//! Conversion into standard collections and output to streams.

use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::hash::Hash;
use std::io::{self, Write};

use crate::error::{Result, TraversableError};
use crate::persistent::PersistentList;

impl<T> PersistentList<T> {
    /// Builds a map from the key-value pair `key_value` produces for each
    /// element. Later elements win on duplicate keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::list;
    ///
    /// let map = list!["a", "bb"].to_hash_map(|word| (*word, word.len()));
    /// assert_eq!(map.get("bb"), Some(&2));
    /// ```
    pub fn to_hash_map<K, V, F>(&self, key_value: F) -> HashMap<K, V>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> (K, V),
    {
        self.iter().map(key_value).collect()
    }

    /// Writes every element on its own line.
    ///
    /// # Errors
    ///
    /// Returns [`TraversableError::Output`] if the writer fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::list;
    ///
    /// let mut buffer = Vec::new();
    /// list![1, 2].write_to(&mut buffer).unwrap();
    /// assert_eq!(buffer, b"1\n2\n");
    /// ```
    pub fn write_to<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write + ?Sized,
        T: Display,
    {
        self.iter()
            .try_for_each(|element| writeln!(writer, "{element}"))
            .and_then(|()| writer.flush())
            .map_err(|error| {
                tracing::debug!(%error, "failed to write sequence");
                TraversableError::Output(error)
            })
    }

    /// Writes every element on its own line to standard output.
    ///
    /// # Errors
    ///
    /// Returns [`TraversableError::Output`] if standard output is closed.
    pub fn stdout(&self) -> Result<()>
    where
        T: Display,
    {
        self.write_to(&mut io::stdout().lock())
    }

    /// Writes every element on its own line to standard error.
    ///
    /// # Errors
    ///
    /// Returns [`TraversableError::Output`] if standard error is closed.
    pub fn stderr(&self) -> Result<()>
    where
        T: Display,
    {
        self.write_to(&mut io::stderr().lock())
    }
}

impl<T: Clone> PersistentList<T> {
    /// Copies the elements into a `Vec`, head first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Copies the distinct elements into a `HashSet`.
    #[must_use]
    pub fn to_hash_set(&self) -> HashSet<T>
    where
        T: Eq + Hash,
    {
        self.iter().cloned().collect()
    }
}
