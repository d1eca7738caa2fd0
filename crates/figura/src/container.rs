//! Insertion-ordered container with a maximum query.
//!
//! Purpose
//! - Hold an append-only sequence of values whose element type carries a
//!   total order, and answer "greatest element so far" as an `Option`.
//!
//! Why this design
//! - The order bound lives on the query impl, not the type: construction
//!   and append work for any `T`, and `maximum` is only callable when
//!   `T: Ord`. The bound is checked at compile time, no runtime type
//!   inspection.
//! - No running maximum is cached; the query is one linear scan. At the
//!   sizes this is used for, a cache would complicate the invariant
//!   (append-only, insertion order observable) for no measured win.
//! - An empty container has no maximum; that is a normal outcome, so the
//!   query returns `None` rather than an error.

/// Append-only sequence over `T`, insertion order preserved, duplicates
/// permitted. Grows only via [`append`](OrderedContainer::append); there
/// is no removal.
#[derive(Clone, Debug)]
pub struct OrderedContainer<T> {
    items: Vec<T>,
}

impl<T> Default for OrderedContainer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OrderedContainer<T> {
    /// Empty container.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append `item` at the end. Infallible, amortized O(1).
    #[inline]
    pub fn append(&mut self, item: T) {
        self.items.push(item);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate in insertion order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Ord> OrderedContainer<T> {
    /// Greatest element under `T`'s total order, or `None` when empty.
    ///
    /// Single O(n) scan. When several elements are equal to the maximum,
    /// which one is returned is unspecified; callers must not rely on a
    /// particular index among ties.
    #[inline]
    pub fn maximum(&self) -> Option<&T> {
        self.items.iter().max()
    }
}

impl<T> Extend<T> for OrderedContainer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for OrderedContainer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: Vec::from_iter(iter),
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedContainer<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
