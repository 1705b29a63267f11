use std::borrow::Cow;
use std::cmp::Ordering;

/// Capability a collection needs to be fuzzy-sorted in place.
///
/// Indices are always in `0..len()`. An out-of-range index is a bug in the
/// implementation and may panic.
pub trait Sortable {
    /// Number of elements
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Natural order of two elements, used to break score ties
    fn compare(&self, i: usize, j: usize) -> Ordering;

    /// Swap two elements in place
    fn swap(&mut self, i: usize, j: usize);

    /// String the query is matched against
    fn sort_key(&self, i: usize) -> Cow<'_, str>;
}

/// Sortable view over a mutable slice with the key taken from a closure.
///
/// ```
/// use kissbot_fuzzy_sort::{rank_default, KeyedSlice};
///
/// #[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
/// struct Folder { path: String }
///
/// let mut folders = vec![
///     Folder { path: "/home/me/Music".into() },
///     Folder { path: "/home/me/Documents".into() },
/// ];
///
/// let results = {
///     let mut view = KeyedSlice::new(&mut folders, |f: &Folder| {
///         f.path.rsplit('/').next().unwrap_or("").to_string()
///     });
///     rank_default(&mut view, "doc")
/// };
///
/// assert!(results[0].matched);
/// assert_eq!(folders[0].path, "/home/me/Documents");
/// ```
pub struct KeyedSlice<'a, T, K, C> {
    items: &'a mut [T],
    key: K,
    order: C,
}

impl<'a, T, K> KeyedSlice<'a, T, K, fn(&T, &T) -> Ordering>
where
    T: Ord,
{
    /// View ordered by `T`'s own `Ord` on ties
    pub fn new(items: &'a mut [T], key: K) -> Self {
        Self {
            items,
            key,
            order: T::cmp,
        }
    }
}

impl<'a, T, K, C> KeyedSlice<'a, T, K, C> {
    /// View ordered by `order` on ties
    pub fn with_order(items: &'a mut [T], key: K, order: C) -> Self {
        Self { items, key, order }
    }

    pub fn items(&self) -> &[T] {
        &*self.items
    }
}

impl<T, K, C> Sortable for KeyedSlice<'_, T, K, C>
where
    K: Fn(&T) -> String,
    C: Fn(&T, &T) -> Ordering,
{
    fn len(&self) -> usize {
        self.items.len()
    }

    fn compare(&self, i: usize, j: usize) -> Ordering {
        (self.order)(&self.items[i], &self.items[j])
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.items.swap(i, j);
    }

    fn sort_key(&self, i: usize) -> Cow<'_, str> {
        Cow::Owned((self.key)(&self.items[i]))
    }
}
