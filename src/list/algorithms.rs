use crate::list::{List, NodeRef, NIL};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for elt in self {
            elt.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

impl<T> List<T> {
    /// Resolve a scan range to a pair of slot indices, or `None` if either
    /// handle is absent.
    fn resolve_range(&self, from: NodeRef, to: NodeRef) -> Option<(usize, usize)> {
        match (self.resolve(from), self.resolve(to)) {
            (Some(from), Some(to)) => Some((from, to)),
            _ => None,
        }
    }

    /// Search the half-open range `from..to` for the first element that
    /// compares [`Equal`] to `target` under the three-way comparator, and
    /// return its node.
    ///
    /// A miss is signalled by identity, not absence: if nothing in the
    /// range matches, the result is `to` itself, so searching the empty
    /// range `x..x` returns `x`. The null handle is returned only when
    /// `from` or `to` is absent. Sentinels in range are skipped, never
    /// compared.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time, where *n* is the
    /// length of the range.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    ///
    /// let found = list.find(list.start(), list.end(), &2, |a, b| a.cmp(b));
    /// assert_eq!(list.get(found), Some(&2));
    ///
    /// let missing = list.find(list.start(), list.end(), &7, |a, b| a.cmp(b));
    /// assert_eq!(missing, list.end());
    /// ```
    ///
    /// [`Equal`]: std::cmp::Ordering::Equal
    pub fn find<F>(&self, from: NodeRef, to: NodeRef, target: &T, mut compare: F) -> NodeRef
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let (mut cursor, to_index) = match self.resolve_range(from, to) {
            Some(range) => range,
            None => return NodeRef::null(),
        };
        while cursor != to_index {
            if let Some(value) = &self.nodes[cursor].value {
                if compare(value, target) == Ordering::Equal {
                    return self.handle(cursor);
                }
            }
            cursor = self.nodes[cursor].next;
            if cursor == NIL {
                return NodeRef::null();
            }
        }
        to
    }

    /// Apply `action` to every element of the half-open range `from..to`,
    /// in traversal order, until it returns `false`.
    ///
    /// The callback receives a mutable reference into the stored element,
    /// so in-place transformations are visible after the call. The result
    /// is the node at which the action called a halt — untouched by the
    /// action, ready for the caller to resume from — or `to` if the scan
    /// ran to completion. The null handle is returned only when `from` or
    /// `to` is absent.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time, where *n* is the
    /// length of the range.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3, 4, 5]);
    ///
    /// // Square values until hitting 3, which is left untouched.
    /// let (start, end) = (list.start(), list.end());
    /// let stopped = list.for_each(start, end, |value| {
    ///     if *value == 3 {
    ///         return false;
    ///     }
    ///     *value *= *value;
    ///     true
    /// });
    ///
    /// assert_eq!(list.get(stopped), Some(&3));
    /// assert_eq!(list.to_vec(), vec![1, 4, 3, 4, 5]);
    /// ```
    pub fn for_each<F>(&mut self, from: NodeRef, to: NodeRef, mut action: F) -> NodeRef
    where
        F: FnMut(&mut T) -> bool,
    {
        let (mut cursor, to_index) = match self.resolve_range(from, to) {
            Some(range) => range,
            None => return NodeRef::null(),
        };
        while cursor != to_index {
            if let Some(value) = self.nodes[cursor].value.as_mut() {
                if !action(value) {
                    return self.handle(cursor);
                }
            }
            cursor = self.nodes[cursor].next;
            if cursor == NIL {
                return NodeRef::null();
            }
        }
        to
    }

    /// Append a clone of every element of `from..to` that compares
    /// [`Equal`] to `target` onto the back of `found`, preserving encounter
    /// order.
    ///
    /// The scanned range is left untouched. Absent `from` or `to` makes the
    /// call a no-op.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time, where *n* is the
    /// length of the range.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 1, 3, 1]);
    /// let mut ones = List::new();
    ///
    /// list.find_all(list.start(), list.end(), &1, |a, b| a.cmp(b), &mut ones);
    ///
    /// assert_eq!(ones.len(), 3);
    /// assert_eq!(list.to_vec(), vec![1, 2, 1, 3, 1]);
    /// ```
    ///
    /// [`Equal`]: std::cmp::Ordering::Equal
    pub fn find_all<F>(
        &self,
        from: NodeRef,
        to: NodeRef,
        target: &T,
        mut compare: F,
        found: &mut List<T>,
    ) where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        let (mut cursor, to_index) = match self.resolve_range(from, to) {
            Some(range) => range,
            None => return,
        };
        while cursor != to_index {
            if let Some(value) = &self.nodes[cursor].value {
                if compare(value, target) == Ordering::Equal {
                    found.push_back(value.clone());
                }
            }
            cursor = self.nodes[cursor].next;
            if cursor == NIL {
                return;
            }
        }
    }

    /// Returns `true` if the `List` contains an element equal to the given
    /// value.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }
}

#[cfg(test)]
mod tests {
    use crate::list::{List, NodeRef};
    use std::iter::FromIterator;

    fn compare(a: &i32, b: &i32) -> std::cmp::Ordering {
        a.cmp(b)
    }

    #[test]
    fn find_hits_and_misses() {
        fn case(initial: Vec<i32>, target: i32, should_find: bool) {
            let list = List::from_iter(initial);
            let result = list.find(list.start(), list.end(), &target, compare);
            if should_find {
                assert_eq!(list.get(result), Some(&target));
            } else {
                assert_eq!(result, list.end());
                assert_eq!(list.get(result), None);
            }
        }
        case(vec![1, 2, 3, 4, 5], 1, true);
        case(vec![1, 2, 3, 4, 5], 3, true);
        case(vec![1, 2, 3, 4, 5], 5, true);
        case(vec![1, 2, 3, 4, 5], 6, false);
        case(vec![], 1, false);
        case(vec![101], 101, true);
        case(vec![101], 100, false);
    }

    #[test]
    fn find_returns_first_match() {
        let list = List::from_iter([1, 2, 1, 2]);
        let found = list.find(list.start(), list.end(), &2, compare);
        assert_eq!(found, list.next(list.start()));

        // Resuming past the first match finds the second.
        let again = list.find(list.next(found), list.end(), &2, compare);
        assert_eq!(again, list.prev(list.end()));
        assert_ne!(found, again);
    }

    #[test]
    fn find_empty_range_returns_its_bound() {
        let list = List::from_iter([1, 2, 3]);
        let second = list.next(list.start());
        assert_eq!(list.find(second, second, &2, compare), second);
        assert_eq!(list.find(list.end(), list.end(), &2, compare), list.end());
    }

    #[test]
    fn find_absent_arguments() {
        let list = List::from_iter([1, 2, 3]);
        let null = NodeRef::null();
        assert!(list.find(null, list.end(), &1, compare).is_null());
        assert!(list.find(list.start(), null, &1, compare).is_null());

        let mut mutated = List::from_iter([1, 2, 3]);
        let stale = mutated.start();
        mutated.remove(stale);
        assert!(mutated.find(stale, mutated.end(), &2, compare).is_null());
    }

    #[test]
    fn find_skips_sentinels() {
        let list = List::from_iter([1, 2]);
        // Scanning from the head sentinel still only compares elements.
        let head = list.prev(list.start());
        let found = list.find(head, list.end(), &1, compare);
        assert_eq!(found, list.start());
    }

    #[test]
    fn for_each_transforms_in_place() {
        fn case(initial: Vec<i32>, stop_at: Option<i32>, want: Vec<i32>) {
            let mut list = List::from_iter(initial);
            let (start, end) = (list.start(), list.end());
            let stopped = list.for_each(start, end, |value| {
                if Some(*value) == stop_at {
                    return false;
                }
                *value *= *value;
                true
            });
            assert_eq!(list.to_vec(), want);
            match stop_at {
                Some(stop) => assert_eq!(list.get(stopped), Some(&stop)),
                None => assert_eq!(stopped, end),
            }
        }
        case(vec![1, 2, 3, 4, 5], None, vec![1, 4, 9, 16, 25]);
        case(vec![1, 2, 3, 4, 5], Some(1), vec![1, 2, 3, 4, 5]);
        case(vec![1, 2, 3, 4, 5], Some(3), vec![1, 4, 3, 4, 5]);
        case(vec![], None, vec![]);
        case(vec![9], None, vec![81]);
        case(vec![9], Some(9), vec![9]);
    }

    #[test]
    fn for_each_stop_matches_find() {
        let mut list = List::from_iter([4, 8, 15, 16, 23]);
        let (start, end) = (list.start(), list.end());
        let stopped = list.for_each(start, end, |value| *value != 15);
        let found = list.find(start, end, &15, compare);
        assert_eq!(stopped, found);
    }

    #[test]
    fn for_each_absent_arguments() {
        let mut list = List::from_iter([1, 2, 3]);
        let (start, end) = (list.start(), list.end());
        assert!(list.for_each(NodeRef::null(), end, |_| true).is_null());
        assert!(list.for_each(start, NodeRef::null(), |_| true).is_null());
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn find_all_collects_in_order() {
        let list = List::from_iter([1, 2, 1, 3, 1]);
        let mut found = List::new();
        list.find_all(list.start(), list.end(), &1, compare, &mut found);
        assert_eq!(found.to_vec(), vec![1, 1, 1]);
        // The source is untouched.
        assert_eq!(list.to_vec(), vec![1, 2, 1, 3, 1]);
    }

    #[test]
    fn find_all_appends_to_destination() {
        let list = List::from_iter([5, 6, 5]);
        let mut found = List::from_iter([9]);
        list.find_all(list.start(), list.end(), &5, compare, &mut found);
        assert_eq!(found.to_vec(), vec![9, 5, 5]);
    }

    #[test]
    fn find_all_without_matches() {
        let list = List::from_iter([1, 2, 3]);
        let mut found = List::new();
        list.find_all(list.start(), list.end(), &7, compare, &mut found);
        assert!(found.is_empty());

        list.find_all(NodeRef::null(), list.end(), &1, compare, &mut found);
        assert!(found.is_empty());
    }

    #[test]
    fn list_contains() {
        let list = List::from_iter(0..3);
        assert!(list.contains(&0));
        assert!(list.contains(&2));
        assert!(!list.contains(&10));
    }

    #[test]
    fn list_comparisons() {
        let a = List::from_iter([1, 2, 3]);
        let b = List::from_iter([1, 2, 3]);
        let c = List::from_iter([1, 2, 4]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a < c);
        assert!(c > b);
    }

    #[test]
    fn list_clone_is_independent() {
        let mut original = List::from_iter([1, 2, 3]);
        let cloned = original.clone();
        original.push_back(4);
        assert_eq!(cloned.to_vec(), vec![1, 2, 3]);
        assert_eq!(original.to_vec(), vec![1, 2, 3, 4]);
    }
}
