//! Module for a singly linked list and its in-place right rotation

use std::fmt;

use crate::error::{ExerciseError, Result};

/// A node owning its value and the rest of the list
#[derive(Debug)]
pub struct ListNode<T> {
    pub value: T,
    pub next: Option<Box<ListNode<T>>>,
}

impl<T> ListNode<T> {
    pub fn new(value: T) -> Self {
        Self { value, next: None }
    }
}

/// A value together with its position in the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeEntry<'a, T> {
    pub value: &'a T,
    pub position: usize,
}

/// Singly linked list of boxed nodes
#[derive(Debug)]
pub struct SinglyLinkedList<T> {
    head: Option<Box<ListNode<T>>>,
}

impl<T> SinglyLinkedList<T> {
    pub fn new() -> Self {
        Self { head: None }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of nodes, walking the whole list
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn head(&self) -> Option<&ListNode<T>> {
        self.head.as_deref()
    }

    /// Iterates the values from head to tail
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Iterates the values with their positions
    pub fn entries(&self) -> impl Iterator<Item = NodeEntry<'_, T>> {
        self.iter()
            .enumerate()
            .map(|(position, value)| NodeEntry { value, position })
    }

    /// Rotates the list right by `n` positions, in place.
    ///
    /// The last `n mod len` nodes move, in order, to the front. Nodes are
    /// relinked, never copied or reallocated, and the list stays untouched
    /// when the call is rejected.
    ///
    /// # Errors
    /// `InvalidInput` when the list is empty (no head) or `n` is negative.
    ///
    /// # Examples
    /// ```
    /// use scan_exercises::list::SinglyLinkedList;
    ///
    /// let mut list: SinglyLinkedList<_> = ["A", "B", "C", "D", "E"].into_iter().collect();
    /// list.rotate_right(2).unwrap();
    /// assert_eq!(list.to_string(), "D -> E -> A -> B -> C");
    /// ```
    pub fn rotate_right(&mut self, n: i64) -> Result<()> {
        if self.head.is_none() {
            return Err(ExerciseError::invalid("list head cannot be absent"));
        }
        if n < 0 {
            return Err(ExerciseError::invalid("rotation count cannot be negative"));
        }

        let len = self.len();
        let _span = tracing::debug_span!("rotate_right", len, n).entered();
        if len < 2 || n == 0 {
            return Ok(());
        }

        // Effective rotation from the true length; n may exceed it.
        let shift = (n as u64 % len as u64) as usize;
        tracing::debug!(len, n, shift, "rotating list");
        if shift == 0 {
            return Ok(());
        }

        let Some(mut new_head) = self.split_after(len - shift) else {
            return Ok(());
        };

        // Close the ring virtually: the old head follows the old tail.
        let mut tail = &mut new_head;
        loop {
            match tail.next {
                Some(ref mut next) => tail = next,
                None => break,
            }
        }
        tail.next = self.head.take();
        self.head = Some(new_head);

        Ok(())
    }

    /// Detaches and returns everything after the first `count` nodes.
    fn split_after(&mut self, count: usize) -> Option<Box<ListNode<T>>> {
        if count == 0 {
            return self.head.take();
        }
        let mut cursor = self.head.as_mut()?;
        for _ in 1..count {
            match cursor.next {
                Some(ref mut next) => cursor = next,
                None => return None,
            }
        }
        cursor.next.take()
    }

    /// Prepends `value`, making it the new head
    pub fn push_front(&mut self, value: T) {
        let mut node = Box::new(ListNode::new(value));
        node.next = self.head.take();
        self.head = Some(node);
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut values: Vec<T> = iter.into_iter().collect();
        let mut list = SinglyLinkedList::new();
        while let Some(value) = values.pop() {
            list.push_front(value);
        }
        list
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        // Unlink iteratively; the default recursive drop can overflow the stack.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T: fmt::Display> fmt::Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "null");
        }
        for (position, value) in self.iter().enumerate() {
            if position > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

/// Borrowing iterator over list values
pub struct Iter<'a, T> {
    next: Option<&'a ListNode<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn list(values: &[&'static str]) -> SinglyLinkedList<&'static str> {
        values.iter().copied().collect()
    }

    fn node_addresses<T>(list: &SinglyLinkedList<T>) -> Vec<*const ListNode<T>> {
        let mut addresses = Vec::new();
        let mut cursor = list.head();
        while let Some(node) = cursor {
            addresses.push(node as *const ListNode<T>);
            cursor = node.next.as_deref();
        }
        addresses
    }

    #[test]
    fn worked_example() {
        let mut letters = list(&["A", "B", "C", "D", "E"]);
        letters.rotate_right(2).unwrap();
        assert_eq!(letters.to_string(), "D -> E -> A -> B -> C");
    }

    #[test]
    fn single_node_is_unchanged() {
        for n in [0, 1, 2, 17] {
            let mut single = list(&["A"]);
            single.rotate_right(n).unwrap();
            assert_eq!(single.to_string(), "A");
        }
    }

    #[test]
    fn zero_and_full_turns_are_no_ops() {
        for n in [0, 5, 10] {
            let mut letters = list(&["A", "B", "C", "D", "E"]);
            letters.rotate_right(n).unwrap();
            assert_eq!(letters.to_string(), "A -> B -> C -> D -> E");
        }
    }

    #[test]
    fn rotation_larger_than_length_wraps() {
        let mut letters = list(&["A", "B", "C", "D", "E"]);
        letters.rotate_right(7).unwrap();
        assert_eq!(letters.to_string(), "D -> E -> A -> B -> C");
    }

    #[test]
    fn rotation_by_length_minus_one() {
        let mut letters = list(&["A", "B", "C"]);
        letters.rotate_right(2).unwrap();
        assert_eq!(letters.to_string(), "B -> C -> A");
    }

    #[test]
    fn empty_list_is_rejected() {
        let mut empty: SinglyLinkedList<&str> = SinglyLinkedList::new();
        assert!(matches!(
            empty.rotate_right(1),
            Err(ExerciseError::InvalidInput(_))
        ));
    }

    #[test]
    fn negative_rotation_is_rejected_and_list_kept() {
        let mut letters = list(&["A", "B", "C"]);
        assert!(matches!(
            letters.rotate_right(-1),
            Err(ExerciseError::InvalidInput(_))
        ));
        assert_eq!(letters.to_string(), "A -> B -> C");
    }

    #[test]
    fn rotation_relinks_existing_nodes() {
        let mut letters = list(&["A", "B", "C", "D", "E"]);
        let before = node_addresses(&letters);
        letters.rotate_right(2).unwrap();
        let after = node_addresses(&letters);
        let expected: Vec<_> = before[3..].iter().chain(&before[..3]).copied().collect();
        assert_eq!(after, expected);
    }

    #[test]
    fn entries_carry_positions() {
        let letters = list(&["A", "B"]);
        let entries: Vec<_> = letters.entries().collect();
        assert_eq!(entries[1], NodeEntry { value: &"B", position: 1 });
    }

    #[test]
    fn empty_list_displays_null() {
        assert_eq!(SinglyLinkedList::<i32>::new().to_string(), "null");
    }

    #[test]
    fn long_list_drops_without_overflow() {
        let long: SinglyLinkedList<u32> = (0..200_000).collect();
        assert_eq!(long.len(), 200_000);
    }

    proptest! {
        /// Property: rotating by n then by (len - n) mod len restores the list
        #[test]
        fn prop_rotation_round_trip(
            values in prop::collection::vec(0u32..100, 1..30),
            n in 0i64..100
        ) {
            let mut rotated: SinglyLinkedList<u32> = values.iter().copied().collect();
            let len = values.len() as i64;
            rotated.rotate_right(n).unwrap();
            rotated.rotate_right((len - n % len) % len).unwrap();
            prop_assert_eq!(rotated.iter().copied().collect::<Vec<_>>(), values);
        }

        /// Property: rotation agrees with slice rotation and keeps every node
        #[test]
        fn prop_matches_slice_rotation(
            values in prop::collection::vec(0u32..100, 1..30),
            n in 0i64..100
        ) {
            let mut rotated: SinglyLinkedList<u32> = values.iter().copied().collect();
            rotated.rotate_right(n).unwrap();
            let mut expected = values.clone();
            expected.rotate_right((n as usize) % values.len());
            prop_assert_eq!(rotated.len(), values.len());
            prop_assert_eq!(rotated.iter().copied().collect::<Vec<_>>(), expected);
        }
    }
}
