//! LIFO stack of coordinates used as traversal scratch space.

use crate::coord::Coord;

/// A growable last-in first-out sequence of [`Coord`]s.
///
/// Backed by a `Vec`, so it can hold every cell of the largest grid without
/// a fixed capacity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stack {
    items: Vec<Coord>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Stack {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, coord: Coord) {
        self.items.push(coord);
    }

    pub fn pop(&mut self) -> Option<Coord> {
        self.items.pop()
    }

    /// The most recently pushed coordinate, without removing it.
    pub fn peek(&self) -> Option<Coord> {
        self.items.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Drop every entry, keeping the allocation.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Entries from bottom (first pushed) to top.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.items.iter().copied()
    }

    pub fn as_slice(&self) -> &[Coord] {
        &self.items
    }
}

impl Extend<Coord> for Stack {
    fn extend<I: IntoIterator<Item = Coord>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl IntoIterator for Stack {
    type Item = Coord;
    type IntoIter = std::vec::IntoIter<Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifo_order() {
        let mut s = Stack::new();
        assert!(s.is_empty());
        s.push(Coord::new(0, 0));
        s.push(Coord::new(0, 1));
        s.push(Coord::new(1, 1));
        assert_eq!(s.len(), 3);
        assert_eq!(s.peek(), Some(Coord::new(1, 1)));
        assert_eq!(s.pop(), Some(Coord::new(1, 1)));
        assert_eq!(s.pop(), Some(Coord::new(0, 1)));
        assert_eq!(s.pop(), Some(Coord::new(0, 0)));
        assert_eq!(s.pop(), None);
        assert!(s.is_empty());
    }

    #[test]
    fn test_iter_bottom_to_top() {
        let mut s = Stack::with_capacity(4);
        s.extend([Coord::new(2, 0), Coord::new(3, 0)]);
        let seen: Vec<_> = s.iter().collect();
        assert_eq!(seen, vec![Coord::new(2, 0), Coord::new(3, 0)]);
    }

    #[test]
    fn test_clear() {
        let mut s = Stack::new();
        s.push(Coord::new(5, 5));
        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.peek(), None);
    }

    #[test]
    fn test_grows_past_largest_grid() {
        let mut s = Stack::new();
        for i in 0..24 * 24 + 1 {
            s.push(Coord::new(i / 24, i % 24));
        }
        assert_eq!(s.len(), 577);
    }
}
