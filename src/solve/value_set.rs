use std::fmt::{Debug, Formatter};

use crate::puzzle::{Value, GRID_WIDTH};

const ALL_VALUES: u16 = (1 << GRID_WIDTH) - 1;

/// A set of candidate values 1-9 for one cell, stored as a bitmask
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) struct ValueSet(u16);

impl ValueSet {
    pub fn new() -> Self {
        ValueSet(0)
    }

    pub fn with_all() -> Self {
        ValueSet(ALL_VALUES)
    }

    pub fn single(value: Value) -> Self {
        ValueSet(bit(value))
    }

    pub fn contains(self, n: Value) -> bool {
        self.0 & bit(n) != 0
    }

    pub fn insert(&mut self, n: Value) -> bool {
        let inserted = !self.contains(n);
        self.0 |= bit(n);
        inserted
    }

    pub fn remove(&mut self, n: Value) -> bool {
        let removed = self.contains(n);
        self.0 &= !bit(n);
        removed
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn single_value(self) -> Option<Value> {
        if self.len() == 1 {
            Some(self.0.trailing_zeros() as Value + 1)
        } else {
            None
        }
    }

    pub fn iter(self) -> impl Iterator<Item = Value> {
        (1..=GRID_WIDTH as Value).filter(move |&n| self.contains(n))
    }
}

fn bit(value: Value) -> u16 {
    debug_assert!(value >= 1 && value <= GRID_WIDTH as Value);
    1 << (value - 1)
}

impl Debug for ValueSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Extend<Value> for ValueSet {
    fn extend<T: IntoIterator<Item = Value>>(&mut self, iter: T) {
        for n in iter {
            self.insert(n);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ValueSet;

    #[test]
    fn insert_remove_result() {
        let mut set = ValueSet::new();
        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert!(set.remove(1));
        assert!(!set.remove(1));
    }

    #[test]
    fn with_all() {
        let set = ValueSet::with_all();
        assert_eq!(9, set.len());
        assert!((1..=9).all(|n| set.contains(n)));
    }

    #[test]
    fn iter() {
        let mut set = ValueSet::new();
        set.insert(3);
        set.insert(1);
        let vec: Vec<_> = set.iter().collect();
        assert_eq!(vec![1, 3], vec);
    }

    #[test]
    fn single_value() {
        let mut set = ValueSet::new();
        assert_eq!(None, set.single_value());
        set.insert(1);
        assert_eq!(Some(1), set.single_value());
        set.insert(2);
        assert_eq!(None, set.single_value());
        set.remove(1);
        assert_eq!(Some(2), set.single_value());
        set.remove(2);
        assert_eq!(None, set.single_value());
    }
}
