//! Traits which, typically, may be imported without concern: `use cmdreader::prelude::*`.
use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};

/// Behaviour for multiple (0 to many) items T to be collected together.
// Needs to be imported in order to implement a custom `Collectable`.
pub trait Collectable<T> {
    /// Add a value to this `Collectable`.
    fn add(&mut self, item: T);
}

impl<T> Collectable<T> for Vec<T> {
    fn add(&mut self, item: T) {
        self.push(item);
    }
}

impl<T> Collectable<T> for VecDeque<T> {
    fn add(&mut self, item: T) {
        self.push_back(item);
    }
}

impl<T> Collectable<T> for LinkedList<T> {
    fn add(&mut self, item: T) {
        self.push_back(item);
    }
}

impl<T: Eq + std::hash::Hash> Collectable<T> for HashSet<T> {
    fn add(&mut self, item: T) {
        self.insert(item);
    }
}

impl<T: Ord> Collectable<T> for BTreeSet<T> {
    fn add(&mut self, item: T) {
        self.insert(item);
    }
}

// The container is only constructed once the first item arrives.
impl<C, T> Collectable<T> for Option<C>
where
    C: Collectable<T> + Default,
{
    fn add(&mut self, item: T) {
        self.get_or_insert_with(C::default).add(item);
    }
}

/// Behaviour for a closed set of named constants (typically a unit-only enum).
/// Derive it with `#[derive(Enumerated)]`.
pub trait Enumerated: Sized {
    /// The declared constant names, in declaration order.
    fn constants() -> &'static [&'static str];

    /// Look up a constant by its exact name.
    fn from_constant(name: &str) -> Option<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec() {
        let mut collection: Vec<u32> = Vec::default();
        collection.add(1);
        collection.add(0);
        assert_eq!(collection, vec![1, 0]);
    }

    #[test]
    fn hash_set() {
        let mut collection: HashSet<u32> = HashSet::default();
        collection.add(1);
        collection.add(0);
        collection.add(1);
        assert_eq!(collection, HashSet::from([1, 0]));
    }

    #[test]
    fn btree_set() {
        let mut collection: BTreeSet<&str> = BTreeSet::default();
        collection.add("b");
        collection.add("a");
        collection.add("b");
        assert_eq!(collection.into_iter().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn queues() {
        let mut deque: VecDeque<u32> = VecDeque::default();
        deque.add(2);
        deque.add(1);
        assert_eq!(deque, VecDeque::from([2, 1]));

        let mut linked: LinkedList<u32> = LinkedList::default();
        linked.add(2);
        linked.add(1);
        assert_eq!(linked.into_iter().collect::<Vec<_>>(), vec![2, 1]);
    }

    #[test]
    fn option_lazy() {
        let mut collection: Option<Vec<u32>> = None;
        collection.add(3);
        collection.add(4);
        assert_eq!(collection, Some(vec![3, 4]));
    }
}
