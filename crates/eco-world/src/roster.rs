//! Ordered population storage.
//!
//! Members are looked up by id; the acting order is a separate list. An agent
//! can be stored (and so be visible to its neighbours) before it is enlisted
//! in the acting order, which is how newborns sit out the step that created
//! them.

use std::collections::HashMap;
use std::hash::Hash;

pub struct Roster<I, T> {
    members: HashMap<I, T>,
    order: Vec<I>,
}

impl<I: Copy + Eq + Hash, T> Roster<I, T> {
    pub fn new() -> Self {
        Self {
            members: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Store an agent without giving it a place in the acting order
    pub fn insert(&mut self, id: I, agent: T) {
        self.members.insert(id, agent);
    }

    /// Append stored agents to the acting order
    pub fn enlist(&mut self, ids: impl IntoIterator<Item = I>) {
        self.order.extend(ids);
    }

    pub fn get(&self, id: I) -> Option<&T> {
        self.members.get(&id)
    }

    pub fn get_mut(&mut self, id: I) -> Option<&mut T> {
        self.members.get_mut(&id)
    }

    /// Take an agent out while it acts; pair with [`Roster::insert`]
    pub fn take(&mut self, id: I) -> Option<T> {
        self.members.remove(&id)
    }

    /// Acting order snapshot
    pub fn ids(&self) -> Vec<I> {
        self.order.clone()
    }

    /// Rebuild the acting order from members that pass `keep`, dropping the
    /// rest from storage. Relative order is preserved.
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) {
        let members = &mut self.members;
        self.order.retain(|id| match members.get(id) {
            Some(agent) if keep(agent) => true,
            _ => {
                members.remove(id);
                false
            }
        });
    }

    /// Enlisted agents in acting order
    pub fn iter(&self) -> impl Iterator<Item = (I, &T)> + '_ {
        self.order
            .iter()
            .filter_map(move |id| self.members.get(id).map(|agent| (*id, agent)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.members.clear();
        self.order.clear();
    }
}

impl<I: Copy + Eq + Hash, T> Default for Roster<I, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_not_enlist() {
        let mut roster: Roster<u32, &str> = Roster::new();
        roster.insert(1, "a");
        assert_eq!(roster.get(1), Some(&"a"));
        assert!(roster.is_empty());

        roster.enlist([1]);
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.ids(), vec![1]);
    }

    #[test]
    fn test_retain_preserves_order_and_drops_members() {
        let mut roster = Roster::new();
        for (id, alive) in [(1u32, true), (2, false), (3, true), (4, false)] {
            roster.insert(id, alive);
        }
        roster.enlist([1, 2, 3, 4]);

        roster.retain(|alive| *alive);
        assert_eq!(roster.ids(), vec![1, 3]);
        assert!(roster.get(2).is_none());
        assert!(roster.get(4).is_none());
    }

    #[test]
    fn test_take_and_reinsert() {
        let mut roster = Roster::new();
        roster.insert(5u32, 10);
        roster.enlist([5]);

        let mut value = roster.take(5).unwrap();
        assert!(roster.get(5).is_none());
        value += 1;
        roster.insert(5, value);

        let items: Vec<_> = roster.iter().map(|(id, v)| (id, *v)).collect();
        assert_eq!(items, vec![(5, 11)]);
    }

    #[test]
    fn test_clear() {
        let mut roster = Roster::new();
        roster.insert(1u32, ());
        roster.enlist([1]);
        roster.clear();
        assert!(roster.is_empty());
        assert!(roster.get(1).is_none());
    }
}
