//! Specialized collection types
//!
//! [`EntityPool`] is the owning container for transient scene objects. Each
//! element is owned by the pool from insertion until the sweep that observes
//! it dead; that sweep drops it exactly once.

pub use slotmap::{new_key_type, Key, SlotMap};

/// Objects that carry a death flag consumed by [`EntityPool::sweep_dead`]
pub trait Lifecycle {
    /// Whether the object should survive the next sweep
    fn is_alive(&self) -> bool;

    /// Set the death flag; idempotent
    fn kill(&mut self);
}

/// Insertion-ordered pool of uniquely owned entities addressed by typed keys
///
/// Keys stay valid until the element is swept; a stale key simply misses.
#[derive(Debug, Clone)]
pub struct EntityPool<K: Key, T> {
    slots: SlotMap<K, T>,
    order: Vec<K>,
}

impl<K: Key, T> Default for EntityPool<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Key, T> EntityPool<K, T> {
    /// Create an empty pool
    pub fn new() -> Self {
        Self {
            slots: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    /// Take ownership of `value`, appending it to the iteration order
    pub fn insert(&mut self, value: T) -> K {
        let key = self.slots.insert(value);
        self.order.push(key);
        key
    }

    /// Number of live elements
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the pool holds no elements
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether `key` still addresses an element
    pub fn contains(&self, key: K) -> bool {
        self.slots.contains_key(key)
    }

    /// Borrow an element
    pub fn get(&self, key: K) -> Option<&T> {
        self.slots.get(key)
    }

    /// Mutably borrow an element
    pub fn get_mut(&mut self, key: K) -> Option<&mut T> {
        self.slots.get_mut(key)
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.order.iter().copied()
    }

    /// Elements with their keys, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (K, &T)> + '_ {
        self.order
            .iter()
            .filter_map(move |&key| self.slots.get(key).map(|value| (key, value)))
    }

    /// Elements in insertion order
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.iter().map(|(_, value)| value)
    }

    /// Visit every element mutably, in insertion order
    ///
    /// The pool itself stays borrowed for the whole visit, so the visitor can
    /// insert into other pools but never into this one.
    pub fn for_each_mut(&mut self, mut visit: impl FnMut(K, &mut T)) {
        for &key in &self.order {
            if let Some(value) = self.slots.get_mut(key) {
                visit(key, value);
            }
        }
    }

}

impl<K: Key, T: Lifecycle> EntityPool<K, T> {
    /// Remove and drop every dead element, keeping survivors in order
    ///
    /// Returns the number of elements released.
    pub fn sweep_dead(&mut self) -> usize {
        let slots = &mut self.slots;
        let before = self.order.len();
        self.order.retain(|&key| {
            let alive = slots.get(key).is_some_and(Lifecycle::is_alive);
            if !alive {
                slots.remove(key);
            }
            alive
        });
        before - self.order.len()
    }

    /// Number of elements currently flagged dead
    pub fn dead_count(&self) -> usize {
        self.values().filter(|value| !value.is_alive()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    new_key_type! {
        struct TrackedKey;
    }

    /// Counts drops so double or missing releases show up
    struct Tracked {
        id: u32,
        alive: bool,
        drops: Rc<Cell<u32>>,
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    impl Lifecycle for Tracked {
        fn is_alive(&self) -> bool {
            self.alive
        }

        fn kill(&mut self) {
            self.alive = false;
        }
    }

    fn pool_of_three(drops: &Rc<Cell<u32>>) -> (EntityPool<TrackedKey, Tracked>, Vec<TrackedKey>) {
        let mut pool = EntityPool::new();
        let keys = (1..=3)
            .map(|id| {
                pool.insert(Tracked {
                    id,
                    alive: true,
                    drops: Rc::clone(drops),
                })
            })
            .collect();
        (pool, keys)
    }

    fn ids(pool: &EntityPool<TrackedKey, Tracked>) -> Vec<u32> {
        pool.values().map(|item| item.id).collect()
    }

    #[test]
    fn test_sweep_first_middle_last() {
        for (victim, expected) in [(0, vec![2, 3]), (1, vec![1, 3]), (2, vec![1, 2])] {
            let drops = Rc::new(Cell::new(0));
            let (mut pool, keys) = pool_of_three(&drops);

            pool.get_mut(keys[victim]).unwrap().kill();
            assert_eq!(pool.sweep_dead(), 1);

            assert_eq!(ids(&pool), expected);
            assert_eq!(drops.get(), 1);
            assert!(!pool.contains(keys[victim]));

            // A second sweep releases nothing further
            assert_eq!(pool.sweep_dead(), 0);
            assert_eq!(drops.get(), 1);
        }
    }

    #[test]
    fn test_sweep_adjacent_dead_neighbours() {
        let drops = Rc::new(Cell::new(0));
        let (mut pool, keys) = pool_of_three(&drops);
        pool.get_mut(keys[0]).unwrap().kill();
        pool.get_mut(keys[1]).unwrap().kill();

        assert_eq!(pool.dead_count(), 2);
        assert_eq!(pool.sweep_dead(), 2);
        assert_eq!(ids(&pool), vec![3]);
        assert_eq!(drops.get(), 2);
    }

    #[test]
    fn test_alive_elements_are_never_swept() {
        let drops = Rc::new(Cell::new(0));
        let (mut pool, _) = pool_of_three(&drops);
        assert_eq!(pool.sweep_dead(), 0);
        assert_eq!(pool.len(), 3);
        assert_eq!(drops.get(), 0);
    }

    #[test]
    fn test_insertion_order_survives_slot_reuse() {
        let drops = Rc::new(Cell::new(0));
        let (mut pool, keys) = pool_of_three(&drops);
        pool.get_mut(keys[0]).unwrap().kill();
        pool.sweep_dead();

        // The freed slot is reused, but the newcomer still iterates last
        pool.insert(Tracked {
            id: 4,
            alive: true,
            drops: Rc::clone(&drops),
        });
        assert_eq!(ids(&pool), vec![2, 3, 4]);
        assert!(!pool.contains(keys[0]));
    }

    #[test]
    fn test_for_each_mut_visits_in_order() {
        let drops = Rc::new(Cell::new(0));
        let (mut pool, _) = pool_of_three(&drops);
        let mut seen = Vec::new();
        pool.for_each_mut(|_, item| {
            seen.push(item.id);
            if item.id == 2 {
                item.kill();
            }
        });
        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(pool.dead_count(), 1);
    }

    #[test]
    fn test_dropping_pool_releases_everything_once() {
        let drops = Rc::new(Cell::new(0));
        let (pool, _) = pool_of_three(&drops);
        drop(pool);
        assert_eq!(drops.get(), 3);
    }
}
