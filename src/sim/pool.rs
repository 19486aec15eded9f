//! Fixed-capacity entity pools
//!
//! Every slot is pre-constructed inactive when a session starts. Spawning
//! re-initializes the first inactive slot in place; destroying flips the
//! active flag back. Capacity never changes after construction, which bounds
//! worst-case per-tick work. A spawn request against a full pool is dropped,
//! not an error.

use serde::{Deserialize, Serialize};

/// Implemented by anything a [`Pool`] can recycle.
pub trait Slot {
    fn is_active(&self) -> bool;
    /// The sole destroy operation. Must be idempotent.
    fn deactivate(&mut self);
}

/// Fixed-capacity arena of one entity kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pool<T> {
    slots: Vec<T>,
}

impl<T: Slot + Default> Pool<T> {
    /// Pre-construct `capacity` inactive slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| T::default()).collect(),
        }
    }
}

impl<T: Slot> Pool<T> {
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// First inactive slot in scan order, or `None` when the pool is full.
    pub fn allocate(&mut self) -> Option<&mut T> {
        self.slots.iter_mut().find(|slot| !slot.is_active())
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_active()).count()
    }

    /// Active slots in pool order. Pool order is stable and doubles as the
    /// draw order within a kind.
    pub fn iter_active(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter(|slot| slot.is_active())
    }

    pub fn iter_active_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut().filter(|slot| slot.is_active())
    }

    pub fn slots(&self) -> &[T] {
        &self.slots
    }

    /// Raw slot access for pairwise passes that scan two pools at once.
    pub fn slots_mut(&mut self) -> &mut [T] {
        &mut self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, Default)]
    struct Dummy {
        active: bool,
        tag: u32,
    }

    impl Slot for Dummy {
        fn is_active(&self) -> bool {
            self.active
        }
        fn deactivate(&mut self) {
            self.active = false;
        }
    }

    #[test]
    fn test_allocate_returns_first_inactive() {
        let mut pool: Pool<Dummy> = Pool::new(3);
        pool.slots_mut()[0].active = true;

        let slot = pool.allocate().unwrap();
        slot.active = true;
        slot.tag = 7;

        assert_eq!(pool.slots()[1].tag, 7);
        assert!(pool.slots()[1].active);
        assert!(!pool.slots()[2].active);
    }

    #[test]
    fn test_full_pool_drops_the_request() {
        let mut pool: Pool<Dummy> = Pool::new(2);
        for _ in 0..2 {
            pool.allocate().unwrap().active = true;
        }
        assert!(pool.allocate().is_none());
        assert_eq!(pool.active_count(), 2);
    }

    #[test]
    fn test_deactivate_is_idempotent() {
        let mut pool: Pool<Dummy> = Pool::new(1);
        pool.allocate().unwrap().active = true;

        pool.slots_mut()[0].deactivate();
        pool.slots_mut()[0].deactivate();
        assert_eq!(pool.active_count(), 0);
    }

    #[test]
    fn test_iter_active_follows_pool_order() {
        let mut pool: Pool<Dummy> = Pool::new(4);
        for (i, slot) in pool.slots_mut().iter_mut().enumerate() {
            slot.active = i % 2 == 0;
            slot.tag = i as u32;
        }
        let tags: Vec<u32> = pool.iter_active().map(|slot| slot.tag).collect();
        assert_eq!(tags, vec![0, 2]);
    }

    proptest! {
        /// Active count never exceeds capacity for any spawn/despawn sequence.
        #[test]
        fn prop_capacity_invariant(ops in proptest::collection::vec(any::<(bool, u8)>(), 0..200)) {
            let mut pool: Pool<Dummy> = Pool::new(10);
            for (spawn, index) in ops {
                if spawn {
                    if let Some(slot) = pool.allocate() {
                        slot.active = true;
                    }
                } else {
                    let i = index as usize % pool.capacity();
                    pool.slots_mut()[i].deactivate();
                }
                prop_assert!(pool.active_count() <= pool.capacity());
            }
        }
    }
}
