//! Generation-checked handle table
//!
//! A [`HandleTable`] owns resources and hands out [`Handle`]s: small `Copy`
//! identifiers carrying a slot index and a generation counter. Removing a
//! resource bumps its slot's generation, so every handle issued before the
//! removal turns stale and is rejected on the next use. Disposal is thereby
//! exactly-once by construction.
//!
//! Handles pack into a `u64` (and back) for callers that must store a plain
//! integer. The raw value 0 is never issued; it stays available as a null
//! marker for layers that need one.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use slab::Slab;

use crate::error::HandleError;

/// Opaque identifier for a resource owned by a [`HandleTable`].
pub struct Handle<T> {
    index: u32,
    generation: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Handle<T> {
    fn new(index: u32, generation: u32) -> Self {
        Self {
            index,
            generation,
            _marker: PhantomData,
        }
    }

    /// Pack this handle into a single integer.
    ///
    /// Generations start at 1, so the result is never 0.
    pub fn to_raw(self) -> u64 {
        (u64::from(self.generation) << 32) | u64::from(self.index)
    }

    /// Rebuild a handle from [`Handle::to_raw`] output.
    ///
    /// Returns `None` for the null value 0 (a zero generation is never
    /// issued). A reconstructed handle is still generation-checked on use,
    /// so a forged value cannot reach a live resource it never owned.
    pub fn from_raw(raw: u64) -> Option<Self> {
        let generation = (raw >> 32) as u32;
        if generation == 0 {
            return None;
        }
        Some(Self::new(raw as u32, generation))
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.generation == other.generation
    }
}

impl<T> Eq for Handle<T> {}

impl<T> Hash for Handle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
        self.generation.hash(state);
    }
}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({}v{})", self.index, self.generation)
    }
}

/// Slot arena that owns resources and validates every access.
pub struct HandleTable<T> {
    slots: Slab<T>,
    /// Per-slot generation, parallel to the slab's index space.
    /// Starts at 1 and bumps on every removal.
    generations: Vec<u32>,
}

impl<T> HandleTable<T> {
    pub fn new() -> Self {
        Self {
            slots: Slab::new(),
            generations: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Slab::with_capacity(capacity),
            generations: Vec::with_capacity(capacity),
        }
    }

    /// Take ownership of a resource and return its handle.
    pub fn insert(&mut self, value: T) -> Handle<T> {
        let index = self.slots.insert(value);
        if index >= self.generations.len() {
            self.generations.resize(index + 1, 1);
        }
        Handle::new(index as u32, self.generations[index])
    }

    /// Validate a handle and return its slot index.
    fn check(&self, handle: Handle<T>) -> Result<usize, HandleError> {
        let index = handle.index as usize;
        match self.generations.get(index) {
            None => Err(HandleError::Unknown),
            Some(&generation) if generation != handle.generation => Err(HandleError::Stale),
            Some(_) if !self.slots.contains(index) => Err(HandleError::Stale),
            Some(_) => Ok(index),
        }
    }

    pub fn get(&self, handle: Handle<T>) -> Result<&T, HandleError> {
        let index = self.check(handle)?;
        self.slots.get(index).ok_or(HandleError::Stale)
    }

    pub fn get_mut(&mut self, handle: Handle<T>) -> Result<&mut T, HandleError> {
        let index = self.check(handle)?;
        self.slots.get_mut(index).ok_or(HandleError::Stale)
    }

    /// Dispose the resource and invalidate every copy of its handle.
    ///
    /// A second `remove` with the same handle fails with
    /// [`HandleError::Stale`].
    pub fn remove(&mut self, handle: Handle<T>) -> Result<T, HandleError> {
        let index = self.check(handle)?;
        let value = self.slots.try_remove(index).ok_or(HandleError::Stale)?;
        let next = self.generations[index].wrapping_add(1);
        // Generation 0 is reserved for the null raw value.
        self.generations[index] = if next == 0 { 1 } else { next };
        Ok(value)
    }

    pub fn contains(&self, handle: Handle<T>) -> bool {
        self.check(handle).is_ok()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<T> Default for HandleTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_then_get_returns_the_value() {
        let mut table = HandleTable::new();
        let handle = table.insert("texture");
        assert_eq!(table.get(handle), Ok(&"texture"));
        assert!(table.contains(handle));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn remove_is_exactly_once() {
        let mut table = HandleTable::new();
        let handle = table.insert(7u32);
        assert_eq!(table.remove(handle), Ok(7));
        assert_eq!(table.remove(handle), Err(HandleError::Stale));
        assert_eq!(table.get(handle), Err(HandleError::Stale));
    }

    #[test]
    fn reused_slot_rejects_the_old_handle() {
        let mut table = HandleTable::new();
        let old = table.insert(1u32);
        table.remove(old).ok();
        let new = table.insert(2u32);
        // Slab reuses the freed slot, but the generation moved on.
        assert_eq!(table.get(old), Err(HandleError::Stale));
        assert_eq!(table.get(new), Ok(&2));
        assert_ne!(old, new);
    }

    #[test]
    fn never_issued_handles_are_unknown() {
        let table: HandleTable<u32> = HandleTable::new();
        let forged = Handle::<u32>::from_raw((1u64 << 32) | 42);
        let forged = forged.unwrap();
        assert_eq!(table.get(forged), Err(HandleError::Unknown));
    }

    #[test]
    fn raw_round_trip_preserves_identity() {
        let mut table = HandleTable::new();
        let handle = table.insert("x");
        let raw = handle.to_raw();
        assert_ne!(raw, 0);
        assert_eq!(Handle::<&str>::from_raw(raw), Some(handle));
    }

    #[test]
    fn raw_zero_is_the_null_handle() {
        assert_eq!(Handle::<u32>::from_raw(0), None);
    }

    #[test]
    fn get_mut_allows_in_place_mutation() {
        let mut table = HandleTable::new();
        let handle = table.insert(vec![1, 2]);
        if let Ok(value) = table.get_mut(handle) {
            value.push(3);
        }
        assert_eq!(table.get(handle).map(Vec::len), Ok(3));
    }
}
