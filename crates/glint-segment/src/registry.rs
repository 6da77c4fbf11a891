//! Handle-keyed surface over break iterators.
//!
//! [`BreakRegistry`] is the safe rendition of the old open/navigate/close
//! bridge: callers hold a [`BreakHandle`] instead of a raw pointer, `close`
//! is exactly-once, and any call after `close` fails with a handle error
//! instead of touching freed memory.

use glint_core::error::Result;
use glint_core::{Handle, HandleTable};
use parking_lot::RwLock;

use crate::iterator::{BreakIterator, BreakKind};

pub type BreakHandle = Handle<BreakIterator>;

/// Table of open break iterators, shareable across threads.
///
/// Individual iterators are not internally synchronized; the registry locks
/// per call, which serializes access to any one handle.
#[derive(Default)]
pub struct BreakRegistry {
    table: RwLock<HandleTable<BreakIterator>>,
}

impl BreakRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an iterator and register it. See [`BreakIterator::new`].
    pub fn open(&self, kind: BreakKind, locale_tag: Option<&str>) -> Result<BreakHandle> {
        let iterator = BreakIterator::new(kind, locale_tag)?;
        Ok(self.table.write().insert(iterator))
    }

    /// Attach text to an open iterator. See [`BreakIterator::set_text`].
    pub fn set_text(&self, handle: BreakHandle, text: &str) -> Result<()> {
        self.table.write().get_mut(handle)?.set_text(text)?;
        Ok(())
    }

    pub fn current(&self, handle: BreakHandle) -> Result<i32> {
        Ok(self.table.read().get(handle)?.current())
    }

    pub fn next(&self, handle: BreakHandle) -> Result<i32> {
        Ok(self.table.write().get_mut(handle)?.next())
    }

    pub fn previous(&self, handle: BreakHandle) -> Result<i32> {
        Ok(self.table.write().get_mut(handle)?.previous())
    }

    pub fn first(&self, handle: BreakHandle) -> Result<i32> {
        Ok(self.table.write().get_mut(handle)?.first())
    }

    pub fn last(&self, handle: BreakHandle) -> Result<i32> {
        Ok(self.table.write().get_mut(handle)?.last())
    }

    pub fn preceding(&self, handle: BreakHandle, offset: i32) -> Result<i32> {
        Ok(self.table.write().get_mut(handle)?.preceding(offset))
    }

    pub fn following(&self, handle: BreakHandle, offset: i32) -> Result<i32> {
        Ok(self.table.write().get_mut(handle)?.following(offset))
    }

    pub fn is_boundary(&self, handle: BreakHandle, offset: i32) -> Result<bool> {
        Ok(self.table.write().get_mut(handle)?.is_boundary(offset))
    }

    pub fn rule_status(&self, handle: BreakHandle) -> Result<i32> {
        Ok(self.table.read().get(handle)?.rule_status())
    }

    pub fn rule_statuses_len(&self, handle: BreakHandle) -> Result<usize> {
        Ok(self.table.read().get(handle)?.rule_statuses_len())
    }

    pub fn rule_statuses(&self, handle: BreakHandle, dest: &mut [i32]) -> Result<usize> {
        Ok(self.table.read().get(handle)?.rule_statuses(dest)?)
    }

    pub fn rule_status_vec(&self, handle: BreakHandle) -> Result<Vec<i32>> {
        Ok(self.table.read().get(handle)?.rule_status_vec())
    }

    /// Dispose an iterator. Exactly-once: a second close fails with
    /// [`glint_core::HandleError::Stale`].
    pub fn close(&self, handle: BreakHandle) -> Result<()> {
        let iterator = self.table.write().remove(handle)?;
        log::debug!("closed {:?} break iterator", iterator.kind());
        Ok(())
    }

    /// Number of currently open iterators.
    pub fn open_count(&self) -> usize {
        self.table.read().len()
    }
}
