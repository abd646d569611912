//! A recycling cell pool: the reference [`CellHost`].
//!
//! The pool keeps an explicit factory map (identifier to constructor) and a
//! per-identifier free list. Dequeue pops the free list when it can, building
//! a fresh instance otherwise; [`recycle`](CellPool::recycle) returns a cell
//! to its identifier's free list. Recycled instances get
//! [`prepare_for_reuse`](crate::Cell::prepare_for_reuse) before they are
//! handed out again.

use std::collections::HashMap;

use crate::cell::Cell;
use crate::descriptor::CellFactory;
use crate::host::{CellHost, CellLease};

/// One registered cell kind: its factory and its recycled instances.
struct PoolEntry {
    factory: CellFactory,
    free: Vec<Box<dyn Cell>>,
}

/// An in-process cell host backed by per-identifier free lists.
///
/// # Example
///
/// ```
/// use rowkit::{Cell, CellHost, CellPool, TextCell};
/// use std::sync::Arc;
///
/// let mut pool = CellPool::new();
/// pool.register_cell_kind(
///     "course",
///     Arc::new(|| Box::new(TextCell::default()) as Box<dyn Cell>),
/// );
///
/// let lease = pool.dequeue_cell("course");
/// assert_eq!(pool.built_count(), 1);
///
/// pool.recycle(lease);
/// let _again = pool.dequeue_cell("course");
/// assert_eq!(pool.recycled_count(), 1);
/// ```
#[derive(Default)]
pub struct CellPool {
    entries: HashMap<&'static str, PoolEntry>,
    registrations: usize,
    built: usize,
    recycled: usize,
}

impl CellPool {
    /// Create an empty pool with no registered cell kinds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a cell to its identifier's free list.
    ///
    /// # Panics
    ///
    /// Panics if the lease's identifier was never registered with this pool;
    /// recycling into the wrong pool is a programming error.
    pub fn recycle(&mut self, lease: CellLease) {
        let (reuse_identifier, cell) = lease.into_parts();
        let entry = self
            .entries
            .get_mut(reuse_identifier)
            .unwrap_or_else(|| {
                panic!("no cell kind registered for reuse identifier `{reuse_identifier}`")
            });
        entry.free.push(cell);
        tracing::trace!(
            target: "rowkit::pool",
            reuse_identifier,
            free = entry.free.len(),
            "cell recycled"
        );
    }

    /// `true` if a cell kind is registered under `reuse_identifier`.
    pub fn is_registered(&self, reuse_identifier: &str) -> bool {
        self.entries.contains_key(reuse_identifier)
    }

    /// Number of registrations accepted (repeat registrations not counted).
    pub fn registration_count(&self) -> usize {
        self.registrations
    }

    /// Number of cells built fresh from a factory.
    pub fn built_count(&self) -> usize {
        self.built
    }

    /// Number of dequeues served from a free list.
    pub fn recycled_count(&self) -> usize {
        self.recycled
    }

    /// Number of idle cells waiting on the free list for `reuse_identifier`.
    pub fn free_count(&self, reuse_identifier: &str) -> usize {
        self.entries
            .get(reuse_identifier)
            .map_or(0, |entry| entry.free.len())
    }
}

impl CellHost for CellPool {
    fn register_cell_kind(&mut self, reuse_identifier: &'static str, factory: CellFactory) {
        if self.entries.contains_key(reuse_identifier) {
            tracing::debug!(
                target: "rowkit::pool",
                reuse_identifier,
                "cell kind already registered, keeping existing factory"
            );
            return;
        }

        tracing::debug!(target: "rowkit::pool", reuse_identifier, "cell kind registered");
        self.entries.insert(
            reuse_identifier,
            PoolEntry {
                factory,
                free: Vec::new(),
            },
        );
        self.registrations += 1;
    }

    fn dequeue_cell(&mut self, reuse_identifier: &'static str) -> CellLease {
        let entry = self
            .entries
            .get_mut(reuse_identifier)
            .unwrap_or_else(|| {
                panic!("no cell kind registered for reuse identifier `{reuse_identifier}`")
            });

        let cell = match entry.free.pop() {
            Some(mut cell) => {
                cell.prepare_for_reuse();
                self.recycled += 1;
                tracing::trace!(target: "rowkit::pool", reuse_identifier, "cell dequeued from free list");
                cell
            }
            None => {
                self.built += 1;
                tracing::trace!(target: "rowkit::pool", reuse_identifier, "cell built");
                (entry.factory)()
            }
        };

        CellLease::new(reuse_identifier, cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{SubtitleCell, TextCell};
    use std::sync::Arc;

    fn text_cell_factory() -> CellFactory {
        Arc::new(|| Box::new(TextCell::default()) as Box<dyn Cell>)
    }

    #[test]
    fn test_builds_when_free_list_empty() {
        let mut pool = CellPool::new();
        pool.register_cell_kind("course", text_cell_factory());

        let a = pool.dequeue_cell("course");
        let b = pool.dequeue_cell("course");
        assert_eq!(a.reuse_identifier(), "course");
        assert_eq!(b.reuse_identifier(), "course");
        assert_eq!(pool.built_count(), 2);
        assert_eq!(pool.recycled_count(), 0);
    }

    #[test]
    fn test_recycles_before_building() {
        let mut pool = CellPool::new();
        pool.register_cell_kind("course", text_cell_factory());

        let mut lease = pool.dequeue_cell("course");
        lease
            .cell_mut()
            .as_any_mut()
            .downcast_mut::<TextCell>()
            .unwrap()
            .set_text("stale");
        pool.recycle(lease);
        assert_eq!(pool.free_count("course"), 1);

        let lease = pool.dequeue_cell("course");
        assert_eq!(pool.built_count(), 1);
        assert_eq!(pool.recycled_count(), 1);

        // prepare_for_reuse ran on the recycled instance
        assert_eq!(lease.downcast_ref::<TextCell>().unwrap().text(), None);
    }

    #[test]
    fn test_repeat_registration_keeps_first_factory() {
        let mut pool = CellPool::new();
        pool.register_cell_kind("row", text_cell_factory());
        pool.register_cell_kind(
            "row",
            Arc::new(|| Box::new(SubtitleCell::default()) as Box<dyn Cell>),
        );

        assert_eq!(pool.registration_count(), 1);
        let lease = pool.dequeue_cell("row");
        assert!(lease.downcast_ref::<TextCell>().is_some());
    }

    #[test]
    #[should_panic(expected = "no cell kind registered for reuse identifier `missing`")]
    fn test_dequeue_unregistered_panics() {
        let mut pool = CellPool::new();
        pool.dequeue_cell("missing");
    }
}
