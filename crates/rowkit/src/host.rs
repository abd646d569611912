//! The hosting view system's side of the contract.
//!
//! The controller does not own cell storage; the hosting view system does.
//! [`CellHost`] is the outbound surface the controller drives: register a
//! cell kind under an identifier once, then dequeue instances for that
//! identifier on every render. The library ships one host,
//! [`CellPool`](crate::CellPool); embedders wrap their toolkit's own
//! recycling machinery in the same trait.

use std::ops::{Deref, DerefMut};

use crate::cell::Cell;
use crate::descriptor::CellFactory;

/// The host interface the controller renders against.
///
/// Implementations decide where cell instances come from: a recycling pool,
/// the toolkit's native reuse queue, or fresh construction every time.
///
/// # Contract
///
/// - `register_cell_kind` is called at most once per identifier by a given
///   controller; implementations must tolerate repeated registration of the
///   same identifier from multiple controllers by keeping the first factory.
/// - `dequeue_cell` must only hand out cells built by the factory registered
///   under that identifier. The configure callback relies on this pairing
///   for its checked downcast.
pub trait CellHost {
    /// Register the factory for a cell kind under a reuse identifier.
    fn register_cell_kind(&mut self, reuse_identifier: &'static str, factory: CellFactory);

    /// Obtain a cell instance for a registered identifier.
    ///
    /// The host may return a recycled instance or build a new one.
    ///
    /// # Panics
    ///
    /// Panics if no cell kind was registered under `reuse_identifier`; asking
    /// for an unregistered identifier is a programming error.
    fn dequeue_cell(&mut self, reuse_identifier: &'static str) -> CellLease;
}

static_assertions::assert_obj_safe!(CellHost);

/// A dequeued cell, tagged with the reuse identifier it was dequeued under.
///
/// The tag travels with the cell the way a table-view cell carries its reuse
/// identifier, so whoever displays the cell can hand it back to the pool
/// without extra bookkeeping. Derefs to [`Cell`].
pub struct CellLease {
    reuse_identifier: &'static str,
    cell: Box<dyn Cell>,
}

impl CellLease {
    /// Create a lease. Called by host implementations when handing a cell out.
    pub fn new(reuse_identifier: &'static str, cell: Box<dyn Cell>) -> Self {
        Self {
            reuse_identifier,
            cell,
        }
    }

    /// The identifier this cell must be recycled under.
    #[inline]
    pub fn reuse_identifier(&self) -> &'static str {
        self.reuse_identifier
    }

    /// The erased cell.
    #[inline]
    pub fn cell(&self) -> &dyn Cell {
        self.cell.as_ref()
    }

    /// The erased cell, mutably.
    #[inline]
    pub fn cell_mut(&mut self) -> &mut dyn Cell {
        self.cell.as_mut()
    }

    /// Attempt to view the cell as a concrete kind.
    pub fn downcast_ref<C: Cell>(&self) -> Option<&C> {
        self.cell.as_any().downcast_ref::<C>()
    }

    /// Unwrap the lease, discarding the identifier tag.
    pub fn into_cell(self) -> Box<dyn Cell> {
        self.cell
    }

    /// Split the lease into its identifier and cell.
    pub fn into_parts(self) -> (&'static str, Box<dyn Cell>) {
        (self.reuse_identifier, self.cell)
    }
}

impl Deref for CellLease {
    type Target = dyn Cell;

    fn deref(&self) -> &Self::Target {
        self.cell.as_ref()
    }
}

impl DerefMut for CellLease {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.cell.as_mut()
    }
}
