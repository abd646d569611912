//! The generic list controller.
//!
//! One controller renders any row type through a row-to-descriptor mapping
//! function; adding a new row kind means a new case in the mapping and a new
//! cell kind, never a change to the controller.

use std::collections::HashSet;

use rowkit_core::Signal;

use crate::descriptor::CellDescriptor;
use crate::host::{CellHost, CellLease};

/// Change notifications emitted when the row sequence is mutated.
///
/// The hosting view connects to these to refresh after insertions, removals,
/// and wholesale replacement. Payloads are `(first, last)` row ranges.
pub struct RowSignals {
    /// Emitted after rows have been inserted. Args: (first row, last row).
    pub rows_inserted: Signal<(usize, usize)>,
    /// Emitted after rows have been removed. Args: (first row, last row).
    pub rows_removed: Signal<(usize, usize)>,
    /// Emitted after the row sequence has been replaced or cleared.
    pub rows_reset: Signal<()>,
}

impl Default for RowSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl RowSignals {
    /// Creates a new set of row signals.
    pub fn new() -> Self {
        Self {
            rows_inserted: Signal::new(),
            rows_removed: Signal::new(),
            rows_reset: Signal::new(),
        }
    }
}

/// A list controller generic over its row data type.
///
/// Holds an ordered row sequence (insertion order is display order), the
/// row-to-descriptor mapping, the append-only set of reuse identifiers it
/// has registered with the host, and a single-slot selection callback.
///
/// # Example
///
/// ```
/// use rowkit::{CellDescriptor, CellPool, ListController, TextCell};
///
/// let mut controller = ListController::new(
///     "Fruit",
///     vec!["Apple".to_string(), "Banana".to_string()],
///     |fruit: &String| {
///         let name = fruit.clone();
///         CellDescriptor::new("fruit", move |cell: &mut TextCell| {
///             cell.set_text(name);
///         })
///     },
/// );
///
/// let mut pool = CellPool::new();
/// let lease = controller.render(&mut pool, 1);
/// assert_eq!(lease.downcast_ref::<TextCell>().unwrap().text(), Some("Banana"));
///
/// controller.set_on_select(|fruit| println!("picked {fruit}"));
/// controller.select(1);
/// ```
pub struct ListController<R> {
    title: String,
    rows: Vec<R>,
    descriptor_for: Box<dyn Fn(&R) -> CellDescriptor>,
    on_select: Box<dyn FnMut(&R)>,
    registered: HashSet<&'static str>,
    signals: RowSignals,
}

impl<R> ListController<R> {
    /// Create a controller with a title, initial rows, and the
    /// row-to-descriptor mapping.
    ///
    /// The mapping must be pure and deterministic: structurally similar rows
    /// must map to descriptors with the same reuse identifier and cell type,
    /// or their cells cannot recycle each other's instances.
    pub fn new<F>(title: impl Into<String>, rows: Vec<R>, descriptor_for: F) -> Self
    where
        F: Fn(&R) -> CellDescriptor + 'static,
    {
        Self {
            title: title.into(),
            rows,
            descriptor_for: Box::new(descriptor_for),
            on_select: Box::new(|_| {}),
            registered: HashSet::new(),
            signals: RowSignals::new(),
        }
    }

    /// The controller's display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Number of rows currently in the sequence. No side effects.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// `true` if the row sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Read access to the row sequence.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// The row change signals.
    pub fn signals(&self) -> &RowSignals {
        &self.signals
    }

    /// Replace the selection callback.
    ///
    /// Single slot, last write wins; the previous callback is dropped. Until
    /// the first call, selections are ignored.
    pub fn set_on_select<F>(&mut self, on_select: F)
    where
        F: FnMut(&R) + 'static,
    {
        self.on_select = Box::new(on_select);
    }

    /// Render the row at `index` into a cell obtained from `host`.
    ///
    /// Resolves the row's descriptor through the mapping function, registers
    /// the descriptor's cell kind with the host the first time its reuse
    /// identifier is seen (and never again), dequeues a cell for the
    /// identifier, and applies the descriptor's configure callback.
    ///
    /// # Panics
    ///
    /// Panics if `index >= row_count()`.
    pub fn render(&mut self, host: &mut dyn CellHost, index: usize) -> CellLease {
        assert!(
            index < self.rows.len(),
            "row index {index} out of range (row_count = {})",
            self.rows.len()
        );

        let descriptor = (self.descriptor_for)(&self.rows[index]);
        let reuse_identifier = descriptor.reuse_identifier();

        if !self.registered.contains(reuse_identifier) {
            tracing::debug!(
                target: "rowkit::controller",
                title = %self.title,
                reuse_identifier,
                cell_type = descriptor.cell_type_name(),
                "registering cell kind"
            );
            host.register_cell_kind(reuse_identifier, descriptor.factory());
            self.registered.insert(reuse_identifier);
        }

        let mut lease = host.dequeue_cell(reuse_identifier);
        descriptor.configure(lease.cell_mut());
        lease
    }

    /// Invoke the selection callback with the row at `index`.
    ///
    /// A no-op when no callback has been set.
    ///
    /// # Panics
    ///
    /// Panics if `index >= row_count()`.
    pub fn select(&mut self, index: usize) {
        assert!(
            index < self.rows.len(),
            "row index {index} out of range (row_count = {})",
            self.rows.len()
        );

        tracing::trace!(target: "rowkit::controller", title = %self.title, index, "row selected");
        (self.on_select)(&self.rows[index]);
    }

    // -------------------------------------------------------------------------
    // Row mutation (owner-only)
    // -------------------------------------------------------------------------

    /// Append a row to the end of the sequence.
    pub fn push_row(&mut self, row: R) {
        let index = self.rows.len();
        self.rows.push(row);
        self.signals.rows_inserted.emit((index, index));
    }

    /// Insert a row at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > row_count()`.
    pub fn insert_row(&mut self, index: usize, row: R) {
        self.rows.insert(index, row);
        self.signals.rows_inserted.emit((index, index));
    }

    /// Remove and return the row at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= row_count()`.
    pub fn remove_row(&mut self, index: usize) -> R {
        let row = self.rows.remove(index);
        self.signals.rows_removed.emit((index, index));
        row
    }

    /// Replace the whole row sequence.
    ///
    /// Reuse identifiers registered so far stay registered; registration is
    /// a one-time cost per cell kind, not per data set.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
        self.signals.rows_reset.emit(());
    }

    /// Remove all rows.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.signals.rows_reset.emit(());
    }
}
