//! Cell descriptors: the erased bundle a row maps to.
//!
//! A [`CellDescriptor`] pairs a reuse identifier, a concrete cell type token,
//! and a configure callback. The generic constructor takes a callback typed
//! for one concrete cell kind and erases it behind `&mut dyn Cell`, forwarding
//! through a checked downcast. The type token doubles as the factory the host
//! registers under the identifier, so every cell dequeued for that identifier
//! is of the matching concrete type and the downcast cannot fail under
//! correct pairing.
//!
//! Descriptors are cheap, single-use values: the row-to-descriptor mapping
//! produces a fresh one per render, and configuring a cell consumes it.

use std::any::{self, Any, TypeId};
use std::fmt;
use std::sync::Arc;

use crate::cell::Cell;

/// Constructor for cell instances of one registered kind.
///
/// Hosts hold the factory for each registered reuse identifier and invoke it
/// whenever no recycled instance is available.
pub type CellFactory = Arc<dyn Fn() -> Box<dyn Cell>>;

/// Describes how to obtain and populate the cell for one row.
///
/// Produced per row by the controller's mapping function. The descriptor for
/// structurally similar rows must carry the same reuse identifier and cell
/// type, so their cells can recycle each other's instances.
///
/// # Example
///
/// ```
/// use rowkit::{CellDescriptor, TextCell};
///
/// let name = "Raywenderlich.com".to_string();
/// let descriptor = CellDescriptor::new("course", move |cell: &mut TextCell| {
///     cell.set_text(name);
/// });
/// assert_eq!(descriptor.reuse_identifier(), "course");
/// ```
pub struct CellDescriptor {
    reuse_identifier: &'static str,
    cell_type: TypeId,
    cell_type_name: &'static str,
    factory: CellFactory,
    configure: Box<dyn FnOnce(&mut dyn Cell)>,
}

impl CellDescriptor {
    /// Create a descriptor from a reuse identifier and a typed configure
    /// callback.
    ///
    /// The concrete cell type is captured as the descriptor's type token and
    /// factory; the callback is stored erased and recovers the concrete type
    /// with a checked downcast when invoked.
    pub fn new<C, F>(reuse_identifier: &'static str, configure: F) -> Self
    where
        C: Cell + Default,
        F: FnOnce(&mut C) + 'static,
    {
        Self {
            reuse_identifier,
            cell_type: TypeId::of::<C>(),
            cell_type_name: any::type_name::<C>(),
            factory: Arc::new(|| Box::new(C::default()) as Box<dyn Cell>),
            configure: Box::new(move |cell: &mut dyn Cell| {
                let Some(concrete) = cell.as_any_mut().downcast_mut::<C>() else {
                    panic!(
                        "configure callback for reuse identifier `{reuse_identifier}` \
                         expected a `{}` cell; a different cell kind was dequeued under \
                         this identifier",
                        any::type_name::<C>()
                    );
                };
                configure(concrete);
            }),
        }
    }

    /// The reuse identifier grouping cells of this shape.
    #[inline]
    pub fn reuse_identifier(&self) -> &'static str {
        self.reuse_identifier
    }

    /// The type token of the concrete cell kind this descriptor configures.
    #[inline]
    pub fn cell_type(&self) -> TypeId {
        self.cell_type
    }

    /// Human-readable name of the concrete cell kind, for diagnostics.
    #[inline]
    pub fn cell_type_name(&self) -> &'static str {
        self.cell_type_name
    }

    /// The factory that builds instances of the concrete cell kind.
    pub fn factory(&self) -> CellFactory {
        self.factory.clone()
    }

    /// Returns `true` if `cell` is an instance of this descriptor's cell kind.
    pub fn matches(&self, cell: &dyn Cell) -> bool {
        cell.as_any().type_id() == self.cell_type
    }

    /// Apply the configure callback to a cell, consuming the descriptor.
    ///
    /// # Panics
    ///
    /// Panics if `cell` was not produced from this descriptor's cell type
    /// token. The controller guarantees the pairing by registering the
    /// factory under the same identifier the cell is dequeued with; a
    /// mismatch is a programming error.
    pub fn configure(self, cell: &mut dyn Cell) {
        (self.configure)(cell);
    }
}

impl fmt::Debug for CellDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellDescriptor")
            .field("reuse_identifier", &self.reuse_identifier)
            .field("cell_type", &self.cell_type_name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{SubtitleCell, TextCell};
    use rowkit_core::Color;

    #[test]
    fn test_configure_forwards_to_typed_callback() {
        let descriptor = CellDescriptor::new("newsletter", |cell: &mut SubtitleCell| {
            cell.set_text("iOS Dev");
            cell.set_detail_text("10.01.2020");
            cell.set_detail_text_color(Color::ORANGE);
        });

        let mut cell = (descriptor.factory())();
        assert!(descriptor.matches(cell.as_ref()));
        descriptor.configure(cell.as_mut());

        let cell = cell.as_any().downcast_ref::<SubtitleCell>().unwrap();
        assert_eq!(cell.text(), Some("iOS Dev"));
        assert_eq!(cell.detail_text(), Some("10.01.2020"));
        assert_eq!(cell.detail_text_color(), Some(Color::ORANGE));
    }

    #[test]
    fn test_factory_builds_default_instances() {
        let descriptor = CellDescriptor::new("course", |_cell: &mut TextCell| {});
        let factory = descriptor.factory();

        let a = factory();
        let b = factory();
        assert!(a.as_any().downcast_ref::<TextCell>().is_some());
        assert!(b.as_any().downcast_ref::<TextCell>().is_some());
    }

    #[test]
    fn test_type_token_and_identifier() {
        let descriptor = CellDescriptor::new("course", |_cell: &mut TextCell| {});
        assert_eq!(descriptor.reuse_identifier(), "course");
        assert_eq!(descriptor.cell_type(), TypeId::of::<TextCell>());
        assert!(descriptor.cell_type_name().contains("TextCell"));

        let mismatched: Box<dyn Cell> = Box::new(SubtitleCell::default());
        assert!(!descriptor.matches(mismatched.as_ref()));
    }

    #[test]
    #[should_panic(expected = "expected a `rowkit::cell::TextCell` cell")]
    fn test_mismatched_cell_panics() {
        let descriptor = CellDescriptor::new("course", |cell: &mut TextCell| {
            cell.set_text("never reached");
        });

        let mut wrong: Box<dyn Cell> = Box::new(SubtitleCell::default());
        descriptor.configure(wrong.as_mut());
    }
}
