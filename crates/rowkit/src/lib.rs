//! Rowkit - a generic, reusable list-view controller for Rust UI toolkits.
//!
//! One controller renders heterogeneous row data through per-row cell
//! descriptors, instead of a bespoke controller per data type:
//!
//! - `ListController<R>`: holds the ordered row sequence and answers the
//!   host's render and selection callbacks
//! - `CellDescriptor`: pairs a reuse identifier, a cell type token, and a
//!   type-erased configure callback, built generically from a typed one
//! - `CellHost` / `CellPool`: the hosting view system's side of the
//!   contract - register a cell kind once per identifier, then dequeue
//!   (recycled or fresh) instances for it
//!
//! # Architecture Overview
//!
//! ```text
//! ┌──────────────────┐  row → descriptor  ┌────────────────┐
//! │ ListController<R>│───────────────────>│ CellDescriptor │
//! │  rows, mapping,  │                    │ id · type ·    │
//! │  selection slot  │                    │ configure      │
//! └────────┬─────────┘                    └───────┬────────┘
//!          │ register id (once) / dequeue id      │ configure(cell)
//!          v                                      v
//! ┌──────────────────┐     CellLease      ┌────────────────┐
//! │ CellHost (pool)  │───────────────────>│   dyn Cell     │
//! └──────────────────┘                    └────────────────┘
//! ```
//!
//! The mapping function is the sole extension point: a new row kind needs a
//! new mapping case and a new cell kind, and no controller change.
//!
//! # Example
//!
//! ```
//! use rowkit::{CellDescriptor, CellPool, ListController, SubtitleCell};
//!
//! struct Newsletter {
//!     title: String,
//!     print_date: String,
//! }
//!
//! let mut controller = ListController::new(
//!     "Reading",
//!     vec![Newsletter {
//!         title: "iOS Dev".into(),
//!         print_date: "10.01.2020".into(),
//!     }],
//!     |row: &Newsletter| {
//!         let title = row.title.clone();
//!         let date = row.print_date.clone();
//!         CellDescriptor::new("newsletter", move |cell: &mut SubtitleCell| {
//!             cell.set_text(title);
//!             cell.set_detail_text(date);
//!         })
//!     },
//! );
//!
//! let mut pool = CellPool::new();
//! let lease = controller.render(&mut pool, 0);
//! let cell = lease.downcast_ref::<SubtitleCell>().unwrap();
//! assert_eq!(cell.text(), Some("iOS Dev"));
//! ```

mod cell;
mod controller;
mod descriptor;
mod host;
mod pool;

pub use cell::{Cell, SubtitleCell, TextCell, ValueCell};
pub use controller::{ListController, RowSignals};
pub use descriptor::{CellDescriptor, CellFactory};
pub use host::{CellHost, CellLease};
pub use pool::CellPool;

pub use rowkit_core::{Color, ConnectionGuard, ConnectionId, PerfSpan, Signal};
