//! Sortable, paginated and striped table widgets for `tabledom` trees.
//!
//! The widgets cooperate through notifications rather than calls:
//!
//! ```text
//! ParserRegistry ──► SortEngine ──SortEvent──► PaginationController
//!                                         └──► StripedTable
//! ```
//!
//! Widgets hold element ids and their own state, never the tree. Every
//! operation borrows the root element for its duration.

pub mod config;
pub mod error;
pub mod event;
pub mod marker;
pub mod paginator;
pub mod parsers;
mod rows;
pub mod sorter;
pub mod striped;

pub use config::{PaginatorConfig, SorterConfig, StripeConfig};
pub use error::{DecorateError, RegistryError};
pub use event::{CollapseEvent, EventResult, SortEvent};
pub use marker::RowMarker;
pub use paginator::{PageState, PaginationController};
pub use parsers::{Parser, ParserKind, ParserRegistry, SortKey};
pub use sorter::{SortEngine, SortState};
pub use striped::StripedTable;

pub mod prelude {
    pub use crate::config::{PaginatorConfig, SorterConfig, StripeConfig};
    pub use crate::error::{DecorateError, RegistryError};
    pub use crate::event::{CollapseEvent, EventResult, SortEvent};
    pub use crate::marker::RowMarker;
    pub use crate::paginator::{PageState, PaginationController};
    pub use crate::parsers::{Parser, ParserKind, ParserRegistry, SortKey};
    pub use crate::sorter::{SortEngine, SortState};
    pub use crate::striped::StripedTable;
}
