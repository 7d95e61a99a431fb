//! The menu core: flattening, layout, selection, and the mode sub-choice.
//!
//! Everything in this module is pure computation over the immutable
//! [`ConfigTree`](crate::config::ConfigTree). The render path and the lookup
//! path share one flattening function, so the index printed next to an entry
//! is by construction the index that resolves back to it.

mod errors;
mod flatten;
mod layout;
mod mode;
mod select;

pub use errors::SelectionError;
pub use flatten::{Flattened, IndexedEntry, flatten};
pub use layout::{Band, Cell, Grid, layout, visible_width};
pub use mode::ModeMenu;
pub use select::{Capability, CapabilitySet, Resolved, resolve};
