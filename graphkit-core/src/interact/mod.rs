//! Interaction Layer
//!
//! Everything between classified input events and store mutations:
//!
//! - `event`: the semantic event vocabulary the input adapter produces
//! - `selection`: the pointer state machine (select, deselect, drag-to-link)
//! - `keyboard`: the key command map with per-press latching
//!
//! These components are driven strictly sequentially by the editor and
//! never invoke one another re-entrantly.

mod event;
mod keyboard;
mod selection;

pub use event::{InputEvent, KeyCode};
pub use keyboard::KeyDispatcher;
pub use selection::{Selection, SelectionState};
