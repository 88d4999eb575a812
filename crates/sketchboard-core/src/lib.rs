//! Sketchboard Core Library
//!
//! Observable board state for the Sketchboard whiteboard: the active tool,
//! the element list, selection and undo/redo history, plus the factory that
//! turns a tool into a typed element.

pub mod board;
pub mod config;
pub mod error;
pub mod factory;
mod history;
pub mod shapes;
pub mod tools;

pub use board::{BoardState, BoardStore, ListenerId};
pub use config::{BoardConfig, DEFAULT_HISTORY_LIMIT, HistoryMode};
pub use error::{BoardError, BoardResult};
pub use factory::{ElementPatch, create_element, create_element_with};
pub use shapes::{ArrowDirection, Element, ElementId, SerializableColor, Shape, ShapeKind};
pub use tools::Tool;
