//! # Block Parsing
//!
//! Two-phase block parsing with a container stack.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing local facts (indentation, quote prefix, list marker, fence, break,
//!    setext underline, blank status)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` keeps the open leaf or
//!    container for one nesting level and emits `Block`s as they close
//!
//! ## Modules
//!
//! - **`kinds`**: Block-specific syntax with owned delimiters (BlockQuote, CodeFence,
//!   ListMarker, ThematicBreak, SetextUnderline, Paragraph) and the list style classifier
//! - **`classify`**: `MarkLineClassifier` produces `LineClass` for each line
//! - **`containers`**: `ContainerFrame` collecting the lines of an open quote or list
//! - **`open`**: `try_open` dispatch picking the opener of a line in priority order
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Every line lands in exactly one block; unrecognised lines are paragraph text
//! - Fenced code blocks are raw zones: no block parsing inside
//! - Containers nest up to `BlockBuilder::MAX_DEPTH` levels

pub mod builder;
pub mod classify;
pub mod containers;
pub mod kinds;
pub mod open;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkLineClassifier};
pub use containers::ContainerFrame;
