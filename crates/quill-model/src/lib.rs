//! Caret/selection coordinate model.
//!
//! Positions live in two spaces at once: `(line, column)` for navigation and
//! a linear codepoint offset for buffer mutation. `Caret::linear` is the
//! single conversion point between them; everything that mutates a buffer on
//! behalf of a caret or selection goes through it.
//!
//! Invariants (must hold after every public call):
//! * Explicit range placement leaves `Selection` endpoints in document
//!   order (`start <= end` by line, then column), repaired by endpoint
//!   swap; mid-extension the raw anchor/focus pair may sit inverted and
//!   every reader orders it at conversion time.
//! * A selection change notification is emitted synchronously inside the
//!   call that changed the state, exactly once per call, never before the
//!   mutation it describes.
//! * Line-shape queries are re-asked per call through [`LineMetrics`]; the
//!   model caches nothing about the buffer.

mod caret;
mod selection;

pub use caret::Caret;
pub use selection::{NoopObserver, Selection, SelectionObserver, SelectionSpan};

pub use quill_text::LineMetrics;
