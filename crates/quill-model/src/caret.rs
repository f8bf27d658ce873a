use quill_text::LineMetrics;
use serde::{Deserialize, Serialize};

/// A single logical cursor position in `(line, column)` space.
///
/// `column` may exceed the current line's length: it is clamped only when
/// read or converted, which lets vertical movement remember the intended
/// column while passing through shorter lines.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Caret {
    pub line: usize,
    pub column: usize,
}

fn line_len(metrics: &impl LineMetrics, line: usize) -> usize {
    // Carets never hold a line beyond the last one, so the query cannot
    // fail on any path below; an empty answer keeps movement total anyway.
    metrics.line_length(line).unwrap_or(0)
}

impl Caret {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    pub const fn origin() -> Self {
        Self { line: 0, column: 0 }
    }

    /// The column actually addressed: the stored one clamped to the line's
    /// current length.
    pub fn clamped_column(&self, metrics: &impl LineMetrics) -> usize {
        self.column.min(line_len(metrics, self.line))
    }

    /// The position actually addressed, with the virtual column resolved.
    pub fn resolve(&self, metrics: &impl LineMetrics) -> Caret {
        Caret::new(self.line, self.clamped_column(metrics))
    }

    pub fn up(&mut self) {
        if self.line > 0 {
            self.line -= 1;
        } else {
            self.column = 0;
        }
    }

    pub fn down(&mut self, metrics: &impl LineMetrics) {
        if self.line < metrics.last_line() {
            self.line += 1;
        } else {
            self.column = line_len(metrics, self.line);
        }
    }

    pub fn left(&mut self, metrics: &impl LineMetrics) {
        let len = line_len(metrics, self.line);
        if self.column > len {
            self.column = len;
        }
        if self.column > 0 {
            self.column -= 1;
        } else if self.line > 0 {
            self.line -= 1;
            self.column = line_len(metrics, self.line);
        }
    }

    pub fn right(&mut self, metrics: &impl LineMetrics) {
        let len = line_len(metrics, self.line);
        if self.column > len {
            self.column = len;
        }
        if self.column < len {
            self.column += 1;
        } else if self.line < metrics.last_line() {
            self.line += 1;
            self.column = 0;
        }
    }

    pub fn move_up(&mut self, n: usize) {
        for _ in 0..n {
            self.up();
        }
    }

    pub fn move_down(&mut self, n: usize, metrics: &impl LineMetrics) {
        for _ in 0..n {
            self.down(metrics);
        }
    }

    pub fn move_left(&mut self, n: usize, metrics: &impl LineMetrics) {
        for _ in 0..n {
            self.left(metrics);
        }
    }

    pub fn move_right(&mut self, n: usize, metrics: &impl LineMetrics) {
        for _ in 0..n {
            self.right(metrics);
        }
    }

    /// Linear codepoint offset: `line_length(i) + 1` for every line above,
    /// plus the clamped column.
    pub fn linear(&self, metrics: &impl LineMetrics) -> usize {
        let mut offset = 0;
        for line in 0..self.line {
            offset += line_len(metrics, line) + 1;
        }
        offset + self.clamped_column(metrics)
    }

    /// Reposition the caret. An invalid target (line beyond the last line,
    /// or column beyond that line's length) is rejected silently and leaves
    /// the caret fully unchanged; callers wanting strict validation must
    /// pre-check.
    pub fn set(&mut self, line: usize, column: usize, metrics: &impl LineMetrics) {
        match metrics.line_length(line) {
            Ok(len) if column <= len => {
                self.line = line;
                self.column = column;
            }
            _ => {}
        }
    }
}
