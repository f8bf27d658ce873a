//! Process-wide clipboard slot shared by every buffer.

use std::sync::{Arc, Mutex, PoisonError};

/// Last-writer-wins shared text slot. Reads and writes are each atomic; a
/// read racing another buffer's write may observe either value.
#[derive(Debug, Clone, Default)]
pub struct Clipboard {
    slot: Arc<Mutex<String>>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clipboard contents.
    pub fn read(&self) -> String {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the clipboard contents.
    pub fn write(&self, text: impl Into<String>) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = text.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_one_slot() {
        let a = Clipboard::new();
        let b = a.clone();
        a.write("from a");
        assert_eq!(b.read(), "from a");
        b.write("from b");
        assert_eq!(a.read(), "from b");
    }

    #[test]
    fn starts_empty() {
        assert_eq!(Clipboard::new().read(), "");
    }
}
