/// Events the host can send between frames.
/// Generic: no scene-specific semantics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The drawing surface changed size (CSS pixels).
    Resize { width: f32, height: f32 },
}

/// A queue of host events.
/// JS writes events into the queue; Rust reads and drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(8),
        }
    }

    /// Push a new event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// The most recent resize in the queue, if any.
    pub fn last_resize(&self) -> Option<(f32, f32)> {
        self.events.iter().rev().map(|e| match *e {
            InputEvent::Resize { width, height } => (width, height),
        }).next()
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::Resize { width: 800.0, height: 600.0 });
        q.push(InputEvent::Resize { width: 640.0, height: 480.0 });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn last_resize_wins() {
        let mut q = InputQueue::new();
        assert_eq!(q.last_resize(), None);
        q.push(InputEvent::Resize { width: 800.0, height: 600.0 });
        q.push(InputEvent::Resize { width: 320.0, height: 240.0 });
        q.push(InputEvent::Resize { width: 1024.0, height: 768.0 });
        assert_eq!(q.last_resize(), Some((1024.0, 768.0)));
    }
}
