use std::collections::HashMap;

use tracing::trace;

/// A stack of binding frames. Lookups walk from the innermost frame
/// outwards, so an inner binding shadows any outer one of the same name.
#[derive(Debug, Clone)]
pub struct ScopeStack<T> {
    frames: Vec<HashMap<String, T>>,
}

impl<T> ScopeStack<T> {
    /// Creates a stack holding only the stylesheet frame.
    pub fn new() -> Self {
        ScopeStack {
            frames: vec![HashMap::new()],
        }
    }

    pub fn open(&mut self) {
        self.frames.push(HashMap::new());
        trace!(depth = self.depth(), "opened scope");
    }

    /// Pops the innermost frame. The stylesheet frame is never popped.
    pub fn close(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
        trace!(depth = self.depth(), "closed scope");
    }

    /// Binds `name` in the innermost frame, overwriting any binding it
    /// already holds there.
    pub fn bind(&mut self, name: impl Into<String>, value: T) {
        let name = name.into();
        trace!(name = %name, depth = self.depth(), "bound variable");

        if let Some(frame) = self.frames.last_mut() {
            frame.insert(name, value);
        }
    }

    pub fn resolve(&self, name: &str) -> Option<&T> {
        self.frames.iter().rev().find_map(|frame| frame.get(name))
    }

    pub fn is_bound(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// Number of open frames, including the stylesheet frame.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}

impl<T> Default for ScopeStack<T> {
    fn default() -> Self {
        Self::new()
    }
}
