use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Latest-value mailbox for host resize notifications. Resizes arrive
/// between frames; only the newest one matters, so each push overwrites
/// the previous un-consumed value.
#[derive(Debug, Default)]
pub struct ResizeSlot {
    pending: Option<ViewportSize>,
}

impl ResizeSlot {
    pub fn push(&mut self, size: ViewportSize) {
        self.pending = Some(size);
    }

    pub fn take(&mut self) -> Option<ViewportSize> {
        self.pending.take()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_none()
    }
}
