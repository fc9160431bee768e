use super::physics::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LabelId(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    id: LabelId,
    pub position: Vec2,
    pub text: String,
    pub font_px: f32,
}

impl Label {
    pub fn id(&self) -> LabelId {
        self.id
    }
}

/// Id-addressed text labels. Mutators return false for unknown ids so a
/// stale handle degrades to a no-op instead of a failure.
#[derive(Debug, Default)]
pub struct TextSystem {
    next_id: u64,
    labels: Vec<Label>,
}

impl TextSystem {
    pub fn create(&mut self, position: Vec2, text: impl Into<String>, font_px: f32) -> LabelId {
        let id = LabelId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        self.labels.push(Label {
            id,
            position,
            text: text.into(),
            font_px,
        });
        id
    }

    pub fn remove(&mut self, id: LabelId) -> bool {
        let before = self.labels.len();
        self.labels.retain(|label| label.id != id);
        before != self.labels.len()
    }

    pub fn set_text(&mut self, id: LabelId, text: impl Into<String>) -> bool {
        match self.label_mut(id) {
            Some(label) => {
                label.text = text.into();
                true
            }
            None => false,
        }
    }

    pub fn set_position(&mut self, id: LabelId, position: Vec2) -> bool {
        match self.label_mut(id) {
            Some(label) => {
                label.position = position;
                true
            }
            None => false,
        }
    }

    pub fn set_font_px(&mut self, id: LabelId, font_px: f32) -> bool {
        match self.label_mut(id) {
            Some(label) => {
                label.font_px = font_px;
                true
            }
            None => false,
        }
    }

    pub fn label(&self, id: LabelId) -> Option<&Label> {
        self.labels.iter().find(|label| label.id == id)
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    fn label_mut(&mut self, id: LabelId) -> Option<&mut Label> {
        self.labels.iter_mut().find(|label| label.id == id)
    }
}
