// src/view_models.rs

use crate::model::QuizKind;

#[derive(Clone, Debug)]
pub struct QuizTabInfo {
    pub kind: QuizKind,
    pub answered: usize,
    pub total: usize,
    pub submitted: bool,
}

impl QuizTabInfo {
    pub fn label(&self) -> String {
        if self.submitted {
            format!("{} ✅", self.kind.label())
        } else if self.answered > 0 {
            format!("{} ({}/{})", self.kind.label(), self.answered, self.total)
        } else {
            self.kind.label().to_string()
        }
    }
}
