use super::*;

impl LessonApp {
    pub fn practice_tab_infos(&self) -> Vec<QuizTabInfo> {
        QuizKind::ALL
            .into_iter()
            .map(|kind| {
                let session = self.session(kind);
                QuizTabInfo {
                    kind,
                    answered: session.answered_count(),
                    total: session.len(),
                    submitted: session.is_submitted(),
                }
            })
            .collect()
    }
}
