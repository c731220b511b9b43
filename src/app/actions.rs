use super::*;
use crate::engine::{Response, SessionError};

impl LessonApp {
    /// Cambia de página. El estado de la vista que se abandona se descarta,
    /// igual que al desmontar la vista: las sesiones de práctica vuelven a
    /// cero y los escenarios de listening se vuelven a tapar.
    pub fn go_to(&mut self, page: Page) {
        if page == self.page {
            return;
        }
        match self.page {
            Page::Practice => self.discard_practice(),
            Page::Teaching => {
                self.teaching_tab = TeachingTab::Reading;
                self.revealed_scenarios.clear();
            }
            _ => {}
        }
        self.page = page;
        self.message.clear();
    }

    fn discard_practice(&mut self) {
        self.sessions = Self::fresh_sessions(&self.banks);
        for input in &mut self.completion_inputs {
            input.clear();
        }
        self.practice_tab = QuizKind::MultipleChoice;
    }

    /// Cambiar de pestaña de quiz no toca las otras sesiones.
    pub fn switch_quiz(&mut self, kind: QuizKind) {
        self.practice_tab = kind;
        self.message.clear();
    }

    pub fn answer_choice(&mut self, question_index: usize, option_index: usize) {
        let result = self
            .session_mut(QuizKind::MultipleChoice)
            .select(question_index, Response::Choice(option_index));
        Self::report_contract_violation(result);
    }

    pub fn answer_true_false(&mut self, question_index: usize, value: bool) {
        let result = self
            .session_mut(QuizKind::TrueFalse)
            .select(question_index, Response::Boolean(value));
        Self::report_contract_violation(result);
    }

    /// Sincroniza el buffer del input con la sesión de completar.
    pub fn answer_text(&mut self, question_index: usize) {
        let Some(text) = self.completion_inputs.get(question_index).cloned() else {
            log::error!("input de completar {question_index} inexistente");
            return;
        };
        let result = self
            .session_mut(QuizKind::Completion)
            .select(question_index, Response::Text(text));
        Self::report_contract_violation(result);
    }

    /// Envía el quiz activo. El envío incompleto es un aviso para el
    /// usuario, nunca un fallo fatal.
    pub fn submit_active(&mut self) {
        let kind = self.practice_tab;
        match self.session_mut(kind).submit() {
            Ok(score) => {
                self.message = format!("🏆 You got {score} correct!");
            }
            Err(err @ SessionError::IncompleteSubmission { .. }) => {
                self.message = format!("⚠ {err}");
            }
            Err(err) => {
                // InvalidIndex no puede salir de submit
                log::error!("submit falló de forma inesperada: {err}");
            }
        }
    }

    /// "Try Again": borra respuestas y nota del quiz activo.
    pub fn reset_active(&mut self) {
        let kind = self.practice_tab;
        self.session_mut(kind).reset();
        if kind == QuizKind::Completion {
            for input in &mut self.completion_inputs {
                input.clear();
            }
        }
        self.message.clear();
    }

    pub fn toggle_scenario(&mut self, index: usize) {
        if !self.revealed_scenarios.remove(&index) {
            self.revealed_scenarios.insert(index);
        }
    }

    pub fn is_scenario_revealed(&self, index: usize) -> bool {
        self.revealed_scenarios.contains(&index)
    }

    // Un índice fuera de rango solo puede venir de un bug en el wiring de
    // la UI; se registra fuerte en debug y se ignora en release.
    fn report_contract_violation(result: Result<(), SessionError>) {
        if let Err(err) = result {
            debug_assert!(false, "violación de contrato: {err}");
            log::error!("violación de contrato: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Status;

    #[test]
    fn incomplete_submission_surfaces_a_notice_not_a_fault() {
        let mut app = LessonApp::new();
        app.go_to(Page::Practice);
        app.answer_choice(0, 1);
        app.submit_active();

        assert!(app.message.contains("Please answer all questions"));
        assert_eq!(app.active_session().status(), Status::InProgress);
    }

    #[test]
    fn full_multiple_choice_run_reports_perfect_score() {
        let mut app = LessonApp::new();
        app.go_to(Page::Practice);
        for (i, sel) in [1, 1, 2, 1, 1].into_iter().enumerate() {
            app.answer_choice(i, sel);
        }
        app.submit_active();

        assert!(app.message.contains("5 out of 5"));
        assert!(app.active_session().is_submitted());
    }

    #[test]
    fn switching_tabs_keeps_other_sessions_untouched() {
        let mut app = LessonApp::new();
        app.go_to(Page::Practice);
        app.answer_choice(0, 1);

        app.switch_quiz(QuizKind::TrueFalse);
        app.answer_true_false(0, true);
        app.switch_quiz(QuizKind::MultipleChoice);

        assert_eq!(app.active_session().answered_count(), 1);
        assert_eq!(app.session(QuizKind::TrueFalse).answered_count(), 1);
    }

    #[test]
    fn leaving_practice_discards_every_session() {
        let mut app = LessonApp::new();
        app.go_to(Page::Practice);
        for (i, sel) in [1, 1, 2, 1, 1].into_iter().enumerate() {
            app.answer_choice(i, sel);
        }
        app.submit_active();

        app.go_to(Page::Review);
        app.go_to(Page::Practice);

        assert_eq!(app.active_session().status(), Status::InProgress);
        assert_eq!(app.active_session().answered_count(), 0);
    }

    #[test]
    fn reset_clears_completion_inputs_too() {
        let mut app = LessonApp::new();
        app.go_to(Page::Practice);
        app.switch_quiz(QuizKind::Completion);
        app.completion_inputs[0] = "long-term".into();
        app.answer_text(0);

        app.reset_active();
        assert!(app.completion_inputs.iter().all(String::is_empty));
        assert_eq!(app.active_session().answered_count(), 0);
    }

    #[test]
    fn listening_scenarios_toggle_on_and_off() {
        let mut app = LessonApp::new();
        app.toggle_scenario(1);
        assert!(app.is_scenario_revealed(1));
        app.toggle_scenario(1);
        assert!(!app.is_scenario_revealed(1));
    }
}
