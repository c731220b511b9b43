use crate::data::{read_lesson_embedded, read_question_banks_embedded, QuestionBanks};
use crate::engine::Session;
use crate::model::{LessonContent, Page, QuizKind, TeachingTab};
use std::collections::{HashMap, HashSet};

// Submódulos
pub mod actions;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::QuizTabInfo;

/// Estado completo de la aplicación: contenido fijo de la lección más el
/// estado efímero de la vista actual. Nada se persiste entre ejecuciones.
pub struct LessonApp {
    pub content: LessonContent,
    banks: QuestionBanks,
    /// Una sesión independiente por tipo de quiz.
    pub sessions: HashMap<QuizKind, Session>,
    /// Buffer de los inputs de completar (misma longitud que su banco).
    pub completion_inputs: Vec<String>,
    pub page: Page,
    pub teaching_tab: TeachingTab,
    pub practice_tab: QuizKind,
    /// Escenarios de listening con la respuesta destapada.
    pub revealed_scenarios: HashSet<usize>,
    /// Aviso transitorio (p. ej. envío incompleto).
    pub message: String,
}

impl LessonApp {
    pub fn new() -> Self {
        let content = read_lesson_embedded();
        let banks = read_question_banks_embedded();
        let sessions = Self::fresh_sessions(&banks);
        let completion_inputs = vec![String::new(); banks.completion.len()];

        Self {
            content,
            banks,
            sessions,
            completion_inputs,
            page: Page::Intro,
            teaching_tab: TeachingTab::Reading,
            practice_tab: QuizKind::MultipleChoice,
            revealed_scenarios: HashSet::new(),
            message: String::new(),
        }
    }

    fn fresh_sessions(banks: &QuestionBanks) -> HashMap<QuizKind, Session> {
        QuizKind::ALL
            .into_iter()
            .map(|kind| (kind, Session::new(banks.bank_for(kind))))
            .collect()
    }

    pub fn session(&self, kind: QuizKind) -> &Session {
        self.sessions
            .get(&kind)
            .expect("sesiones sembradas en new() para los tres tipos")
    }

    pub fn session_mut(&mut self, kind: QuizKind) -> &mut Session {
        self.sessions
            .get_mut(&kind)
            .expect("sesiones sembradas en new() para los tres tipos")
    }

    pub fn active_session(&self) -> &Session {
        self.session(self.practice_tab)
    }
}

impl Default for LessonApp {
    fn default() -> Self {
        Self::new()
    }
}
