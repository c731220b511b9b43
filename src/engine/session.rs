use std::fmt;

use crate::engine::answers::{AnswerStore, Response};
use crate::engine::scoring;
use crate::model::Question;

/// Nota agregada de una sesión enviada.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} out of {}", self.correct, self.total)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Submitted(Score),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Índice fuera del banco: violación de contrato del llamante.
    InvalidIndex { index: usize, len: usize },
    /// Envío con preguntas sin responder: condición esperada y recuperable.
    IncompleteSubmission { answered: usize, total: usize },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::InvalidIndex { index, len } => {
                write!(f, "question index {index} out of range (bank has {len})")
            }
            SessionError::IncompleteSubmission { .. } => {
                write!(f, "Please answer all questions before submitting.")
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// Sesión de un quiz: banco fijo + respuestas mutables + estado de envío.
/// Se descarta al navegar fuera; no hay memoria entre sesiones.
#[derive(Debug, Clone)]
pub struct Session {
    questions: Vec<Question>,
    answers: AnswerStore,
    status: Status,
}

impl Session {
    pub fn new(questions: Vec<Question>) -> Self {
        let answers = AnswerStore::new(questions.len());
        Self {
            questions,
            answers,
            status: Status::InProgress,
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.status, Status::Submitted(_))
    }

    /// Nota congelada, solo tras un envío aceptado.
    pub fn score(&self) -> Option<Score> {
        match self.status {
            Status::Submitted(score) => Some(score),
            Status::InProgress => None,
        }
    }

    pub fn response(&self, index: usize) -> Option<&Response> {
        self.answers.get(index)
    }

    pub fn is_complete(&self) -> bool {
        self.answers.is_complete()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.answered_count()
    }

    /// Registra una respuesta. Con la sesión enviada se ignora sin efecto:
    /// la UI usa el estado enviado para bloquear entradas.
    pub fn select(&mut self, index: usize, response: Response) -> Result<(), SessionError> {
        if self.is_submitted() {
            log::debug!("select ignorado: sesión ya enviada (índice {index})");
            return Ok(());
        }
        self.answers.set(index, response)
    }

    /// Transición a enviado, con guarda todo-o-nada: si falta alguna
    /// respuesta no muta nada y devuelve el error recuperable.
    pub fn submit(&mut self) -> Result<Score, SessionError> {
        if let Status::Submitted(score) = self.status {
            return Ok(score);
        }
        if !self.answers.is_complete() {
            return Err(SessionError::IncompleteSubmission {
                answered: self.answers.answered_count(),
                total: self.questions.len(),
            });
        }

        let correct = (0..self.questions.len())
            .filter(|&i| self.is_answer_correct(i))
            .count();
        let score = Score {
            correct,
            total: self.questions.len(),
        };
        self.status = Status::Submitted(score);
        Ok(score)
    }

    /// Vuelve a en-curso con todas las respuestas borradas.
    pub fn reset(&mut self) {
        self.answers.clear();
        self.status = Status::InProgress;
    }

    /// Corrección por pregunta, solo visible tras el envío.
    pub fn is_correct(&self, index: usize) -> Option<bool> {
        if !self.is_submitted() {
            return None;
        }
        Some(self.is_answer_correct(index))
    }

    fn is_answer_correct(&self, index: usize) -> bool {
        match (self.questions.get(index), self.answers.get(index)) {
            (Some(q), Some(r)) => scoring::matches(q, r),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BooleanQuestion, ChoiceQuestion, CompletionQuestion};

    fn choice_bank(correct: &[usize]) -> Vec<Question> {
        correct
            .iter()
            .map(|&c| {
                Question::Choice(ChoiceQuestion {
                    question: "pick one".into(),
                    options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
                    correct_index: c,
                    explanation: "because".into(),
                })
            })
            .collect()
    }

    fn boolean_bank(truths: &[bool]) -> Vec<Question> {
        truths
            .iter()
            .map(|&t| {
                Question::Boolean(BooleanQuestion {
                    statement: "a statement".into(),
                    is_true: t,
                    explanation: "because".into(),
                })
            })
            .collect()
    }

    fn completion_bank(answers: &[&str]) -> Vec<Question> {
        answers
            .iter()
            .map(|&a| {
                Question::Completion(CompletionQuestion {
                    sentence: format!("fill {} here", crate::model::BLANK),
                    answer: a.into(),
                    hint: None,
                })
            })
            .collect()
    }

    #[test]
    fn submit_rejected_while_incomplete_and_state_unchanged() {
        let mut s = Session::new(choice_bank(&[1, 1, 2]));
        s.select(0, Response::Choice(1)).expect("in range");

        let err = s.submit().unwrap_err();
        assert_eq!(
            err,
            SessionError::IncompleteSubmission {
                answered: 1,
                total: 3
            }
        );
        assert_eq!(s.status(), Status::InProgress);
        assert!(s.score().is_none());
        assert_eq!(s.response(0), Some(&Response::Choice(1)));
    }

    #[test]
    fn perfect_multiple_choice_run_scores_five_of_five() {
        let mut s = Session::new(choice_bank(&[1, 1, 2, 1, 1]));
        for (i, sel) in [1, 1, 2, 1, 1].into_iter().enumerate() {
            s.select(i, Response::Choice(sel)).expect("in range");
        }
        let score = s.submit().expect("complete");
        assert_eq!(score, Score { correct: 5, total: 5 });
    }

    #[test]
    fn one_wrong_choice_scores_four_and_is_flagged() {
        let mut s = Session::new(choice_bank(&[1, 1, 2, 1, 1]));
        for (i, sel) in [0, 1, 2, 1, 1].into_iter().enumerate() {
            s.select(i, Response::Choice(sel)).expect("in range");
        }
        let score = s.submit().expect("complete");
        assert_eq!(score, Score { correct: 4, total: 5 });
        assert_eq!(s.is_correct(0), Some(false));
        assert_eq!(s.is_correct(1), Some(true));
    }

    #[test]
    fn all_true_against_mixed_truths_scores_two_of_five() {
        let mut s = Session::new(boolean_bank(&[false, true, true, false, true]));
        for i in 0..5 {
            s.select(i, Response::Boolean(true)).expect("in range");
        }
        let score = s.submit().expect("complete");
        assert_eq!(score, Score { correct: 2, total: 5 });
    }

    #[test]
    fn completion_digit_matches_but_word_does_not() {
        let mut s = Session::new(completion_bank(&["7", "identity"]));
        s.select(0, Response::Text("seven".into())).expect("in range");
        s.select(1, Response::Text(" Identity ".into())).expect("in range");
        let score = s.submit().expect("complete");
        assert_eq!(score, Score { correct: 1, total: 2 });
        assert_eq!(s.is_correct(0), Some(false));
        assert_eq!(s.is_correct(1), Some(true));
    }

    #[test]
    fn select_after_submit_has_no_effect_on_answers_or_score() {
        let mut s = Session::new(choice_bank(&[0, 0]));
        s.select(0, Response::Choice(0)).expect("in range");
        s.select(1, Response::Choice(1)).expect("in range");
        let before = s.submit().expect("complete");

        s.select(1, Response::Choice(0)).expect("ignored, not an error");
        assert_eq!(s.response(1), Some(&Response::Choice(1)));
        assert_eq!(s.score(), Some(before));
    }

    #[test]
    fn submit_is_idempotent_and_score_frozen_until_reset() {
        let mut s = Session::new(choice_bank(&[0]));
        s.select(0, Response::Choice(0)).expect("in range");
        let first = s.submit().expect("complete");
        let second = s.submit().expect("still submitted");
        assert_eq!(first, second);
    }

    #[test]
    fn reset_returns_to_in_progress_with_everything_unset() {
        let mut s = Session::new(choice_bank(&[0, 1]));
        s.select(0, Response::Choice(0)).expect("in range");
        s.select(1, Response::Choice(1)).expect("in range");
        s.submit().expect("complete");

        s.reset();
        assert_eq!(s.status(), Status::InProgress);
        assert!(s.score().is_none());
        assert!(s.response(0).is_none());
        assert!(s.response(1).is_none());
        assert!(s.is_correct(0).is_none());
    }

    #[test]
    fn blank_completion_answer_blocks_submission() {
        let mut s = Session::new(completion_bank(&["7"]));
        s.select(0, Response::Text("   ".into())).expect("in range");
        assert!(!s.is_complete());
        assert!(matches!(
            s.submit(),
            Err(SessionError::IncompleteSubmission { answered: 0, total: 1 })
        ));
    }

    #[test]
    fn correctness_is_hidden_while_in_progress() {
        let mut s = Session::new(choice_bank(&[1]));
        s.select(0, Response::Choice(1)).expect("in range");
        assert!(s.is_correct(0).is_none());
    }

    #[test]
    fn select_out_of_range_reports_invalid_index() {
        let mut s = Session::new(choice_bank(&[0]));
        let err = s.select(5, Response::Choice(0)).unwrap_err();
        assert!(matches!(err, SessionError::InvalidIndex { index: 5, len: 1 }));
    }
}
