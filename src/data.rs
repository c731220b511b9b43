// src/data.rs

use serde::Deserialize;

use crate::model::{
    BooleanQuestion, ChoiceQuestion, CompletionQuestion, LessonContent, Question, QuizKind,
};

/// Los tres bancos de preguntas de la página de práctica.
/// Contenido autorado y fijo durante toda la vida del proceso.
#[derive(Deserialize, Debug, Clone)]
pub struct QuestionBanks {
    pub multiple_choice: Vec<ChoiceQuestion>,
    pub true_false: Vec<BooleanQuestion>,
    pub completion: Vec<CompletionQuestion>,
}

impl QuestionBanks {
    /// Banco homogéneo del tipo pedido, ya envuelto en la unión etiquetada.
    pub fn bank_for(&self, kind: QuizKind) -> Vec<Question> {
        match kind {
            QuizKind::MultipleChoice => self
                .multiple_choice
                .iter()
                .cloned()
                .map(Question::Choice)
                .collect(),
            QuizKind::TrueFalse => self
                .true_false
                .iter()
                .cloned()
                .map(Question::Boolean)
                .collect(),
            QuizKind::Completion => self
                .completion
                .iter()
                .cloned()
                .map(Question::Completion)
                .collect(),
        }
    }
}

/// Carga los bancos de preguntas desde el YAML embebido
pub fn read_question_banks_embedded() -> QuestionBanks {
    let file_content = include_str!("data/questions.yaml");
    let banks: QuestionBanks =
        serde_yaml::from_str(file_content).expect("No se pudo parsear el banco de preguntas YAML");
    log::info!(
        "bancos cargados: {} multiple choice, {} true/false, {} completion",
        banks.multiple_choice.len(),
        banks.true_false.len(),
        banks.completion.len()
    );
    banks
}

/// Carga el contenido de la lección (intro, teaching, review, agradecimientos)
pub fn read_lesson_embedded() -> LessonContent {
    let file_content = include_str!("data/lesson.yaml");
    serde_yaml::from_str(file_content).expect("No se pudo parsear el contenido de la lección YAML")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BLANK;

    #[test]
    fn embedded_banks_parse_with_five_questions_each() {
        let banks = read_question_banks_embedded();
        assert_eq!(banks.multiple_choice.len(), 5);
        assert_eq!(banks.true_false.len(), 5);
        assert_eq!(banks.completion.len(), 5);
    }

    #[test]
    fn choice_bank_has_valid_indices_and_expected_key() {
        let banks = read_question_banks_embedded();
        for q in &banks.multiple_choice {
            assert!(q.options.len() >= 2);
            assert!(q.correct_index < q.options.len());
            assert!(!q.explanation.is_empty());
        }
        let key: Vec<usize> = banks.multiple_choice.iter().map(|q| q.correct_index).collect();
        assert_eq!(key, vec![1, 1, 2, 1, 1]);
    }

    #[test]
    fn true_false_bank_matches_expected_truths() {
        let banks = read_question_banks_embedded();
        let truths: Vec<bool> = banks.true_false.iter().map(|q| q.is_true).collect();
        assert_eq!(truths, vec![false, true, true, false, true]);
    }

    #[test]
    fn every_completion_sentence_has_exactly_one_blank() {
        let banks = read_question_banks_embedded();
        for q in &banks.completion {
            assert_eq!(q.sentence.matches(BLANK).count(), 1, "{}", q.sentence);
            assert!(!q.answer.trim().is_empty());
        }
    }

    #[test]
    fn embedded_lesson_content_parses() {
        let lesson = read_lesson_embedded();
        assert_eq!(lesson.intro.memory_kinds.len(), 3);
        assert_eq!(lesson.teaching.reading.len(), 4);
        assert_eq!(lesson.teaching.listening.len(), 3);
        assert_eq!(lesson.review.sections.len(), 4);
        assert!(!lesson.acknowledgements.references.is_empty());
    }
}
