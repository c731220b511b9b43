use crate::engine::answers::Response;
use crate::model::Question;

/// Normalización de respuestas de texto: trim + minúsculas.
/// Sin sinónimos ni fuzzy matching: "seven" nunca vale por "7".
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Regla de corrección pura: ¿esta respuesta acierta esta pregunta?
/// Una respuesta de tipo distinto al de la pregunta nunca acierta.
pub fn matches(question: &Question, response: &Response) -> bool {
    match (question, response) {
        (Question::Choice(q), Response::Choice(idx)) => *idx == q.correct_index,
        (Question::Boolean(q), Response::Boolean(value)) => *value == q.is_true,
        (Question::Completion(q), Response::Text(text)) => normalize(text) == normalize(&q.answer),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BooleanQuestion, ChoiceQuestion, CompletionQuestion};

    fn completion(answer: &str) -> Question {
        Question::Completion(CompletionQuestion {
            sentence: format!("The answer is {}.", crate::model::BLANK),
            answer: answer.to_string(),
            hint: None,
        })
    }

    #[test]
    fn choice_matches_exact_index_only() {
        let q = Question::Choice(ChoiceQuestion {
            question: "Which one?".into(),
            options: vec!["a".into(), "b".into(), "c".into()],
            correct_index: 1,
            explanation: "b is right".into(),
        });
        assert!(matches(&q, &Response::Choice(1)));
        assert!(!matches(&q, &Response::Choice(0)));
        assert!(!matches(&q, &Response::Boolean(true)));
    }

    #[test]
    fn boolean_matches_truth_value() {
        let q = Question::Boolean(BooleanQuestion {
            statement: "LTM is unlimited.".into(),
            is_true: true,
            explanation: "yes".into(),
        });
        assert!(matches(&q, &Response::Boolean(true)));
        assert!(!matches(&q, &Response::Boolean(false)));
    }

    #[test]
    fn completion_is_case_and_whitespace_insensitive() {
        let q = completion("identity");
        assert!(matches(&q, &Response::Text("Identity".into())));
        assert!(matches(&q, &Response::Text(" identity ".into())));
        assert!(matches(&q, &Response::Text("IDENTITY".into())));
        assert!(!matches(&q, &Response::Text("identify".into())));
    }

    #[test]
    fn completion_has_no_synonym_handling() {
        let q = completion("7");
        assert!(matches(&q, &Response::Text("7".into())));
        assert!(!matches(&q, &Response::Text("seven".into())));
    }
}
