use serde::Deserialize;

/// Token de hueco en las frases de completar.
pub const BLANK: &str = "_____";

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum QuizKind {
    MultipleChoice,
    TrueFalse,
    Completion,
}

impl QuizKind {
    pub const ALL: [QuizKind; 3] = [
        QuizKind::MultipleChoice,
        QuizKind::TrueFalse,
        QuizKind::Completion,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QuizKind::MultipleChoice => "Multiple Choice",
            QuizKind::TrueFalse => "True / False",
            QuizKind::Completion => "Completion",
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct ChoiceQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub explanation: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct BooleanQuestion {
    pub statement: String,
    pub is_true: bool,
    pub explanation: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CompletionQuestion {
    pub sentence: String, // contiene exactamente un BLANK
    pub answer: String,
    pub hint: Option<String>,
}

impl CompletionQuestion {
    /// Parte la frase en (antes, después) del hueco.
    pub fn parts(&self) -> (&str, &str) {
        self.sentence.split_once(BLANK).unwrap_or((&self.sentence, ""))
    }
}

/// Unión etiquetada sobre los tres tipos de pregunta.
/// Un banco siempre es homogéneo (todas del mismo tipo).
#[derive(Debug, Clone)]
pub enum Question {
    Choice(ChoiceQuestion),
    Boolean(BooleanQuestion),
    Completion(CompletionQuestion),
}

impl Question {
    pub fn prompt(&self) -> &str {
        match self {
            Question::Choice(q) => &q.question,
            Question::Boolean(q) => &q.statement,
            Question::Completion(q) => &q.sentence,
        }
    }

    pub fn explanation(&self) -> Option<&str> {
        match self {
            Question::Choice(q) => Some(&q.explanation),
            Question::Boolean(q) => Some(&q.explanation),
            Question::Completion(_) => None,
        }
    }
}

// ---------- Páginas y pestañas ----------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Intro,
    Teaching,
    Practice,
    Review,
    Acknowledgements,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Intro,
        Page::Teaching,
        Page::Practice,
        Page::Review,
        Page::Acknowledgements,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Intro => "Introduction",
            Page::Teaching => "Teaching",
            Page::Practice => "Practice",
            Page::Review => "Review",
            Page::Acknowledgements => "Acknowledgements",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Intro => "🧠",
            Page::Teaching => "📖",
            Page::Practice => "✏",
            Page::Review => "🔄",
            Page::Acknowledgements => "🏆",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TeachingTab {
    #[default]
    Reading,
    Writing,
    Speaking,
    Listening,
}

impl TeachingTab {
    pub const ALL: [TeachingTab; 4] = [
        TeachingTab::Reading,
        TeachingTab::Writing,
        TeachingTab::Speaking,
        TeachingTab::Listening,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TeachingTab::Reading => "📖 Reading",
            TeachingTab::Writing => "🖊 Writing",
            TeachingTab::Speaking => "🎙 Speaking",
            TeachingTab::Listening => "🎧 Listening",
        }
    }
}

// ---------- Contenido autorado de la lección ----------

#[derive(Deserialize, Debug, Clone)]
pub struct MemoryKindCard {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub examples: Vec<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct MeaningCard {
    pub icon: String,
    pub title: String,
    pub body: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct StoreFacts {
    pub title: String,
    pub duration: String,
    pub capacity: String,
    pub function: String,
    pub extra_label: String,
    pub extra: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct IntroContent {
    pub title: String,
    pub presenter: String,
    pub school: String,
    pub blurb: String,
    pub meanings: Vec<MeaningCard>,
    pub memory_kinds: Vec<MemoryKindCard>,
    pub short_term: StoreFacts,
    pub long_term: StoreFacts,
    pub essential: String,
    pub motto: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ReadingSection {
    pub heading: String,
    pub content: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct WritingPrompt {
    pub title: String,
    pub prompt: String,
    pub word_count: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SpeakingTopic {
    pub topic: String,
    pub prompt: String,
    pub tips: Vec<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ListeningScenario {
    pub text: String,
    pub answer: String,
    pub explanation: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct TeachingContent {
    pub reading_title: String,
    pub reading: Vec<ReadingSection>,
    pub writing: Vec<WritingPrompt>,
    pub speaking: Vec<SpeakingTopic>,
    pub listening_title: String,
    pub listening_intro: String,
    pub listening: Vec<ListeningScenario>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ReviewSection {
    pub title: String,
    pub points: Vec<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ReviewContent {
    pub sections: Vec<ReviewSection>,
    pub model_title: String,
    pub model_stages: Vec<String>,
    pub quote: String,
    pub motto: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CourseFact {
    pub label: String,
    pub value: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AcknowledgementsContent {
    pub presenter: String,
    pub roles: Vec<String>,
    pub course: Vec<CourseFact>,
    pub references: Vec<String>,
    pub thanks: String,
}

/// Todo el contenido autorado de la lección, parseado del YAML embebido.
#[derive(Deserialize, Debug, Clone)]
pub struct LessonContent {
    pub intro: IntroContent,
    pub teaching: TeachingContent,
    pub review: ReviewContent,
    pub acknowledgements: AcknowledgementsContent,
}
