use super::error::QuizError;
use crate::core::catalog::elements::ElementCatalog;
use crate::core::models::element::{Element, Phase};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Deserialize;
use std::path::Path;

const WRONG_ANSWERS: usize = 3;
const EXPLANATION_CHARS: usize = 100;
const MIN_ELEMENTS: usize = WRONG_ANSWERS + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    SymbolToName,
    NameToSymbol,
    NumberToName,
    Category,
    Phase,
    /// Taken verbatim from a question bank.
    Static,
}

const GENERATED_KINDS: [QuestionKind; 5] = [
    QuestionKind::SymbolToName,
    QuestionKind::NameToSymbol,
    QuestionKind::NumberToName,
    QuestionKind::Category,
    QuestionKind::Phase,
];

/// A multiple-choice question. `answers` always contains `correct_answer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub kind: QuestionKind,
    pub prompt: String,
    pub answers: Vec<String>,
    pub correct_answer: String,
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub correct: bool,
    pub message: String,
}

/// Compares a submitted answer to the correct one (surrounding whitespace ignored).
pub fn check_answer(question: &Question, answer: &str) -> AnswerFeedback {
    let correct = answer.trim() == question.correct_answer;
    let message = if correct {
        "Correct!".to_string()
    } else {
        format!(
            "Incorrect. The correct answer is: {}",
            question.correct_answer
        )
    };
    AnswerFeedback { correct, message }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct QuestionFile {
    #[serde(default)]
    question: Vec<BankEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct BankEntry {
    question: String,
    answers: Vec<String>,
    correct_answer: String,
    #[serde(default)]
    explanation: Option<String>,
}

/// A validated, non-empty set of static questions.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Validates and wraps a list of questions.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyBank` for an empty list, or
    /// `QuizError::InvalidQuestion` (with a 1-based index) when a question has
    /// fewer than two answers, repeats an answer, or omits its correct answer.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyBank);
        }
        for (i, question) in questions.iter().enumerate() {
            let invalid = |reason: &str| QuizError::InvalidQuestion {
                index: i + 1,
                reason: reason.to_string(),
            };
            if question.prompt.trim().is_empty() {
                return Err(invalid("question text is empty"));
            }
            if question.answers.len() < 2 {
                return Err(invalid("at least two answers are required"));
            }
            let mut sorted = question.answers.clone();
            sorted.sort();
            sorted.dedup();
            if sorted.len() != question.answers.len() {
                return Err(invalid("answers must be distinct"));
            }
            if !question.answers.contains(&question.correct_answer) {
                return Err(invalid("the correct answer is not among the answers"));
            }
        }
        Ok(Self { questions })
    }

    pub fn from_toml_str(content: &str, source: &str) -> Result<Self, QuizError> {
        let file: QuestionFile = toml::from_str(content).map_err(|e| QuizError::Toml {
            path: source.to_string(),
            source: e,
        })?;
        let questions = file
            .question
            .into_iter()
            .map(|entry| Question {
                kind: QuestionKind::Static,
                prompt: entry.question,
                answers: entry.answers,
                correct_answer: entry.correct_answer,
                explanation: entry.explanation,
            })
            .collect();
        Self::new(questions)
    }

    pub fn from_toml_path(path: &Path) -> Result<Self, QuizError> {
        let content = std::fs::read_to_string(path).map_err(|e| QuizError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content, &path.to_string_lossy())
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[derive(Debug, Clone)]
enum QuestionSource<'a> {
    Generated(&'a ElementCatalog),
    Bank(QuestionBank),
}

/// Draws quiz questions uniformly at random, either generated from the
/// element catalog or picked from a static bank.
#[derive(Debug, Clone)]
pub struct QuizSelector<'a> {
    source: QuestionSource<'a>,
}

impl<'a> QuizSelector<'a> {
    /// # Errors
    ///
    /// Returns `QuizError::NotEnoughElements` if the catalog cannot supply
    /// three distinct wrong answers.
    pub fn from_elements(elements: &'a ElementCatalog) -> Result<Self, QuizError> {
        if elements.len() < MIN_ELEMENTS {
            return Err(QuizError::NotEnoughElements {
                required: MIN_ELEMENTS,
                found: elements.len(),
            });
        }
        Ok(Self {
            source: QuestionSource::Generated(elements),
        })
    }

    pub fn from_bank(bank: QuestionBank) -> Self {
        Self {
            source: QuestionSource::Bank(bank),
        }
    }

    pub fn next_question<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Question> {
        match &self.source {
            QuestionSource::Bank(bank) => {
                let mut question = bank.questions.choose(rng)?.clone();
                question.answers.shuffle(rng);
                Some(question)
            }
            QuestionSource::Generated(elements) => {
                let element = elements.as_slice().choose(rng)?;
                let kind = *GENERATED_KINDS.choose(rng)?;
                generate(elements, element, kind, rng)
                    .or_else(|| generate(elements, element, QuestionKind::NameToSymbol, rng))
            }
        }
    }
}

fn generate<R: Rng + ?Sized>(
    elements: &ElementCatalog,
    element: &Element,
    kind: QuestionKind,
    rng: &mut R,
) -> Option<Question> {
    let (prompt, correct, pool): (String, String, Vec<String>) = match kind {
        QuestionKind::SymbolToName => (
            format!("What is the name of the element with symbol '{}'?", element.symbol),
            element.name.clone(),
            elements.iter().map(|e| e.name.clone()).collect(),
        ),
        QuestionKind::NameToSymbol => (
            format!("What is the chemical symbol for {}?", element.name),
            element.symbol.clone(),
            elements.iter().map(|e| e.symbol.clone()).collect(),
        ),
        QuestionKind::NumberToName => (
            format!("Which element has atomic number {}?", element.number),
            element.name.clone(),
            elements.iter().map(|e| e.name.clone()).collect(),
        ),
        QuestionKind::Category => (
            format!("What category does {} belong to?", element.name),
            element.category_label.clone(),
            elements.categories().into_iter().map(str::to_string).collect(),
        ),
        QuestionKind::Phase => {
            if element.phase == Phase::Unknown {
                return None;
            }
            (
                format!("What is the phase of {} at room temperature?", element.name),
                element.phase.label().to_string(),
                [Phase::Solid, Phase::Liquid, Phase::Gas, Phase::Unknown]
                    .iter()
                    .map(|p| p.label().to_string())
                    .collect(),
            )
        }
        QuestionKind::Static => return None,
    };

    let mut wrong: Vec<String> = Vec::new();
    for candidate in pool {
        if candidate != correct && !wrong.contains(&candidate) {
            wrong.push(candidate);
        }
    }
    if wrong.len() < WRONG_ANSWERS {
        return None;
    }

    let mut answers: Vec<String> = wrong
        .choose_multiple(rng, WRONG_ANSWERS)
        .cloned()
        .collect();
    answers.push(correct.clone());
    answers.shuffle(rng);

    Some(Question {
        kind,
        prompt,
        answers,
        correct_answer: correct,
        explanation: element.summary.as_deref().map(|summary| {
            format!(
                "{} ({}): {}",
                element.name,
                element.symbol,
                truncate(summary, EXPLANATION_CHARS)
            )
        }),
    })
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
