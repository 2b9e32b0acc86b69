use super::load_catalog;
use crate::cli::QuizArgs;
use crate::config::AppConfig;
use crate::display::cards;
use crate::error::{CliError, Result};
use crate::utils::parser::{ParseError, parse_choice};
use periodica::engine::quiz::{QuizSelector, check_answer};
use periodica::workflows::load;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{self, BufRead, Write};
use tracing::info;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QuizScore {
    pub asked: usize,
    pub correct: usize,
}

impl QuizScore {
    pub fn percent(&self) -> f64 {
        if self.asked == 0 {
            0.0
        } else {
            self.correct as f64 * 100.0 / self.asked as f64
        }
    }
}

pub async fn run(args: QuizArgs, config: &AppConfig) -> Result<()> {
    let mut catalog_config = config.catalog.clone();
    if let Some(path) = args.questions {
        catalog_config.questions = Some(path);
    }
    let bank = load::question_bank(&catalog_config)?;
    let catalog = load_catalog(config).await?;

    let selector = match bank {
        Some(bank) => QuizSelector::from_bank(bank),
        None => QuizSelector::from_elements(&catalog.elements)?,
    };
    let num_questions = args.num_questions.unwrap_or(config.num_questions);
    if num_questions == 0 {
        return Err(CliError::Argument(
            "The quiz needs at least one question.".to_string(),
        ));
    }
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let score = tokio::task::block_in_place(|| {
        let stdin = io::stdin();
        let stdout = io::stdout();
        run_quiz(&selector, num_questions, &mut rng, stdin.lock(), stdout.lock())
    })?;
    info!(asked = score.asked, correct = score.correct, "Quiz finished.");
    Ok(())
}

/// Asks up to `num_questions` questions, stopping early at end of input.
pub fn run_quiz<R: Rng + ?Sized>(
    selector: &QuizSelector<'_>,
    num_questions: usize,
    rng: &mut R,
    mut input: impl BufRead,
    mut out: impl Write,
) -> Result<QuizScore> {
    let mut score = QuizScore::default();

    'questions: for number in 1..=num_questions {
        let Some(question) = selector.next_question(rng) else {
            break;
        };
        cards::print_question(&mut out, number, num_questions, &question);

        let answer = loop {
            write!(out, "Your answer: ")?;
            out.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                break 'questions;
            }
            match parse_choice(&line, &question.answers) {
                Ok(answer) => break answer,
                Err(ParseError::Empty) => continue,
                Err(e) => writeln!(out, "{}", e)?,
            }
        };

        let feedback = check_answer(&question, &answer);
        score.asked += 1;
        if feedback.correct {
            score.correct += 1;
        }
        writeln!(out, "{}", feedback.message)?;
        if let Some(explanation) = &question.explanation {
            writeln!(out, "{}", explanation)?;
        }
        writeln!(out, "Score: {}/{}", score.correct, score.asked)?;
    }

    writeln!(
        out,
        "Final score: {}/{} ({:.0}%)",
        score.correct,
        score.asked,
        score.percent()
    )?;
    out.flush()?;
    Ok(score)
}
