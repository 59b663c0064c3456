//! Template path: pick a template for the selected genres and fill its placeholders.

use std::sync::OnceLock;

use rand::seq::SliceRandom;
use rand::Rng;
use regex::{Captures, Regex};
use thiserror::Error;

use crate::generation::templates::{templates_for, CategoryTemplate, DEFAULT_TEMPLATE};
use crate::generation::tips::select_tips;
use crate::generation::word_count::pick_word_count;
use crate::models::prompt::{utc_timestamp, WritingPrompt};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template '{title}' has no candidates for placeholder '{placeholder}'")]
    UnknownPlaceholder {
        title: &'static str,
        placeholder: String,
    },
}

/// A template with every placeholder substituted.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedTemplate {
    pub title: String,
    pub content: String,
}

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder regex is valid")
    })
}

/// Chooses a template for `categories` and fills it in.
///
/// Templates of every recognised category are pooled (a category with several
/// templates contributes all of them); unknown categories are skipped. An
/// empty pool falls back to `DEFAULT_TEMPLATE`.
pub fn render<R: Rng + ?Sized>(
    categories: &[String],
    rng: &mut R,
) -> Result<RenderedTemplate, RenderError> {
    let pool: Vec<&CategoryTemplate> = categories
        .iter()
        .flat_map(|category| templates_for(category).iter())
        .collect();

    let template = pool.choose(rng).copied().unwrap_or(&DEFAULT_TEMPLATE);

    Ok(RenderedTemplate {
        title: template.title.to_string(),
        content: fill(template, rng)?,
    })
}

/// Replaces each placeholder occurrence with its own independently drawn candidate.
fn fill<R: Rng + ?Sized>(template: &CategoryTemplate, rng: &mut R) -> Result<String, RenderError> {
    let mut missing: Option<String> = None;

    let filled = placeholder_pattern().replace_all(template.body, |caps: &Captures| {
        let name = &caps[1];
        match template.candidates(name).and_then(|c| c.choose(&mut *rng)) {
            Some(choice) => (*choice).to_string(),
            None => {
                missing.get_or_insert_with(|| name.to_string());
                caps[0].to_string()
            }
        }
    });

    match missing {
        Some(placeholder) => Err(RenderError::UnknownPlaceholder {
            title: template.title,
            placeholder,
        }),
        None => Ok(filled.into_owned()),
    }
}

/// Builds a complete writing prompt from the template library.
pub fn generate_from_template<R: Rng + ?Sized>(
    genres: &[String],
    rng: &mut R,
) -> Result<WritingPrompt, RenderError> {
    let rendered = render(genres, rng)?;
    let (word_count, difficulty) = pick_word_count(rng);

    Ok(WritingPrompt {
        title: rendered.title,
        content: rendered.content,
        genres: genres.to_vec(),
        difficulty,
        word_count,
        tips: select_tips(genres),
        timestamp: utc_timestamp(),
        exercise_type: None,
        ai_generated: false,
    })
}
