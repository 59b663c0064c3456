//! Sound-design exercise generation.
//!
//! Same shape as the writing path: try the completer when one is configured,
//! fall back to the hand-written catalog on any failure. Difficulty and time
//! estimate are always drawn locally.

use rand::seq::SliceRandom;
use tracing::{error, info};

use crate::generation::postprocess::{split_leading_title, TipSection};
use crate::generation::tips::MAX_TIPS;
use crate::llm_client::{CompletionRequest, TextCompleter};
use crate::models::prompt::{utc_timestamp, SoundDesignPrompt};
use crate::random::SharedRng;
use crate::sound_design::catalog::{self, pick_difficulty};
use crate::sound_design::prompts::{system_prompt, user_prompt, CREATIVE_ARCHETYPES};
use crate::sound_design::synth::{default_title, SoundExercise, Synthesizer};

// Hotter than the writing path; sound-design completions drift toward the same few patches.
const TEMPERATURE: f32 = 1.1;
const MAX_TOKENS: u32 = 900;
const PRESENCE_PENALTY: f32 = 0.9;
const FREQUENCY_PENALTY: f32 = 0.9;

struct Drafted {
    title: String,
    content: String,
    tips: Vec<String>,
    ai_generated: bool,
}

/// Generates one exercise. `genre` is an optional style hint for the completer.
pub async fn generate_sound_design_prompt(
    completer: Option<&dyn TextCompleter>,
    rng: &SharedRng,
    synthesizer: Synthesizer,
    exercise: SoundExercise,
    genre: Option<&str>,
) -> SoundDesignPrompt {
    let mut drafted = None;
    if let Some(completer) = completer {
        drafted = generate_with_ai(completer, rng, synthesizer, exercise, genre).await;
    }
    let drafted = drafted.unwrap_or_else(|| from_catalog(rng, synthesizer, exercise));

    let (difficulty, estimated_time) = rng.with(|r| pick_difficulty(r));

    SoundDesignPrompt {
        title: drafted.title,
        content: drafted.content,
        synthesizer: synthesizer.name().to_string(),
        exercise_type: exercise.as_str().to_string(),
        difficulty,
        estimated_time: estimated_time.to_string(),
        tips: drafted.tips,
        timestamp: utc_timestamp(),
        ai_generated: drafted.ai_generated,
    }
}

fn from_catalog(rng: &SharedRng, synthesizer: Synthesizer, exercise: SoundExercise) -> Drafted {
    rng.with(|r| {
        let content = catalog::examples(synthesizer, exercise)
            .choose(r)
            .copied()
            .unwrap_or_default()
            .to_string();
        Drafted {
            title: default_title(synthesizer, exercise),
            content,
            tips: catalog::tips(exercise, r),
            ai_generated: false,
        }
    })
}

fn completion_request(
    synthesizer: Synthesizer,
    exercise: SoundExercise,
    archetype: &str,
    genre: Option<&str>,
) -> CompletionRequest {
    CompletionRequest {
        system: system_prompt(synthesizer, exercise),
        user: user_prompt(synthesizer, exercise, archetype, genre),
        temperature: TEMPERATURE,
        max_tokens: MAX_TOKENS,
        presence_penalty: PRESENCE_PENALTY,
        frequency_penalty: FREQUENCY_PENALTY,
    }
}

async fn generate_with_ai(
    completer: &dyn TextCompleter,
    rng: &SharedRng,
    synthesizer: Synthesizer,
    exercise: SoundExercise,
    genre: Option<&str>,
) -> Option<Drafted> {
    let archetype = rng.with(|r| {
        CREATIVE_ARCHETYPES
            .choose(r)
            .map(|(name, _)| *name)
            .unwrap_or("Seed")
    });
    let request = completion_request(synthesizer, exercise, archetype, genre);

    let text = match completer.complete(&request).await {
        Ok(text) => text,
        Err(e) => {
            error!("AI sound design generation failed: {e}");
            return None;
        }
    };

    let (title, body) = split_leading_title(&text)
        .unwrap_or_else(|| (default_title(synthesizer, exercise), text.trim().to_string()));

    let (mut tips, content) = TipSection::sound_design().extract_and_strip_tips(&body);
    if tips.is_empty() {
        tips = rng.with(|r| catalog::tips(exercise, r));
    }
    tips.truncate(MAX_TIPS);

    info!(
        synthesizer = synthesizer.name(),
        exercise = exercise.as_str(),
        "AI sound design exercise generated with {} tips",
        tips.len()
    );

    Some(Drafted {
        title,
        content,
        tips,
        ai_generated: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::{CannedCompleter, FailingCompleter};
    use crate::models::prompt::SoundDesignDifficulty;

    const COMPLETION: &str = "**Glass Rain**\n\
Layer two wavetables and let a slow LFO scan between them. What happens when the top layer starts to fall apart?\n\
\n\
**Sound Design Tips**:\n\
- Keep the modulation depth lower than feels natural\n\
- Bounce short takes to audio as the patch evolves\n\
- Try the patch in mono before adding width\n\
- An extra bullet that should be dropped entirely";

    fn expected_time(difficulty: SoundDesignDifficulty) -> &'static str {
        match difficulty {
            SoundDesignDifficulty::Beginner => "15-20 minutes",
            SoundDesignDifficulty::Intermediate => "25-35 minutes",
            SoundDesignDifficulty::Advanced => "45-60 minutes",
        }
    }

    #[tokio::test]
    async fn test_catalog_path_without_completer() {
        let rng = SharedRng::new(Some(5));
        let prompt = generate_sound_design_prompt(
            None,
            &rng,
            Synthesizer::Vital,
            SoundExercise::Technical,
            None,
        )
        .await;

        assert_eq!(prompt.title, "Vital - Technical Exercise");
        assert_eq!(prompt.synthesizer, "Vital");
        assert_eq!(prompt.exercise_type, "technical");
        assert!(catalog::examples(Synthesizer::Vital, SoundExercise::Technical)
            .contains(&prompt.content.as_str()));
        assert_eq!(prompt.tips.len(), 3);
        assert_eq!(prompt.estimated_time, expected_time(prompt.difficulty));
        assert!(!prompt.ai_generated);
    }

    #[tokio::test]
    async fn test_failing_completer_falls_back_to_catalog() {
        let rng = SharedRng::new(Some(6));
        let prompt = generate_sound_design_prompt(
            Some(&FailingCompleter),
            &rng,
            Synthesizer::PhasePlant,
            SoundExercise::Creative,
            Some("techno"),
        )
        .await;

        assert_eq!(prompt.title, "Phase Plant - Creative Exercise");
        assert!(catalog::examples(Synthesizer::PhasePlant, SoundExercise::Creative)
            .contains(&prompt.content.as_str()));
        assert!(!prompt.ai_generated);
    }

    #[tokio::test]
    async fn test_completion_title_and_tips_are_split_out() {
        let rng = SharedRng::new(Some(7));
        let completer = CannedCompleter::new(COMPLETION);
        let prompt = generate_sound_design_prompt(
            Some(&completer),
            &rng,
            Synthesizer::Serum2,
            SoundExercise::Creative,
            None,
        )
        .await;

        assert!(prompt.ai_generated);
        assert_eq!(prompt.title, "Glass Rain");
        assert_eq!(prompt.tips.len(), 3);
        assert_eq!(prompt.tips[0], "Keep the modulation depth lower than feels natural");
        assert!(!prompt.content.contains("Sound Design Tips"));
        assert!(prompt.content.starts_with("Layer two wavetables"));
        assert_eq!(prompt.estimated_time, expected_time(prompt.difficulty));
    }

    #[tokio::test]
    async fn test_completion_without_tips_uses_catalog_tips() {
        let rng = SharedRng::new(Some(8));
        let completer = CannedCompleter::new(
            "This is a long opening sentence that describes the exercise in detail and ends with a period.\nMore text.",
        );
        let prompt = generate_sound_design_prompt(
            Some(&completer),
            &rng,
            Synthesizer::Vital,
            SoundExercise::Technical,
            None,
        )
        .await;

        assert!(prompt.ai_generated);
        assert_eq!(prompt.title, "Vital - Technical Exercise");
        assert!(prompt.content.starts_with("This is a long opening sentence"));
        let fixed = SharedRng::new(None).with(|r| catalog::tips(SoundExercise::Technical, r));
        assert_eq!(prompt.tips, fixed);
    }

    #[tokio::test]
    async fn test_request_carries_sampling_params_and_genre() {
        let rng = SharedRng::new(Some(9));
        let completer = CannedCompleter::new(COMPLETION);
        generate_sound_design_prompt(
            Some(&completer),
            &rng,
            Synthesizer::PhasePlant,
            SoundExercise::Technical,
            Some("drum and bass"),
        )
        .await;

        let request = completer.last_request().unwrap();
        assert_eq!(request.temperature, 1.1);
        assert_eq!(request.max_tokens, 900);
        assert_eq!(request.presence_penalty, 0.9);
        assert_eq!(request.frequency_penalty, 0.9);
        assert!(request.system.contains("Phase Plant"));
        assert!(request.user.contains("drum and bass"));
    }
}
