use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Difficulty tier for writing prompts. Always paired with its word count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WritingDifficulty {
    #[serde(rename = "Very Easy")]
    VeryEasy,
    Easy,
    Medium,
    Hard,
}

impl WritingDifficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            WritingDifficulty::VeryEasy => "Very Easy",
            WritingDifficulty::Easy => "Easy",
            WritingDifficulty::Medium => "Medium",
            WritingDifficulty::Hard => "Hard",
        }
    }
}

/// Difficulty tier for sound-design exercises. Always paired with its estimated time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundDesignDifficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl SoundDesignDifficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundDesignDifficulty::Beginner => "Beginner",
            SoundDesignDifficulty::Intermediate => "Intermediate",
            SoundDesignDifficulty::Advanced => "Advanced",
        }
    }
}

/// Response body of `POST /generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WritingPrompt {
    pub title: String,
    pub content: String,
    pub genres: Vec<String>,
    pub difficulty: WritingDifficulty,
    pub word_count: u32,
    pub tips: Vec<String>,
    pub timestamp: String,
    /// Name of the exercise profile; AI path only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_type: Option<String>,
    #[serde(rename = "ai_generated", default, skip_serializing_if = "is_false")]
    pub ai_generated: bool,
}

/// Response body of `POST /generate-sound-design`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoundDesignPrompt {
    pub title: String,
    pub content: String,
    pub synthesizer: String,
    pub exercise_type: String,
    pub difficulty: SoundDesignDifficulty,
    pub estimated_time: String,
    pub tips: Vec<String>,
    pub timestamp: String,
    #[serde(rename = "ai_generated", default, skip_serializing_if = "is_false")]
    pub ai_generated: bool,
}

fn is_false(b: &bool) -> bool {
    !b
}

/// Current UTC time as an ISO-8601 string, e.g. `2024-05-01T12:00:00.123456Z`.
pub fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
