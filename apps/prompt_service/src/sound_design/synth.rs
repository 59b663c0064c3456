use std::fmt;

/// Synthesizers with sound-design exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Synthesizer {
    Serum2,
    PhasePlant,
    Vital,
}

impl Synthesizer {
    pub const ALL: [Synthesizer; 3] = [
        Synthesizer::Serum2,
        Synthesizer::PhasePlant,
        Synthesizer::Vital,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Synthesizer::Serum2 => "Serum 2",
            Synthesizer::PhasePlant => "Phase Plant",
            Synthesizer::Vital => "Vital",
        }
    }

    /// Exact, case-sensitive match on the display name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// `"Serum 2, Phase Plant, Vital"`, for validation messages.
    pub fn valid_names() -> String {
        Self::ALL.map(|s| s.name()).join(", ")
    }
}

impl fmt::Display for Synthesizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Technical exercises teach a technique; creative ones start from a concept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundExercise {
    Technical,
    Creative,
}

impl SoundExercise {
    pub const ALL: [SoundExercise; 2] = [SoundExercise::Technical, SoundExercise::Creative];

    /// Wire value, as accepted in requests and echoed in responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundExercise::Technical => "technical",
            SoundExercise::Creative => "creative",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SoundExercise::Technical => "Technical",
            SoundExercise::Creative => "Creative",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.as_str() == value)
    }

    pub fn valid_values() -> String {
        Self::ALL.map(|e| e.as_str()).join(", ")
    }
}

/// Title used when the completion has none, and on the catalog path.
pub fn default_title(synthesizer: Synthesizer, exercise: SoundExercise) -> String {
    format!("{} - {} Exercise", synthesizer.name(), exercise.label())
}
