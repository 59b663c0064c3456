//! Hand-written sound-design exercises served without the completion API.

use std::sync::OnceLock;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::generation::tips::MAX_TIPS;
use crate::models::prompt::SoundDesignDifficulty;
use crate::random::WeightedTable;
use crate::sound_design::synth::{SoundExercise, Synthesizer};

const SERUM_TECHNICAL: &[&str] = &[
    "Build a reese bass in Serum 2: stack two detuned saw wavetables, route LFO 1 to wavetable position at a slow rate, and tame the low end with a 24dB low-pass before the distortion slot.",
    "Import a spoken word sample into a Serum 2 wavetable oscillator, scan it with an envelope, and shape it into a talking lead using the formant filter.",
    "Use the granular oscillator in Serum 2 to turn a one-second vocal chop into an evolving pad, modulating grain position with a random-stepped LFO.",
    "Design a pluck in Serum 2 using only envelope 2 on filter cutoff and wavetable position; keep the amp envelope fixed and make all the movement come from modulation.",
    "Recreate a riser in Serum 2: automate noise oscillator level, filter cutoff and reverb size from a single macro so one knob sweeps the whole build.",
];

const SERUM_CREATIVE: &[&str] = &[
    "Design the sound of a memory fading in Serum 2. Start with something bright and let the modulation slowly take detail away.",
    "In Serum 2, make a patch that sounds like the moment before rain. What changes in the air, and how would a filter hear it?",
    "Draw a wavetable in Serum 2 from the outline of the nearest object on your desk and find the sound hiding inside it.",
    "Build a Serum 2 patch that breathes. Where does the inhale live, and where does the exhale go?",
    "Pick a colour you have seen today and translate it into a Serum 2 pad without using any preset as a starting point.",
];

const PHASE_PLANT_TECHNICAL: &[&str] = &[
    "In Phase Plant, route an analog generator and a sample generator into separate lanes, then sidechain lane 2 from lane 1 with a Snapin compressor to build a layered kick.",
    "Create an FM bell in Phase Plant by modulating one analog generator's frequency with another at a 3.5 ratio, shaping the index with a short envelope.",
    "Use Phase Plant's granular generator to freeze a drum loop into a drone, modulating grain spray with a slow LFO and placing a Snapin reverb at the end of the lane.",
    "Build a multiband distortion chain in Phase Plant using Snapins only, with a separate modulator controlling the drive of each band.",
    "Set up a Phase Plant patch where one remap modulator curves the velocity response across filter cutoff, drive and amplitude at the same time.",
];

const PHASE_PLANT_CREATIVE: &[&str] = &[
    "Use Phase Plant's lanes to tell a three-part story: one lane for the past, one for the present, one for what might happen next.",
    "In Phase Plant, design the sound of a machine that dreams. What does it hear when nobody is listening?",
    "Give yourself one generator and four Snapins in Phase Plant. What can a single voice become when every effect has to earn its place?",
    "Make a Phase Plant patch that sounds different every time you press the same key, and notice which surprises you want to keep.",
    "In Phase Plant, turn the rhythm of your own footsteps into a modulator and let it drive something that usually stays still.",
];

const VITAL_TECHNICAL: &[&str] = &[
    "Use Vital's text-to-wavetable feature on a single word, then apply spectral warp and modulate the warp amount with an envelope to create a vowel-like lead.",
    "Design a supersaw in Vital using unison voices, stereo spread and the chorus effect, then carve space for vocals with the EQ.",
    "Draw a custom LFO shape in Vital that mimics a sidechain pump and route it to both the oscillator levels and the filter mix.",
    "Build a growl bass in Vital by modulating the filter's formant style with an LFO synced to 1/8 notes and adding distortion before the compressor.",
    "Import a field recording into Vital's sample oscillator and blend it underneath a wavetable pad as a texture layer with its own filter.",
];

const VITAL_CREATIVE: &[&str] = &[
    "In Vital, design the sound of light passing through water. How does the texture change as it goes deeper?",
    "Type your name into Vital's text-to-wavetable and treat whatever comes out as a character. Who is it, and how does it move?",
    "Make a Vital patch that feels like an old photograph: slightly faded, slightly warm, a little out of focus.",
    "In Vital, build a sound that starts as a question and ends as an answer. Where does it change its mind?",
    "Create a Vital pad for a place you have never been. What would the air sound like there?",
];

/// Literal example exercises for one synthesizer and exercise type.
pub fn examples(synthesizer: Synthesizer, exercise: SoundExercise) -> &'static [&'static str] {
    match (synthesizer, exercise) {
        (Synthesizer::Serum2, SoundExercise::Technical) => SERUM_TECHNICAL,
        (Synthesizer::Serum2, SoundExercise::Creative) => SERUM_CREATIVE,
        (Synthesizer::PhasePlant, SoundExercise::Technical) => PHASE_PLANT_TECHNICAL,
        (Synthesizer::PhasePlant, SoundExercise::Creative) => PHASE_PLANT_CREATIVE,
        (Synthesizer::Vital, SoundExercise::Technical) => VITAL_TECHNICAL,
        (Synthesizer::Vital, SoundExercise::Creative) => VITAL_CREATIVE,
    }
}

const TECHNICAL_TIPS: [&str; 3] = [
    "Save a snapshot of the patch before each major change so you can compare versions.",
    "Check your sound in mono and at low volume to catch phase and balance issues early.",
    "Name every macro and modulation source so the patch still makes sense next week.",
];

const CREATIVE_TIP_POOL: [&str; 7] = [
    "Follow the first interesting accident instead of the plan.",
    "Listen with your eyes closed before deciding what to change.",
    "Set a timer and stop when it rings, even if the sound feels unfinished.",
    "Describe the sound in three words before you start, then again when you finish.",
    "Try the opposite of your first instinct at least once.",
    "Record short takes of the sound as it evolves instead of only keeping the final patch.",
    "Leave one parameter untouched for the whole session and notice what that changes.",
];

/// Tips for the catalog path: fixed for technical, three distinct random picks for creative.
pub fn tips<R: Rng + ?Sized>(exercise: SoundExercise, rng: &mut R) -> Vec<String> {
    match exercise {
        SoundExercise::Technical => TECHNICAL_TIPS.map(str::to_string).to_vec(),
        SoundExercise::Creative => CREATIVE_TIP_POOL
            .choose_multiple(rng, MAX_TIPS)
            .map(|tip| tip.to_string())
            .collect(),
    }
}

fn difficulty_table() -> &'static WeightedTable<(SoundDesignDifficulty, &'static str)> {
    static TABLE: OnceLock<WeightedTable<(SoundDesignDifficulty, &'static str)>> = OnceLock::new();
    TABLE.get_or_init(|| {
        WeightedTable::new([
            ((SoundDesignDifficulty::Beginner, "15-20 minutes"), 1),
            ((SoundDesignDifficulty::Intermediate, "25-35 minutes"), 1),
            ((SoundDesignDifficulty::Advanced, "45-60 minutes"), 1),
        ])
    })
}

/// Draws a `(difficulty, estimated_time)` row, uniformly.
pub fn pick_difficulty<R: Rng + ?Sized>(rng: &mut R) -> (SoundDesignDifficulty, &'static str) {
    *difficulty_table().pick(rng)
}
