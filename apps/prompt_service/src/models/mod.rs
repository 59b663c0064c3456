pub mod feedback;
pub mod prompt;
