//! Per-feature converters from the assistant's free-text replies into the
//! shapes the routes return. All parsers are pure functions.

pub mod feedback;
pub mod flashcards;
pub mod quiz;
pub mod steps;
