// Mock-interview feedback: presence check on audio_data, canned speech analysis.

pub mod analyzer;
pub mod handlers;
pub mod models;
