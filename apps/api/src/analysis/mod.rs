// Resume analysis: request validation, the analyzer seam and the fixed mock payload.
// The analyzer trait is the only thing a real engine replaces; the contract stays put.

pub mod analyzer;
pub mod handlers;
pub mod models;
