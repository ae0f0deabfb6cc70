// Post generation engine.
// Implements: template composition, length normalization, trending rotation, tone palettes.
// Everything below handlers is synchronous and I/O-free.

pub mod composer;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod normalizer;
pub mod random;
pub mod templates;
pub mod tone;
pub mod trending;
