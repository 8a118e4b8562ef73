//! Perplexity adapters for the recipe extraction ports.
//!
//! Builds chat-completion requests from a recipe URL, sends them with a bearer
//! credential and maps the upstream answer onto domain results.

pub mod client;
pub mod connectivity_probe;
pub mod prompt;
pub mod recipe_extractor;
pub mod response_mapper;
pub mod types;

#[cfg(test)]
mod fake_upstream;
