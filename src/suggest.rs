// src/suggest.rs

//! Seam towards the external suggestion backend.
//!
//! The default processors derive task lists, skills and salary estimates from
//! a completion service (typically an LLM). That service is a black-box
//! collaborator: the engine only needs "prompt in, text out". Hosts
//! implement [`SuggestionProvider`] over their own client; tests and
//! backend-less embedders use [`StaticSuggestions`].

use std::fmt::Debug;

use anyhow::Result;

/// Abstract completion backend used by suggestion-backed processors.
///
/// Implementations are expected to be synchronous from the engine's point of
/// view; blocking, retries and timeouts live behind this trait, not in the
/// engine (a processor that never returns blocks `notify_change`).
pub trait SuggestionProvider: Send + Sync + Debug {
    /// Produce completion text for `prompt`, or an error if the backend is
    /// unavailable. Errors surface through the engine's failure policy.
    fn complete(&self, prompt: &str) -> Result<String>;
}

/// Canned provider: answers from a list of `(needle, response)` pairs.
///
/// `complete` returns the response of the first needle found in the prompt
/// (substring match), then the default response if one was set, then an
/// error. Matching on a stable keyword of each prompt ("tasks", "salary",
/// ...) keeps fixtures independent of exact prompt wording.
#[derive(Debug, Clone, Default)]
pub struct StaticSuggestions {
    responses: Vec<(String, String)>,
    fallback: Option<String>,
}

impl StaticSuggestions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a canned response for prompts containing `needle`.
    pub fn with(mut self, needle: impl Into<String>, response: impl Into<String>) -> Self {
        self.responses.push((needle.into(), response.into()));
        self
    }

    /// Response for prompts no needle matches.
    pub fn with_fallback(mut self, response: impl Into<String>) -> Self {
        self.fallback = Some(response.into());
        self
    }
}

impl SuggestionProvider for StaticSuggestions {
    fn complete(&self, prompt: &str) -> Result<String> {
        for (needle, response) in &self.responses {
            if prompt.contains(needle.as_str()) {
                return Ok(response.clone());
            }
        }
        self.fallback
            .clone()
            .ok_or_else(|| anyhow::anyhow!("no canned response matches prompt: {prompt:?}"))
    }
}
