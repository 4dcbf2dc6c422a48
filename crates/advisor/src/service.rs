//! The text service seam used by the shell.

use std::future::Future;

/// Nickname length cap.
pub const MAX_NICKNAME_CHARS: usize = 12;

/// Best-effort text generation. Implementations never fail: errors resolve
/// to a fallback string.
pub trait TextService: Send + Sync + 'static {
    /// A short nickname inspired by `theme`, at most [`MAX_NICKNAME_CHARS`] characters.
    fn nickname(&self, theme: &str) -> impl Future<Output = String> + Send;

    /// One short tactical tip for the current mass and threat count.
    fn advice(&self, mass: u32, threats: u32) -> impl Future<Output = String> + Send;
}

pub fn nickname_prompt(theme: &str) -> String {
    format!(
        "Generate a single, cool, short (max 10 chars) nickname for a competitive arcade game \
         based on the theme: \"{theme}\". Return ONLY the name, no quotes."
    )
}

pub fn advice_prompt(mass: u32, threats: u32) -> String {
    format!(
        "I am playing an Agar.io clone.\n\
         My current mass is {mass}.\n\
         I can see {threats} players larger than me nearby.\n\
         Give me a one-sentence tactical tip. Be brief and punchy."
    )
}

/// Trim a generated nickname and cap its length. `None` if nothing is left.
pub fn tidy_nickname(raw: &str) -> Option<String> {
    let name: String = raw.trim().chars().take(MAX_NICKNAME_CHARS).collect();
    (!name.is_empty()).then_some(name)
}
