//! Text service errors and the fallback each one maps to.

use thiserror::Error;

pub const NICKNAME_WHEN_EMPTY: &str = "CosmicUser";
pub const NICKNAME_WHEN_FAILED: &str = "Nova";
pub const ADVICE_WITHOUT_KEY: &str = "Stay away from bigger circles and eat smaller ones!";
pub const ADVICE_WHEN_EMPTY: &str = "Keep growing!";
pub const ADVICE_WHEN_FAILED: &str = "Eat food to grow, avoid giants!";

#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("no API key in ${0}")]
    MissingKey(String),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("service returned no text")]
    EmptyResponse,
}

impl AdvisorError {
    /// Nickname to show instead of a generated one.
    pub fn nickname_fallback(&self) -> String {
        match self {
            Self::MissingKey(_) => local_nickname(),
            Self::EmptyResponse => NICKNAME_WHEN_EMPTY.to_string(),
            Self::Http(_) | Self::Status { .. } => NICKNAME_WHEN_FAILED.to_string(),
        }
    }

    /// Tip to show instead of a generated one.
    pub fn advice_fallback(&self) -> &'static str {
        match self {
            Self::MissingKey(_) => ADVICE_WITHOUT_KEY,
            Self::EmptyResponse => ADVICE_WHEN_EMPTY,
            Self::Http(_) | Self::Status { .. } => ADVICE_WHEN_FAILED,
        }
    }
}

/// `PlayerNNN` with NNN in `0..1000`.
pub fn local_nickname() -> String {
    format!("Player{}", rand::random_range(0..1000))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallbacks_by_error() {
        let missing = AdvisorError::MissingKey("API_KEY".to_string());
        assert!(missing.nickname_fallback().starts_with("Player"));
        assert_eq!(missing.advice_fallback(), ADVICE_WITHOUT_KEY);

        assert_eq!(AdvisorError::EmptyResponse.nickname_fallback(), "CosmicUser");
        assert_eq!(AdvisorError::EmptyResponse.advice_fallback(), "Keep growing!");

        let status = AdvisorError::Status {
            status: reqwest::StatusCode::TOO_MANY_REQUESTS,
            body: String::new(),
        };
        assert_eq!(status.nickname_fallback(), "Nova");
        assert_eq!(status.advice_fallback(), ADVICE_WHEN_FAILED);
    }

    #[test]
    fn test_local_nickname_shape() {
        for _ in 0..50 {
            let name = local_nickname();
            let number: u32 = name.strip_prefix("Player").unwrap().parse().unwrap();
            assert!(number < 1000);
        }
    }
}
