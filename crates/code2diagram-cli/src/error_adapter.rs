//! miette rendering for [`Code2DiagramError`].
//!
//! Library errors carry no source spans, so the adapter only contributes a
//! stable diagnostic code per variant and a help line where one is useful.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;

use code2diagram::{Code2DiagramError, github::FetchError};

/// Adapter giving a [`Code2DiagramError`] a stable code and help text.
pub struct ErrorAdapter<'a>(pub &'a Code2DiagramError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            Code2DiagramError::Io(_) => "code2diagram::io",
            Code2DiagramError::Config(_) => "code2diagram::config",
            Code2DiagramError::EmptySubmission => "code2diagram::empty_submission",
            Code2DiagramError::Analysis(_) => "code2diagram::analysis",
            Code2DiagramError::Serialize(_) => "code2diagram::serialize",
            Code2DiagramError::Fetch(err) => match err {
                FetchError::InvalidRepoRef(_) => "code2diagram::github::invalid_repo",
                FetchError::NotFound(_) => "code2diagram::github::not_found",
                FetchError::RateLimited => "code2diagram::github::rate_limited",
                FetchError::Upstream(_) => "code2diagram::github::upstream",
                FetchError::Runtime(_) => "code2diagram::github::runtime",
            },
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            Code2DiagramError::EmptySubmission => {
                "pass a non-empty source file or pipe code on standard input".to_string()
            }
            Code2DiagramError::Analysis(reason) => format!("internal failure: {reason}"),
            Code2DiagramError::Fetch(FetchError::InvalidRepoRef(_)) => {
                "use the form owner/repo, e.g. rust-lang/rust".to_string()
            }
            Code2DiagramError::Fetch(FetchError::RateLimited) => {
                "wait for the API rate limit to reset and try again".to_string()
            }
            _ => return None,
        };
        Some(Box::new(help))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code() {
        let err = Code2DiagramError::Config("bad".to_string());
        let adapter = ErrorAdapter(&err);

        assert_eq!(adapter.code().unwrap().to_string(), "code2diagram::config");
        assert_eq!(adapter.to_string(), "Configuration error: bad");
        assert!(adapter.help().is_none());
    }

    #[test]
    fn test_fetch_error_code_and_help() {
        let err = Code2DiagramError::from(FetchError::InvalidRepoRef("x".to_string()));
        let adapter = ErrorAdapter(&err);

        assert_eq!(
            adapter.code().unwrap().to_string(),
            "code2diagram::github::invalid_repo"
        );
        assert!(adapter.help().unwrap().to_string().contains("owner/repo"));
    }

    #[test]
    fn test_analysis_message_is_fixed() {
        let err = Code2DiagramError::Analysis("index out of bounds".to_string());
        let adapter = ErrorAdapter(&err);

        assert_eq!(adapter.to_string(), "Failed to analyze code");
        assert_eq!(
            adapter.help().unwrap().to_string(),
            "internal failure: index out of bounds"
        );
    }
}
