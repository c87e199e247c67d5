//! Code submitted for analysis.

/// A piece of source text with an optional declared language.
///
/// Submissions are transient: one is created per analysis and dropped once
/// the report has been produced.
///
/// # Examples
///
/// ```
/// use code2diagram_core::submission::CodeSubmission;
///
/// let submission = CodeSubmission::new("class App {}").with_language("javascript");
/// assert_eq!(submission.declared_language(), Some("javascript"));
/// assert_eq!(submission.total_lines(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSubmission {
    text: String,
    declared_language: Option<String>,
}

impl CodeSubmission {
    /// Creates a submission without a declared language.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            declared_language: None,
        }
    }

    /// Sets the declared language.
    ///
    /// An empty label is treated the same as no label at all.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        let language = language.into();
        self.declared_language = (!language.is_empty()).then_some(language);
        self
    }

    /// Returns the submitted text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the declared language, if any.
    pub fn declared_language(&self) -> Option<&str> {
        self.declared_language.as_deref()
    }

    /// Returns `true` if the text is empty or contains only whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Number of `\n`-separated segments in the text.
    ///
    /// An empty text counts as one line, and a trailing newline opens a
    /// final empty line.
    pub fn total_lines(&self) -> usize {
        self.text.split('\n').count()
    }
}
