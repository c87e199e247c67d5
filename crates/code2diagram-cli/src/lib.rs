//! CLI logic for the Code2Diagram tool.
//!
//! This module contains the core CLI logic: reading code from a file,
//! standard input or a GitHub repository, running the analysis and writing
//! the rendered result.

pub mod error_adapter;

mod args;
mod config;
mod output;

pub use args::{Args, OutputFormat};

use std::{
    fs,
    io::{self, Write},
};

use log::{info, warn};

use code2diagram::{
    Analyzer, Code2DiagramError,
    github::{FetchError, RepoFetcher, RepoRef},
    submission::CodeSubmission,
};

use output::FileReport;

/// Run the Code2Diagram CLI application
///
/// Analyzes the input file (or standard input, or the script files of a
/// GitHub repository) and writes the result in the requested format.
///
/// # Errors
///
/// Returns `Code2DiagramError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Empty input
/// - Repository fetch errors
/// - Serialization errors
pub fn run(args: &Args) -> Result<(), Code2DiagramError> {
    let app_config = config::load_config(args.config.as_ref())?;
    let analyzer = Analyzer::new(app_config);

    let rendered = match &args.github {
        Some(repo) => analyze_repository(&analyzer, repo, args.format)?,
        None => analyze_input(&analyzer, args)?,
    };

    match &args.output {
        Some(path) => {
            fs::write(path, rendered)?;
            info!(output_file = path; "Result written");
        }
        None => io::stdout().write_all(rendered.as_bytes())?,
    }

    Ok(())
}

fn analyze_input(analyzer: &Analyzer, args: &Args) -> Result<String, Code2DiagramError> {
    let source = match args.input.as_deref() {
        None | Some("-") => {
            info!("Reading code from standard input");
            io::read_to_string(io::stdin())?
        }
        Some(path) => {
            info!(input_path = path; "Reading code from file");
            fs::read_to_string(path)?
        }
    };

    let mut submission = CodeSubmission::new(source);
    if let Some(language) = &args.language {
        submission = submission.with_language(language.as_str());
    }

    let report = analyzer.analyze(&submission)?;
    let advice = analyzer.advise(&submission, &report);
    output::render_report(&report, &advice, args.format)
}

fn analyze_repository(
    analyzer: &Analyzer,
    repo: &str,
    format: OutputFormat,
) -> Result<String, Code2DiagramError> {
    let repo = RepoRef::parse(repo)?;
    let fetcher = RepoFetcher::new(analyzer.config().github())?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| FetchError::Runtime(err.to_string()))?;
    let content = runtime.block_on(fetcher.fetch(&repo))?;

    info!(
        repo = repo.to_string(),
        fetched = content.files().len(),
        total_files = content.total_files();
        "Analyzing repository files"
    );

    let mut reports = Vec::with_capacity(content.files().len());
    for file in content.files() {
        let submission = CodeSubmission::new(file.content()).with_language(file.language());
        let report = match analyzer.analyze(&submission) {
            Ok(report) => report,
            Err(Code2DiagramError::EmptySubmission) => {
                warn!(path = file.path(); "Skipping empty file");
                continue;
            }
            Err(err) => return Err(err),
        };
        let advice = analyzer.advise(&submission, &report);
        reports.push(FileReport {
            path: file.path().to_string(),
            language: file.language().to_string(),
            report,
            advice,
        });
    }

    output::render_repository(&reports, format)
}
