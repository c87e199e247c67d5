//! Code2Diagram Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Code2Diagram
//! crates. It includes:
//!
//! - **Submission**: Code text plus its declared language ([`submission::CodeSubmission`])
//! - **Extraction**: Raw counts from the shallow structural scan ([`extraction::ExtractionResult`])
//! - **Flowchart**: Directed-graph model rendered as Mermaid text ([`flowchart`] module)
//! - **Report**: Serializable analysis report ([`report::AnalysisReport`])

pub mod extraction;
pub mod flowchart;
pub mod report;
pub mod submission;
