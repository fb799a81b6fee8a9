pub mod client;
pub mod types;

pub use client::{Analyzer, BackendError, HttpAnalyzer};
pub use types::{
    AnalysisRequest, AnalysisResult, DefinitionResult, GrammarIssue, GrammarResult, Mode,
    StyleResult,
};
