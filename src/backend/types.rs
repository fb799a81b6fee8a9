//! Request and result shapes exchanged with the analysis backend.
//!
//! The backend answers with untyped JSON and no discriminant field, so the
//! [`Mode`] that produced a request decides how its response is read.
//! Coercion happens here, at the boundary: every field is optional and
//! wrong-typed values degrade to "absent" instead of failing the parse.

use serde::Serialize;
use serde_json::{Map, Value};

/// Which backend action ran most recently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    None,
    Style,
    Grammar,
    Define,
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::None => "none",
            Mode::Style => "style",
            Mode::Grammar => "grammar",
            Mode::Define => "define",
        }
    }
}

/// A request for one of the three analyses.
///
/// Serializes to the exact request body the backend expects:
/// `{"text": ...}` for style and grammar, `{"word": ...}` for definitions.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum AnalysisRequest {
    Style { text: String },
    Grammar { text: String },
    Define { word: String },
}

impl AnalysisRequest {
    pub fn mode(&self) -> Mode {
        match self {
            AnalysisRequest::Style { .. } => Mode::Style,
            AnalysisRequest::Grammar { .. } => Mode::Grammar,
            AnalysisRequest::Define { .. } => Mode::Define,
        }
    }

    /// Endpoint path, appended to the backend base URL.
    pub fn path(&self) -> &'static str {
        match self {
            AnalysisRequest::Style { .. } => "/api/style",
            AnalysisRequest::Grammar { .. } => "/api/grammar",
            AnalysisRequest::Define { .. } => "/api/define",
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct StyleResult {
    pub overall: Option<String>,
    pub readability_level: Option<String>,
    pub high_level_suggestions: Option<Vec<String>>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct GrammarIssue {
    pub message: String,
    pub before: String,
    pub after: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct GrammarResult {
    pub corrected_text: Option<String>,
    pub score: Option<f64>,
    /// Kept in the order the backend returned them.
    pub issues: Vec<GrammarIssue>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct DefinitionResult {
    pub word: Option<String>,
    pub part_of_speech: Option<String>,
    pub definition: Option<String>,
    pub example: Option<String>,
    pub level: Option<String>,
    pub synonyms: Option<Vec<String>>,
}

/// A successful backend payload, tagged by the mode that requested it.
///
/// Serializes back to the JSON object it was read from (absent fields as
/// `null`), which is what [`AnalysisResult::reinterpret`] relies on.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum AnalysisResult {
    Style(StyleResult),
    Grammar(GrammarResult),
    Definition(DefinitionResult),
    /// The backend answered with a bare JSON string; shown verbatim.
    Text(String),
}

impl AnalysisResult {
    /// Interprets a parsed JSON body as the result shape for `mode`.
    ///
    /// Returns `None` for a JSON `null` body or when no mode is active.
    /// A non-object body is read as an object with no fields.
    pub fn from_value(mode: Mode, value: Value) -> Option<AnalysisResult> {
        let empty = Map::new();
        let obj = match &value {
            Value::Null => return None,
            Value::String(s) => return Some(AnalysisResult::Text(s.clone())),
            Value::Object(obj) => obj,
            _ => &empty,
        };

        match mode {
            Mode::None => None,
            Mode::Style => Some(AnalysisResult::Style(StyleResult {
                overall: string_field(obj, "overall"),
                readability_level: string_field(obj, "readability_level"),
                high_level_suggestions: string_list(obj, "high_level_suggestions"),
            })),
            Mode::Grammar => Some(AnalysisResult::Grammar(GrammarResult {
                corrected_text: string_field(obj, "corrected_text"),
                score: number_field(obj, "score"),
                issues: issue_list(obj),
            })),
            Mode::Define => Some(AnalysisResult::Definition(DefinitionResult {
                word: string_field(obj, "word"),
                part_of_speech: string_field(obj, "part_of_speech"),
                definition: string_field(obj, "definition"),
                example: string_field(obj, "example"),
                level: string_field(obj, "level"),
                synonyms: string_list(obj, "synonyms"),
            })),
        }
    }

    /// Reads this payload as the shape for `mode`, as if a `mode` request
    /// had returned it. Fields the new shape doesn't have are dropped.
    pub fn reinterpret(self, mode: Mode) -> Option<AnalysisResult> {
        let value = serde_json::to_value(&self).ok()?;
        AnalysisResult::from_value(mode, value)
    }
}

// ============================================================================
// Coercion helpers
// ============================================================================

/// Scalars become strings; objects, arrays and null count as absent.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(scalar_to_string)
}

fn number_field(obj: &Map<String, Value>, key: &str) -> Option<f64> {
    match obj.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn string_list(obj: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
    match obj.get(key)? {
        Value::Array(items) => Some(items.iter().filter_map(scalar_to_string).collect()),
        _ => None,
    }
}

fn issue_list(obj: &Map<String, Value>) -> Vec<GrammarIssue> {
    let Some(Value::Array(items)) = obj.get("issues") else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(Value::as_object)
        .map(|issue| GrammarIssue {
            message: string_field(issue, "message").unwrap_or_default(),
            before: string_field(issue, "before").unwrap_or_default(),
            after: string_field(issue, "after").unwrap_or_default(),
        })
        .collect()
}
