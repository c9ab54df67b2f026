//! Structured diagnostics emitted while building a widget tree.
//!
//! Nothing in the build path is fatal. Anomalies are reported to a [`DiagnosticSink`] injected by
//! the caller and the build carries on with whatever could be produced.

use std::fmt;

/// How serious a diagnostic is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Non-fatal anomaly, e.g. a texture that could not be found.
    Debug,
    /// Resource or format failure, e.g. a malformed texture path.
    Error,
}

/// What went wrong.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// No builder is registered for the node's class name.
    UnsupportedWidgetType,
    /// Texture region, bitmap font or vector font not found.
    MissingResource,
    /// Resource reference or numeric field did not follow the expected convention.
    MalformedReference,
    /// Glyph generation for a vector font failed.
    RasterizationFailure,
    /// An animation node refers to a tag no widget carries.
    UnboundAnimationTarget,
    /// Animation frames are not in ascending `frameid` order.
    OutOfOrderFrames,
    /// A non-container widget declared children.
    UnattachedChildren,
    /// The root widget is not a container.
    RootNotContainer,
}

/// A single diagnostic record.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Diagnostic {
    /// Severity.
    pub severity: Severity,
    /// Category.
    pub kind: DiagnosticKind,
    /// Name of the widget being processed, when known.
    pub widget: Option<String>,
    /// Human readable detail.
    pub message: String,
}

impl Diagnostic {
    /// Debug-level diagnostic.
    pub fn debug(kind: DiagnosticKind, widget: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Debug,
            kind,
            widget: widget.map(str::to_owned),
            message: message.into(),
        }
    }

    /// Error-level diagnostic.
    pub fn error(kind: DiagnosticKind, widget: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            kind,
            widget: widget.map(str::to_owned),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Debug => "debug",
            Severity::Error => "error",
        };
        match &self.widget {
            Some(w) => write!(f, "[{level}] {:?} widget '{w}': {}", self.kind, self.message),
            None => write!(f, "[{level}] {:?}: {}", self.kind, self.message),
        }
    }
}

/// Receiver for diagnostics produced during a build.
pub trait DiagnosticSink {
    /// Record one diagnostic.
    fn emit(&mut self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to `tracing` at the matching level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&mut self, d: Diagnostic) {
        let widget = d.widget.as_deref().unwrap_or("");
        match d.severity {
            Severity::Debug => {
                tracing::debug!(widget, kind = ?d.kind, "{}", d.message);
            }
            Severity::Error => {
                tracing::error!(widget, kind = ?d.kind, "{}", d.message);
            }
        }
    }
}

/// Keeps every diagnostic in memory.
#[derive(Clone, Debug, Default)]
pub struct CollectingSink {
    /// Diagnostics in emission order.
    pub diagnostics: Vec<Diagnostic>,
}

impl CollectingSink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagnostics of the given kind.
    pub fn of_kind(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.kind == kind)
    }

    /// `true` when at least one error-level diagnostic was recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }
}

impl DiagnosticSink for CollectingSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/diag.rs"]
mod tests;
