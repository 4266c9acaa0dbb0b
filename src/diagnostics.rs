use std::fmt;

/// Category of a non-fatal advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A deprecated method was called; it still did its job.
    Deprecated,
    /// A density value was passed alongside `sum` units and dropped.
    IgnoredDensity,
    /// Uranium enrichment above 5 w/o, where the fixed U234/U235 ratio is a poor approximation.
    HighEnrichment,
    /// An S(α,β) table name was rewritten to its canonical form.
    ThermalNameChanged,
    /// A feature the consuming engine does not yet support in a release.
    Experimental,
}

/// A single advisory raised while building a material or collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

/// Append-only sink of advisories. Each push is mirrored to `log::warn!`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let message = message.into();
        log::warn!("{}", message);
        self.entries.push(Diagnostic { kind, message });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    /// True if at least one advisory of `kind` has been recorded.
    pub fn contains(&self, kind: DiagnosticKind) -> bool {
        self.entries.iter().any(|d| d.kind == kind)
    }

    /// Drain every recorded advisory, leaving the sink empty.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.entries)
    }
}
