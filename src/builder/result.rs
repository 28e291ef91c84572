use crate::ast::Span;

/// Whether a builder rejected a slice as "not mine" or as "mine, but broken".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The slice is not this builder's construct at all
    Mismatch,
    /// The slice starts like this builder's construct but violates its grammar
    Malformed,
}

/// Expected grammar violation found while building a node.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildFailure {
    pub message: String,
    pub span: Option<Span>,
    pub kind: FailureKind,
}

pub type BuildResult<T> = Result<T, BuildFailure>;

impl BuildFailure {
    pub fn mismatch(message: impl Into<String>, span: Option<Span>) -> Self {
        BuildFailure {
            message: message.into(),
            span,
            kind: FailureKind::Mismatch,
        }
    }

    pub fn malformed(message: impl Into<String>, span: Span) -> Self {
        Self::malformed_at(message, Some(span))
    }

    pub fn malformed_at(message: impl Into<String>, span: Option<Span>) -> Self {
        BuildFailure {
            message: message.into(),
            span,
            kind: FailureKind::Malformed,
        }
    }

    pub fn is_malformed(&self) -> bool {
        self.kind == FailureKind::Malformed
    }

    /// Marks a sub-builder's rejection as final once the caller has
    /// recognised its own construct.
    pub fn committed(mut self) -> Self {
        self.kind = FailureKind::Malformed;
        self
    }

    /// Fills in a position when the sub-builder had none (empty slice).
    pub fn or_at(mut self, span: Option<Span>) -> Self {
        if self.span.is_none() {
            self.span = span;
        }
        self
    }
}

impl std::fmt::Display for BuildFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.span {
            Some(span) => write!(f, "{} at {}", self.message, span),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for BuildFailure {}
