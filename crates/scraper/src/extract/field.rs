// ABOUTME: Per-field extraction outcome carrying a value plus an optional diagnostic.
// ABOUTME: Replaces side-channel logging; callers inspect partial failures directly.

/// Outcome of extracting a single field.
///
/// Extraction always yields a usable value. When the source text failed to
/// parse, `value` holds the field's documented sentinel and `diagnostic`
/// says what went wrong, so a record never fails outright over one bad
/// cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field<T> {
    pub value: T,
    pub diagnostic: Option<String>,
}

impl<T> Field<T> {
    /// A cleanly extracted (or cleanly defaulted) value.
    pub fn ok(value: T) -> Self {
        Self {
            value,
            diagnostic: None,
        }
    }

    /// A sentinel standing in for text that did not parse.
    pub fn fallback(value: T, diagnostic: impl Into<String>) -> Self {
        Self {
            value,
            diagnostic: Some(diagnostic.into()),
        }
    }

    /// True when extraction saw nothing suspicious.
    pub fn is_clean(&self) -> bool {
        self.diagnostic.is_none()
    }

    /// Moves the value out, pushing the diagnostic (if any) onto `sink`.
    ///
    /// Record builders call this once per field while assembling a record,
    /// so every complaint lands in one list.
    pub fn collect_into(self, sink: &mut Vec<String>) -> T {
        if let Some(diagnostic) = self.diagnostic {
            sink.push(diagnostic);
        }
        self.value
    }
}
