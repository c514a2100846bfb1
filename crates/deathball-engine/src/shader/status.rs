use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

/// Opaque handle of a linked program.
///
/// `UNSET` until `ShaderProgram::link` has run; every link allocates a new id.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ProgramId(u32);

static NEXT_PROGRAM_ID: AtomicU32 = AtomicU32::new(1);

impl ProgramId {
    pub const UNSET: Self = Self(0);

    pub(crate) fn next() -> Self {
        Self(NEXT_PROGRAM_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    pub fn is_set(self) -> bool {
        self != Self::UNSET
    }
}

impl Default for ProgramId {
    fn default() -> Self {
        Self::UNSET
    }
}

impl fmt::Display for ProgramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Diagnostic text with a fixed byte capacity.
///
/// Longer text is cut at the last UTF-8 boundary that fits.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct InfoLog {
    text: String,
    truncated: bool,
}

impl InfoLog {
    pub const CAPACITY: usize = 512;

    pub fn new(text: impl Into<String>) -> Self {
        let mut text = text.into();
        let truncated = text.len() > Self::CAPACITY;
        if truncated {
            let mut end = Self::CAPACITY;
            while !text.is_char_boundary(end) {
                end -= 1;
            }
            text.truncate(end);
        }
        Self { text, truncated }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

impl fmt::Display for InfoLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)?;
        if self.truncated {
            f.write_str(" [truncated]")?;
        }
        Ok(())
    }
}

/// Outcome of compiling one stage.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum CompileStatus {
    Compiled,
    Failed(InfoLog),
}

impl CompileStatus {
    pub fn is_compiled(&self) -> bool {
        matches!(self, Self::Compiled)
    }

    pub fn info_log(&self) -> Option<&InfoLog> {
        match self {
            Self::Compiled => None,
            Self::Failed(log) => Some(log),
        }
    }
}

/// Outcome of the last `link`.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub enum LinkStatus {
    #[default]
    Unlinked,
    Linked,
    Failed(InfoLog),
}

impl LinkStatus {
    pub fn is_linked(&self) -> bool {
        matches!(self, Self::Linked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── InfoLog ───────────────────────────────────────────────────────────

    #[test]
    fn short_log_is_kept_verbatim() {
        let log = InfoLog::new("expected `;`");
        assert_eq!(log.as_str(), "expected `;`");
        assert!(!log.is_truncated());
    }

    #[test]
    fn long_log_is_cut_to_capacity() {
        let log = InfoLog::new("x".repeat(2_000));
        assert_eq!(log.as_str().len(), InfoLog::CAPACITY);
        assert!(log.is_truncated());
        assert!(log.to_string().ends_with("[truncated]"));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // 511 ASCII bytes then a 3-byte char straddling the limit.
        let text = format!("{}€tail", "a".repeat(InfoLog::CAPACITY - 1));
        let log = InfoLog::new(text);
        assert_eq!(log.as_str().len(), InfoLog::CAPACITY - 1);
        assert!(log.is_truncated());
    }

    #[test]
    fn exact_capacity_is_not_truncated() {
        let log = InfoLog::new("b".repeat(InfoLog::CAPACITY));
        assert!(!log.is_truncated());
    }

    // ── ProgramId ─────────────────────────────────────────────────────────

    #[test]
    fn allocated_ids_are_unique_and_set() {
        let a = ProgramId::next();
        let b = ProgramId::next();
        assert!(a.is_set() && b.is_set());
        assert_ne!(a, b);
        assert_eq!(ProgramId::default(), ProgramId::UNSET);
    }
}
