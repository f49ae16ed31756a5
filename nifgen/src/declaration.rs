//! Declarations extracted from annotated sources.

/// One declaration found by a marker rule.
///
/// `arity` is present only for rules that track call arity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Name captured verbatim from the source line.
    pub name: String,
    /// Number of positional parameters, when the rule records one.
    pub arity: Option<u32>,
}

impl Declaration {
    /// Creates a name-only declaration.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arity: None,
        }
    }

    /// Creates a declaration carrying an arity.
    #[must_use]
    pub fn with_arity(name: impl Into<String>, arity: u32) -> Self {
        Self {
            name: name.into(),
            arity: Some(arity),
        }
    }

    /// Arity used by renderers; declarations without one count as zero.
    #[must_use]
    pub const fn arity_or_zero(&self) -> u32 {
        match self.arity {
            Some(arity) => arity,
            None => 0,
        }
    }
}

/// Ordered accumulator of declarations across every scanned input.
///
/// Entries keep discovery order and are never deduplicated: a name seen
/// twice yields two entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations(Vec<Declaration>);

impl Declarations {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a declaration, returning the grown accumulator.
    #[must_use]
    pub fn push(mut self, declaration: Declaration) -> Self {
        self.0.push(declaration);
        self
    }

    /// Number of declarations collected so far.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when nothing has been collected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates declarations in discovery order.
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, Declaration> {
        self.0.iter()
    }
}

impl From<Vec<Declaration>> for Declarations {
    fn from(entries: Vec<Declaration>) -> Self {
        Self(entries)
    }
}

impl FromIterator<Declaration> for Declarations {
    fn from_iter<I: IntoIterator<Item = Declaration>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Declarations {
    type Item = &'a Declaration;
    type IntoIter = std::slice::Iter<'a, Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
