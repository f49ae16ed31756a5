//! Aligned-field record builder shared by the renderers.

pub(super) const LF: &str = "\n";

pub(super) fn push_line(buffer: &mut String, line: &str) {
    buffer.push_str(line);
    buffer.push_str(LF);
}

/// One output line assembled from fields, some padded to a fixed width.
///
/// Padding is measured in characters and never truncates: a field already
/// wider than its width is emitted unchanged.
#[derive(Debug, Default)]
pub(super) struct Record {
    line: String,
}

impl Record {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Appends `text` verbatim.
    pub(super) fn field(mut self, text: &str) -> Self {
        self.line.push_str(text);
        self
    }

    /// Appends `text` followed by enough spaces to fill `width` characters.
    pub(super) fn aligned(mut self, text: &str, width: usize) -> Self {
        let used = text.chars().count();
        self.line.push_str(text);
        self.line
            .extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
        self
    }

    pub(super) fn finish(self, buffer: &mut String) {
        push_line(buffer, &self.line);
    }
}
