use std::fmt::Display;

use super::AuthorId;

/// A single author's up or down signal on an event.
///
/// `true` means the author is down for it, `false` means they are not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    author_id: AuthorId,
    value: bool,
}
impl Vote {
    pub fn new(author_id: impl Into<AuthorId>, value: bool) -> Self {
        Self {
            author_id: author_id.into(),
            value,
        }
    }
    pub fn up(author_id: impl Into<AuthorId>) -> Self {
        Self::new(author_id, true)
    }
    pub fn down(author_id: impl Into<AuthorId>) -> Self {
        Self::new(author_id, false)
    }
    pub fn author_id(&self) -> &AuthorId {
        &self.author_id
    }
    pub fn value(&self) -> bool {
        self.value
    }
    /// Flips the vote between up and down.
    pub fn switch_value(&mut self) {
        self.value = !self.value;
    }
}

impl Display for Vote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.value { '+' } else { '-' };
        write!(f, "{} ({sign})", self.author_id)
    }
}
