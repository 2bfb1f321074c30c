use std::fmt::Display;

/// Identity of whoever logged an event or cast a vote.
///
/// Any string is accepted, including an empty one.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AuthorId(pub String);

impl AuthorId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for AuthorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AuthorId {
    fn from(id: &str) -> Self {
        Self(String::from(id))
    }
}
impl From<String> for AuthorId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for AuthorId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}
impl PartialEq<&str> for AuthorId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
