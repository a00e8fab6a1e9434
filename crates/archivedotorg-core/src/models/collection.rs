use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// archive.org collection an item is filed under.
///
/// Open-ended: the well-known collections are provided as constants, any other
/// name is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection(Cow<'static, str>);

impl Collection {
    pub const DATA: Collection = Collection(Cow::Borrowed("opensource_media"));
    pub const MOVIES: Collection = Collection(Cow::Borrowed("opensource_movies"));
    pub const TEST: Collection = Collection(Cow::Borrowed("test_collection"));

    pub fn new(name: impl Into<String>) -> Self {
        Collection(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Collection {
    fn default() -> Self {
        Collection::DATA
    }
}

impl FromStr for Collection {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Collection::new(s))
    }
}

impl From<&str> for Collection {
    fn from(s: &str) -> Self {
        Collection::new(s)
    }
}

impl From<String> for Collection {
    fn from(s: String) -> Self {
        Collection::new(s)
    }
}

impl Display for Collection {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_opensource_media() {
        assert_eq!(Collection::default().as_str(), "opensource_media");
    }

    #[test]
    fn unknown_collections_are_kept_verbatim() {
        let collection: Collection = "my_special_collection".parse().unwrap();
        assert_eq!(collection.to_string(), "my_special_collection");
        assert_ne!(collection, Collection::DATA);
    }

    #[test]
    fn known_constants() {
        assert_eq!(Collection::MOVIES.as_str(), "opensource_movies");
        assert_eq!(Collection::TEST.as_str(), "test_collection");
        assert_eq!(Collection::from("test_collection"), Collection::TEST);
    }
}
