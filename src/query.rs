use crate::params::{MetadataFlag, Param, Relation};
use std::fmt::Display;

/// Ordered mapping of parameter names to their string values
///
/// Values are stringified when they are inserted, so a `Query` can be
/// reused across calls without the caller's own values being touched.
/// Names are not checked here; validation happens when the query is sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    params: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a raw parameter. Re-inserting a name replaces its value in place.
    pub fn param(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Display) {
        let name = name.into();
        let value = value.to_string();
        match self.params.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.params.push((name, value)),
        }
    }

    pub fn with(self, param: Param, value: impl Display) -> Self {
        self.param(param.as_str(), value)
    }

    pub fn means_like(self, value: impl Display) -> Self {
        self.with(Param::MeansLike, value)
    }

    pub fn sounds_like(self, value: impl Display) -> Self {
        self.with(Param::SoundsLike, value)
    }

    /// Spelling pattern, `*` and `?` act as wildcards
    pub fn spelled_like(self, value: impl Display) -> Self {
        self.with(Param::SpelledLike, value)
    }

    pub fn related(self, relation: Relation, value: impl Display) -> Self {
        self.with(Param::Related(relation), value)
    }

    pub fn vocabulary(self, value: impl Display) -> Self {
        self.with(Param::Vocabulary, value)
    }

    pub fn topics(self, value: impl Display) -> Self {
        self.with(Param::Topics, value)
    }

    pub fn left_context(self, value: impl Display) -> Self {
        self.with(Param::LeftContext, value)
    }

    pub fn right_context(self, value: impl Display) -> Self {
        self.with(Param::RightContext, value)
    }

    pub fn max(self, max: u32) -> Self {
        self.with(Param::Max, max)
    }

    pub fn metadata(self, flags: &[MetadataFlag]) -> Self {
        self.with(Param::Metadata, MetadataFlag::encode(flags))
    }

    pub fn query_echo(self, value: impl Display) -> Self {
        self.with(Param::QueryEcho, value)
    }

    pub fn ipa(self, value: impl Display) -> Self {
        self.with(Param::Ipa, value)
    }

    /// Prefix to complete, only meaningful for the `sug` endpoint
    pub fn prefix(self, value: impl Display) -> Self {
        self.param("s", value)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Query
where
    K: Into<String>,
    V: Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Query::new();
        for (name, value) in iter {
            query.insert(name, value);
        }
        query
    }
}
