//! Parameter vocabulary of the Datamuse API
//!
//! The whitelists below are the single source of truth for validation.
//! The enums give callers typed names for the same strings.

use crate::error::DatamuseError;
use std::fmt;
use std::str::FromStr;

/// Host every request goes to
pub const API_HOST: &str = "api.datamuse.com";

pub const ENDPOINTS: [&str; 2] = ["words", "sug"];

pub const QUERY_PARAMETERS: [&str; 26] = [
    "ml", "sl", "sp", "rel_jja", "rel_jjb", "rel_syn", "rel_trg", "rel_ant", "rel_spc", "rel_gen",
    "rel_com", "rel_par", "rel_bga", "rel_bgb", "rel_rhy", "rel_nry", "rel_hom", "rel_cns", "v",
    "topics", "lc", "rc", "max", "md", "qe", "ipa",
];

/// Extra parameters accepted only by the `sug` endpoint
pub const SUGGEST_PARAMETERS: [&str; 1] = ["s"];

pub const METADATA_FLAGS: [char; 5] = ['d', 'p', 's', 'r', 'f'];

/// Name of the metadata parameter whose value is checked flag by flag
pub const METADATA_PARAM: &str = "md";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Endpoint {
    /// Word-finding query
    #[default]
    Words,
    /// Autocomplete suggestions
    Suggestions,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Words => "words",
            Endpoint::Suggestions => "sug",
        }
    }

    /// Whether `name` is a recognized parameter for this endpoint
    pub fn accepts(&self, name: &str) -> bool {
        QUERY_PARAMETERS.contains(&name)
            || (*self == Endpoint::Suggestions && SUGGEST_PARAMETERS.contains(&name))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Endpoint {
    type Err = DatamuseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "words" => Ok(Endpoint::Words),
            "sug" => Ok(Endpoint::Suggestions),
            other => Err(DatamuseError::InvalidEndpoint(other.to_string())),
        }
    }
}

/// One variant per entry of [`QUERY_PARAMETERS`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    MeansLike,
    SoundsLike,
    SpelledLike,
    Related(Relation),
    Vocabulary,
    Topics,
    LeftContext,
    RightContext,
    Max,
    Metadata,
    QueryEcho,
    Ipa,
}

impl Param {
    pub const ALL: [Param; 26] = [
        Param::MeansLike,
        Param::SoundsLike,
        Param::SpelledLike,
        Param::Related(Relation::PopularNouns),
        Param::Related(Relation::PopularAdjectives),
        Param::Related(Relation::Synonyms),
        Param::Related(Relation::Triggers),
        Param::Related(Relation::Antonyms),
        Param::Related(Relation::KindOf),
        Param::Related(Relation::MoreGeneral),
        Param::Related(Relation::Comprises),
        Param::Related(Relation::PartOf),
        Param::Related(Relation::FrequentFollowers),
        Param::Related(Relation::FrequentPredecessors),
        Param::Related(Relation::Rhymes),
        Param::Related(Relation::ApproximateRhymes),
        Param::Related(Relation::Homophones),
        Param::Related(Relation::ConsonantMatch),
        Param::Vocabulary,
        Param::Topics,
        Param::LeftContext,
        Param::RightContext,
        Param::Max,
        Param::Metadata,
        Param::QueryEcho,
        Param::Ipa,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Param::MeansLike => "ml",
            Param::SoundsLike => "sl",
            Param::SpelledLike => "sp",
            Param::Related(relation) => relation.param_name(),
            Param::Vocabulary => "v",
            Param::Topics => "topics",
            Param::LeftContext => "lc",
            Param::RightContext => "rc",
            Param::Max => "max",
            Param::Metadata => "md",
            Param::QueryEcho => "qe",
            Param::Ipa => "ipa",
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Param {
    type Err = DatamuseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Param::ALL
            .iter()
            .copied()
            .find(|param| param.as_str() == s)
            .ok_or_else(|| DatamuseError::InvalidParameter(s.to_string()))
    }
}

/// The `rel_*` relation codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// `jja`: popular nouns modified by the given adjective
    PopularNouns,
    /// `jjb`: popular adjectives used to modify the given noun
    PopularAdjectives,
    Synonyms,
    /// `trg`: words statistically associated with the query word
    Triggers,
    Antonyms,
    /// `spc`: "kind of" (hypernyms)
    KindOf,
    /// `gen`: "more general than" (hyponyms)
    MoreGeneral,
    /// `com`: "comprises" (holonyms)
    Comprises,
    /// `par`: "part of" (meronyms)
    PartOf,
    /// `bga`: words that frequently follow the given word
    FrequentFollowers,
    /// `bgb`: words that frequently precede the given word
    FrequentPredecessors,
    Rhymes,
    /// `nry`: approximate rhymes
    ApproximateRhymes,
    Homophones,
    /// `cns`: consonant match
    ConsonantMatch,
}

impl Relation {
    pub fn code(&self) -> &'static str {
        &self.param_name()[4..]
    }

    pub fn param_name(&self) -> &'static str {
        match self {
            Relation::PopularNouns => "rel_jja",
            Relation::PopularAdjectives => "rel_jjb",
            Relation::Synonyms => "rel_syn",
            Relation::Triggers => "rel_trg",
            Relation::Antonyms => "rel_ant",
            Relation::KindOf => "rel_spc",
            Relation::MoreGeneral => "rel_gen",
            Relation::Comprises => "rel_com",
            Relation::PartOf => "rel_par",
            Relation::FrequentFollowers => "rel_bga",
            Relation::FrequentPredecessors => "rel_bgb",
            Relation::Rhymes => "rel_rhy",
            Relation::ApproximateRhymes => "rel_nry",
            Relation::Homophones => "rel_hom",
            Relation::ConsonantMatch => "rel_cns",
        }
    }
}

impl From<Relation> for Param {
    fn from(relation: Relation) -> Self {
        Param::Related(relation)
    }
}

/// Extra fields that can be requested per result through `md`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataFlag {
    Definitions,
    PartsOfSpeech,
    SyllableCount,
    Pronunciation,
    WordFrequency,
}

impl MetadataFlag {
    pub const ALL: [MetadataFlag; 5] = [
        MetadataFlag::Definitions,
        MetadataFlag::PartsOfSpeech,
        MetadataFlag::SyllableCount,
        MetadataFlag::Pronunciation,
        MetadataFlag::WordFrequency,
    ];

    pub fn as_char(&self) -> char {
        match self {
            MetadataFlag::Definitions => 'd',
            MetadataFlag::PartsOfSpeech => 'p',
            MetadataFlag::SyllableCount => 's',
            MetadataFlag::Pronunciation => 'r',
            MetadataFlag::WordFrequency => 'f',
        }
    }

    /// Concatenate flags into an `md` value, e.g. `"dp"`
    pub fn encode(flags: &[MetadataFlag]) -> String {
        flags.iter().map(MetadataFlag::as_char).collect()
    }
}

impl TryFrom<char> for MetadataFlag {
    type Error = DatamuseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        MetadataFlag::ALL
            .iter()
            .copied()
            .find(|flag| flag.as_char() == c)
            .ok_or(DatamuseError::InvalidMetadataFlag(c))
    }
}
