use serde::{Deserialize, Serialize};

/// Parts-of-speech tags the API attaches when `md` contains `p`
pub const PART_OF_SPEECH_TAGS: [&str; 6] = ["n", "v", "adj", "adv", "u", "prop"];

/// One entry of a `words` or `sug` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordResult {
    pub word: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u64>,

    #[serde(
        rename = "numSyllables",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub num_syllables: Option<u32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub defs: Vec<String>,

    /// Set when the definitions belong to a different form of the word
    #[serde(
        rename = "defHeadword",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub def_headword: Option<String>,
}

impl WordResult {
    pub fn parts_of_speech(&self) -> Vec<&str> {
        self.tags
            .iter()
            .map(String::as_str)
            .filter(|tag| PART_OF_SPEECH_TAGS.contains(tag))
            .collect()
    }

    /// Occurrences per million words, from the `f:` tag
    pub fn frequency(&self) -> Option<f64> {
        self.tag_value("f:").and_then(|value| value.parse().ok())
    }

    /// ARPABET pronunciation, from the `pron:` tag
    pub fn pronunciation(&self) -> Option<&str> {
        self.tag_value("pron:")
    }

    /// IPA pronunciation, present when the query set `ipa=1`
    pub fn ipa_pronunciation(&self) -> Option<&str> {
        self.tag_value("ipa_pron:")
    }

    /// Definitions split into (part of speech, text).
    /// The API separates the two with a tab.
    pub fn definitions(&self) -> Vec<(&str, &str)> {
        self.defs
            .iter()
            .map(|def| match def.split_once('\t') {
                Some((pos, text)) => (pos, text),
                None => ("", def.as_str()),
            })
            .collect()
    }

    fn tag_value(&self, prefix: &str) -> Option<&str> {
        self.tags
            .iter()
            .find_map(|tag| tag.strip_prefix(prefix))
            .map(str::trim)
    }
}
