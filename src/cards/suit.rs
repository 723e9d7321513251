/// One suit as described by the upstream suit table.
///
/// Only the fields the deck builder and parser care about are kept;
/// clue-color metadata in the upstream JSON is ignored on load.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suit {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(default)]
    pub one_of_each: bool,
    #[serde(default)]
    pub reversed: bool,
}

impl Suit {
    pub fn new(name: &str, abbreviation: &str) -> Self {
        Self {
            name: name.to_string(),
            id: None,
            abbreviation: Some(abbreviation.to_string()),
            one_of_each: false,
            reversed: false,
        }
    }

    /// lowercase abbreviation used in the canonical deck string,
    /// falling back to the id, then to the first letter of the name
    pub fn abbr(&self) -> String {
        self.abbreviation
            .as_deref()
            .or(self.id.as_deref())
            .map(|s| s.to_lowercase())
            .unwrap_or_else(|| {
                self.name
                    .chars()
                    .take(1)
                    .collect::<String>()
                    .to_lowercase()
            })
    }

    /// case-insensitive match against abbreviation, id, or full name
    pub fn matches(&self, token: &str) -> bool {
        let token = token.to_lowercase();
        if let Some(abbr) = &self.abbreviation {
            if abbr.to_lowercase() == token {
                return true;
            }
        }
        if let Some(id) = &self.id {
            if id.to_lowercase() == token {
                return true;
            }
        }
        self.name.to_lowercase() == token
    }
}

use serde::Deserialize;
