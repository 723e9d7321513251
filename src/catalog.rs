const SUIT_URL: &str =
    "https://raw.githubusercontent.com/Hanabi-Live/hanabi-live/main/packages/game/src/json/suits.json";
const VARIANT_URL: &str =
    "https://raw.githubusercontent.com/Hanabi-Live/hanabi-live/main/packages/data/src/json/variants.json";

/// raw variants.json entry; suits are referenced by name and resolved
/// against the suit table when a variant is requested
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Listing {
    id: u32,
    name: String,
    suits: Vec<String>,
    #[serde(default = "Listing::ranks")]
    clue_ranks: Vec<usize>,
    #[serde(default = "Listing::height")]
    stack_size: usize,
    #[serde(default)]
    sudoku: bool,
    #[serde(default)]
    up_or_down: bool,
    #[serde(default)]
    critical_rank: Option<usize>,
}

impl Listing {
    fn ranks() -> Vec<usize> {
        vec![1, 2, 3, 4, 5]
    }
    fn height() -> usize {
        5
    }
}

/// Suit and variant tables, cached on disk and refreshed from the
/// Hanab Live repository when a cached file is absent.
pub struct Catalog {
    suits: Vec<Suit>,
    listings: Vec<Listing>,
}

impl Catalog {
    pub fn load(assets: impl Into<PathBuf>) -> Result<Self, Error> {
        let assets = assets.into();
        std::fs::create_dir_all(&assets)?;
        let suits = Self::table(&assets.join("suits.json"), SUIT_URL)?;
        let listings = Self::table(&assets.join("variants.json"), VARIANT_URL)?;
        Ok(Self { suits, listings })
    }

    /// resolve a variant by name into a shareable read-only record
    pub fn variant(&self, name: &str) -> Result<Arc<Variant>, Error> {
        let listing = self
            .listings
            .iter()
            .find(|l| l.name == name)
            .ok_or_else(|| Error::Catalog(format!("unknown variant: {}", name)))?;
        let suits = listing
            .suits
            .iter()
            .map(|n| {
                self.suits
                    .iter()
                    .find(|s| &s.name == n)
                    .cloned()
                    .ok_or_else(|| Error::Catalog(format!("unknown suit: {}", n)))
            })
            .collect::<Result<Vec<Suit>, Error>>()?;
        Ok(Arc::new(Variant {
            id: listing.id,
            name: listing.name.clone(),
            suits,
            clue_ranks: listing.clue_ranks.clone(),
            stack_size: listing.stack_size,
            sudoku: listing.sudoku,
            up_or_down: listing.up_or_down,
            critical_rank: listing.critical_rank,
        }))
    }

    pub fn variants(&self) -> impl Iterator<Item = &str> {
        self.listings.iter().map(|l| l.name.as_str())
    }

    fn table<T: DeserializeOwned>(path: &Path, url: &str) -> Result<T, Error> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(_) => {
                log::info!("fetching {}", url);
                let text = reqwest::blocking::get(url)?.error_for_status()?.text()?;
                std::fs::write(path, &text)?;
                text
            }
        };
        serde_json::from_str(&text).map_err(Error::from)
    }
}

use crate::cards::suit::Suit;
use crate::cards::variant::Variant;
use crate::error::Error;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

#[cfg(test)]
mod tests {
    use super::*;

    const SUITS: &str = r#"[
        {"name": "Red", "abbreviation": "R"},
        {"name": "Yellow", "abbreviation": "Y"},
        {"name": "Green", "abbreviation": "G"},
        {"name": "Blue", "abbreviation": "B"},
        {"name": "Purple", "abbreviation": "P"},
        {"name": "Black", "abbreviation": "K", "oneOfEach": true}
    ]"#;
    const VARIANTS: &str = r#"[
        {"id": 0, "name": "No Variant", "suits": ["Red", "Yellow", "Green", "Blue", "Purple"]},
        {"id": 21, "name": "Black (6 Suits)", "suits": ["Red", "Yellow", "Green", "Blue", "Purple", "Black"]},
        {"id": 999, "name": "Broken", "suits": ["Red", "Chartreuse"]}
    ]"#;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(name);
        std::fs::create_dir_all(&dir).expect("scratch dir");
        std::fs::write(dir.join("suits.json"), SUITS).expect("suits");
        std::fs::write(dir.join("variants.json"), VARIANTS).expect("variants");
        dir
    }

    #[test]
    fn cached_tables() {
        let catalog = Catalog::load(scratch("endgames-catalog")).expect("load");
        let variant = catalog.variant("No Variant").expect("resolve");
        assert!(variant.suits.len() == 5);
        assert!(variant.stack_size == 5);
        assert!(!variant.suits[0].one_of_each);
        let black = catalog.variant("Black (6 Suits)").expect("resolve");
        assert!(black.suits[5].one_of_each);
        assert!(catalog.variants().count() == 3);
    }

    #[test]
    fn unresolved_names() {
        let catalog = Catalog::load(scratch("endgames-catalog-bad")).expect("load");
        assert!(catalog.variant("Rainbow").is_err());
        assert!(catalog.variant("Broken").is_err());
    }
}
