/// Everything that can go wrong outside of a normal verdict.
///
/// A hard deck is not an error: the solver answers `false` for decks it
/// cannot refute. Errors cover missing catalog data, malformed deck
/// strings, and internal contradictions that indicate a solver bug.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("catalog data missing or unusable: {0}")]
    Catalog(String),
    #[error("unrecognized card token: {0}")]
    Parse(String),
    #[error("solver invariant violated: {0}")]
    Invariant(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}
