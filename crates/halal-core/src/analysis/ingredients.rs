use crate::analysis::outcome::{IngredientAnalysis, IngredientFinding};
use crate::model::Status;
use crate::reference::store::ReferenceStore;
use crate::resolver::resolve;

/// Substrings that mark an unresolved ingredient as doubtful.
pub const HARAM_KEYWORDS: &[&str] = &[
    "PORK",
    "GELATIN",
    "LARD",
    "ETHANOL",
    "COCHINEAL",
    "CARMINE",
    "ANIMAL FAT",
];

pub const KEYWORD_DETAIL: &str = "Potential haram keyword";

const DELIMITERS: &[char] = &[',', '.', ';', '(', ')', '[', ']'];

/// Tokens of this many characters or fewer are noise.
const MIN_TOKEN_CHARS: usize = 2;

/// Split an ingredient list into candidate terms.
///
/// Tokens are trimmed; empty tokens and tokens of two characters or fewer
/// are dropped.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(DELIMITERS)
        .map(str::trim)
        .filter(|token| token.chars().count() > MIN_TOKEN_CHARS)
        .collect()
}

/// Return the first haram keyword contained in `token`, if any.
pub fn haram_keyword(token: &str) -> Option<&'static str> {
    let upper = token.to_uppercase();
    HARAM_KEYWORDS
        .iter()
        .copied()
        .find(|keyword| upper.contains(keyword))
}

/// Classify every term of an ingredient list.
///
/// Unknown terms containing a haram keyword are reported as doubtful, never
/// as haram. Other unknown terms are dropped.
pub fn analyze(text: &str, store: &ReferenceStore) -> IngredientAnalysis {
    let mut analysis = IngredientAnalysis::default();

    for token in tokenize(text) {
        let result = resolve(token, store);
        tracing::debug!(token, status = %result.status, "resolved ingredient");

        match result.status {
            Status::Haram => analysis.haram.push(IngredientFinding {
                term: token.to_string(),
                detail: result.detail,
            }),
            Status::Musbooh => analysis.musbooh.push(IngredientFinding {
                term: token.to_string(),
                detail: result.detail,
            }),
            Status::Unknown if haram_keyword(token).is_some() => {
                analysis.musbooh.push(IngredientFinding {
                    term: token.to_string(),
                    detail: KEYWORD_DETAIL.to_string(),
                })
            }
            Status::Halal | Status::Unknown => {}
        }
    }

    analysis
}
