use serde::{Deserialize, Serialize};
use std::fmt;

use crate::assistant::responses;
use crate::model::Status;
use crate::reference::store::{normalize_key, ReferenceStore};
use crate::resolver::resolve;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    AppGuidance,
    BarcodeGuidance,
    LogoGuidance,
    IngredientGuidance,
    DirectLookup,
    HaramGuidance,
    HalalGuidance,
    MusboohDefinition,
    Greeting,
    Thanks,
    NoMatch,
}

/// Status tag attached to an assistant reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseTag {
    Info,
    Halal,
    Haram,
    Musbooh,
    Unknown,
}

impl From<Status> for ResponseTag {
    fn from(s: Status) -> Self {
        match s {
            Status::Halal => ResponseTag::Halal,
            Status::Haram => ResponseTag::Haram,
            Status::Musbooh => ResponseTag::Musbooh,
            Status::Unknown => ResponseTag::Unknown,
        }
    }
}

impl fmt::Display for ResponseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseTag::Info => write!(f, "INFO"),
            ResponseTag::Halal => write!(f, "HALAL"),
            ResponseTag::Haram => write!(f, "HARAM"),
            ResponseTag::Musbooh => write!(f, "MUSBOOH"),
            ResponseTag::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteResponse {
    pub intent: Intent,
    pub text: String,
    pub tag: ResponseTag,
}

/// When a rule fires.
enum Predicate {
    /// Fires when every keyword of at least one group occurs in the query.
    Keywords(&'static [&'static [&'static str]]),
    /// Fires when the whole query resolves in the reference store.
    Resolves,
}

/// What a rule answers with.
enum Reply {
    Fixed(&'static str, ResponseTag),
    Lookup,
}

struct IntentRule {
    intent: Intent,
    predicate: Predicate,
    reply: Reply,
}

/// Rules in precedence order; the first rule that fires answers.
///
/// Guidance intents come before the direct lookup so navigational questions
/// are never treated as ingredient lookups.
const RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::AppGuidance,
        predicate: Predicate::Keywords(&[&["HOW", "WORK"], &["APP", "FUNCTION"]]),
        reply: Reply::Fixed(responses::APP_OVERVIEW, ResponseTag::Info),
    },
    IntentRule {
        intent: Intent::BarcodeGuidance,
        predicate: Predicate::Keywords(&[&["BARCODE"], &["SCAN"], &["PRODUCT"]]),
        reply: Reply::Fixed(responses::BARCODE_GUIDANCE, ResponseTag::Info),
    },
    IntentRule {
        intent: Intent::LogoGuidance,
        predicate: Predicate::Keywords(&[&["LOGO"], &["CERTIFICATION"], &["RECOGNIZE"]]),
        reply: Reply::Fixed(responses::LOGO_GUIDANCE, ResponseTag::Info),
    },
    IntentRule {
        intent: Intent::IngredientGuidance,
        predicate: Predicate::Keywords(&[&["E-CODE"], &["INGREDIENT"], &["E CODE"]]),
        reply: Reply::Fixed(responses::INGREDIENT_GUIDANCE, ResponseTag::Info),
    },
    IntentRule {
        intent: Intent::DirectLookup,
        predicate: Predicate::Resolves,
        reply: Reply::Lookup,
    },
    IntentRule {
        intent: Intent::HaramGuidance,
        predicate: Predicate::Keywords(&[&["HARAM"], &["FORBIDDEN"]]),
        reply: Reply::Fixed(responses::HARAM_GUIDANCE, ResponseTag::Info),
    },
    IntentRule {
        intent: Intent::HalalGuidance,
        predicate: Predicate::Keywords(&[&["HALAL"], &["PERMISSIBLE"]]),
        reply: Reply::Fixed(responses::HALAL_GUIDANCE, ResponseTag::Info),
    },
    IntentRule {
        intent: Intent::MusboohDefinition,
        predicate: Predicate::Keywords(&[&["MUSBOOH"], &["DOUBTFUL"]]),
        reply: Reply::Fixed(responses::MUSBOOH_DEFINITION, ResponseTag::Musbooh),
    },
    IntentRule {
        intent: Intent::Greeting,
        predicate: Predicate::Keywords(&[&["HI"], &["HELLO"]]),
        reply: Reply::Fixed(responses::GREETING, ResponseTag::Info),
    },
    IntentRule {
        intent: Intent::Thanks,
        predicate: Predicate::Keywords(&[&["THANK"]]),
        reply: Reply::Fixed(responses::THANKS, ResponseTag::Info),
    },
];

impl IntentRule {
    fn apply(&self, query: &str, store: &ReferenceStore) -> Option<RouteResponse> {
        match (&self.predicate, &self.reply) {
            (Predicate::Keywords(groups), Reply::Fixed(text, tag)) => {
                let fires = groups
                    .iter()
                    .any(|group| group.iter().all(|kw| query.contains(kw)));
                fires.then(|| RouteResponse {
                    intent: self.intent,
                    text: (*text).to_string(),
                    tag: *tag,
                })
            }
            (Predicate::Resolves, Reply::Lookup) => {
                let result = resolve(query, store);
                if result.status == Status::Unknown {
                    return None;
                }
                Some(RouteResponse {
                    intent: self.intent,
                    text: format!(
                        "Status: {}\n\nDetails: {}",
                        result.status, result.detail
                    ),
                    tag: result.status.into(),
                })
            }
            _ => None,
        }
    }
}

/// Answer a free-text question. Each query is handled independently.
pub fn route(query: &str, store: &ReferenceStore) -> RouteResponse {
    let normalized = normalize_key(query);

    for rule in RULES {
        if let Some(response) = rule.apply(&normalized, store) {
            tracing::debug!(intent = ?response.intent, "query routed");
            return response;
        }
    }

    RouteResponse {
        intent: Intent::NoMatch,
        text: responses::NO_MATCH.to_string(),
        tag: ResponseTag::Unknown,
    }
}
