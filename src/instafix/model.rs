use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque identifier of a fix. Generated ids are UUIDs, but anything read back
/// from storage is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FixId(String);

impl FixId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FixId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FixId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// The structured reply of the model, exactly as declared in the response schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixPayload {
    pub insight: String,
    pub plan: String,
    pub actions: Vec<String>,
}

/// One generated fix: the user's problem plus the three-part guidance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixResult {
    pub id: FixId,
    pub query: String,
    // Stored as epoch milliseconds, so kept at millisecond precision
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    pub insight: String,
    pub plan: String,
    pub actions: Vec<String>,
}

/// A fix the user chose to keep. Same shape as [`FixResult`].
pub type SavedFix = FixResult;

impl FixResult {
    pub fn new(query: impl Into<String>, payload: FixPayload) -> Self {
        Self {
            id: FixId::generate(),
            query: query.into(),
            timestamp: Utc::now().trunc_subsecs(3),
            insight: payload.insight,
            plan: payload.plan,
            actions: payload.actions,
        }
    }

    /// The three cards in display order.
    pub fn cards(&self) -> [Card; 3] {
        [
            Card {
                kind: CardKind::Insight,
                body: CardBody::SingleText(self.insight.clone()),
            },
            Card {
                kind: CardKind::Plan,
                body: CardBody::SingleText(self.plan.clone()),
            },
            Card {
                kind: CardKind::Actions,
                body: CardBody::StepList(self.actions.clone()),
            },
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Insight,
    Plan,
    Actions,
}

impl CardKind {
    pub fn title(&self) -> &'static str {
        match self {
            CardKind::Insight => "3-Line Advice",
            CardKind::Plan => "30-Second Plan",
            CardKind::Actions => "3-Step Action",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardBody {
    SingleText(String),
    StepList(Vec<String>),
}

impl CardBody {
    /// Plain text form. Steps are numbered from 1, one per line.
    pub fn to_plain_text(&self) -> String {
        match self {
            CardBody::SingleText(text) => text.clone(),
            CardBody::StepList(steps) => steps
                .iter()
                .enumerate()
                .map(|(i, step)| format!("{}. {}", i + 1, step))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub kind: CardKind,
    pub body: CardBody,
}

impl Card {
    pub fn title(&self) -> &'static str {
        self.kind.title()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}
