//! Session state — phase tracking, collected answers, conversation log.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// The phases of one collection session.
///
/// Progresses linearly through each field, then
/// `AwaitingConfirmation` → `Completed` or `Cancelled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Collecting the field at this schema index.
    Prompting(usize),
    /// All fields collected; waiting for the final yes/no.
    AwaitingConfirmation,
    /// Confirmed; the record has been emitted.
    Completed,
    /// User quit or declined; nothing is emitted.
    Cancelled,
}

impl SessionPhase {
    /// Whether the session is over. No input is read past a terminal phase.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

/// Accumulated field answers for one session, in insertion order.
///
/// Insertion follows schema order, so serializing produces a record with
/// stable key ordering. Serialized as a JSON map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerSet {
    entries: Vec<(String, String)>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an accepted value. Each field is visited once per session, so
    /// keys do not repeat.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The final structured record, pretty-printed with keys in schema order.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for AnswerSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// One prompt→answer pair in the conversation log.
#[derive(Debug, Clone, PartialEq)]
pub struct Exchange {
    pub prompt: String,
    pub answer: String,
}

/// Transient state owned by the controller for the session's lifetime.
///
/// Created at session start, discarded at session end; nothing persists
/// across runs.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub phase: SessionPhase,
    pub answers: AnswerSet,
    pub transcript: Vec<Exchange>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::Prompting(0),
            answers: AnswerSet::new(),
            transcript: Vec::new(),
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
