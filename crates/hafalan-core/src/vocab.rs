use serde::{Deserialize, Serialize};

/// One vocabulary pair as supplied by a repository, tagged with the day
/// grouping it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayEntry {
    pub day_id: u32,
    pub id: u32,
    pub english: String,
    pub indonesian: String,
}

/// A queue element. The sides are already ordered for the session
/// direction, so the session never has to re-derive which text comes first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabItem {
    pub id: u32,
    pub primary: String,
    pub secondary: String,
}

/// Which language is shown and spoken first. Fixed for the lifetime of a
/// queue; changing it rebuilds the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    #[default]
    EnglishFirst,
    IndonesianFirst,
}

impl Direction {
    pub fn primary_language(self) -> Language {
        match self {
            Direction::EnglishFirst => Language::English,
            Direction::IndonesianFirst => Language::Indonesian,
        }
    }

    pub fn secondary_language(self) -> Language {
        match self {
            Direction::EnglishFirst => Language::Indonesian,
            Direction::IndonesianFirst => Language::English,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Direction::EnglishFirst => "English → Indonesian",
            Direction::IndonesianFirst => "Indonesian → English",
        };
        write!(f, "{}", label)
    }
}

/// Narration language tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    English,
    Indonesian,
}

impl Language {
    /// BCP-47 tag understood by speech engines.
    pub fn tag(self) -> &'static str {
        match self {
            Language::English => "en-US",
            Language::Indonesian => "id-ID",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Language::English => "English",
            Language::Indonesian => "Indonesian",
        };
        write!(f, "{}", label)
    }
}

/// Drill mode. Switching resets playback entirely; mode and in-progress
/// position are never combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    #[default]
    Manual,
    Automatic,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Mode::Manual => "Manual (tap)",
            Mode::Automatic => "Automatic",
        };
        write!(f, "{}", label)
    }
}

/// Read-only supplier of vocabulary pairs in repository order. The engine
/// never mutates vocabulary data.
pub trait VocabSource {
    fn entries(&self) -> &[DayEntry];
}
