//! Boss catalog reference data.
//!
//! A [`Boss`] carries an ordered list of difficulty tiers, lowest first. The tier order is
//! what difficulty cycling in [`crate::model::selection`] walks through, so it must stay
//! stable for as long as a selection set built from the catalog is alive.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

static BUILTIN_CATALOG_JSON: &str = include_str!("../../data/bosses.json");

static BUILTIN_CATALOG: LazyLock<BossCatalog> = LazyLock::new(|| {
    BossCatalog::from_json(BUILTIN_CATALOG_JSON).unwrap_or_else(|e| {
        dioxus_logger::tracing::error!("Failed to parse builtin boss catalog: {}", e);
        BossCatalog::default()
    })
});

/// Difficulty label of a boss tier, totally ordered `Normal < Hard < Chaos < Extreme`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum Difficulty {
    Normal,
    Hard,
    Chaos,
    Extreme,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Hard => "hard",
            Self::Chaos => "chaos",
            Self::Extreme => "extreme",
        }
    }

    /// In-game display name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "노멀",
            Self::Hard => "하드",
            Self::Chaos => "카오스",
            Self::Extreme => "익스트림",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum ResetType {
    Daily,
    Weekly,
}

/// One difficulty tier of a boss.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct BossDifficulty {
    pub difficulty: Difficulty,
    /// Minimum character level to enter this tier
    pub required_level: u32,
    /// Expected meso for one full clear, before splitting among the party
    pub expected_meso: u64,
    #[serde(default)]
    pub expected_items: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct Boss {
    pub id: String,
    pub name: String,
    pub reset_type: ResetType,
    pub image: Option<String>,
    pub difficulties: Vec<BossDifficulty>,
}

impl Boss {
    /// First tier in catalog order, the default for new selections.
    pub fn lowest_tier(&self) -> Option<&BossDifficulty> {
        self.difficulties.first()
    }

    pub fn tier(&self, difficulty: Difficulty) -> Option<&BossDifficulty> {
        self.difficulties
            .iter()
            .find(|tier| tier.difficulty == difficulty)
    }

    pub fn tier_index(&self, difficulty: Difficulty) -> Option<usize> {
        self.difficulties
            .iter()
            .position(|tier| tier.difficulty == difficulty)
    }

    pub fn min_required_level(&self) -> Option<u32> {
        self.difficulties.iter().map(|t| t.required_level).min()
    }

    /// Whether a character of `level` can enter at least one tier.
    pub fn is_available_at(&self, level: u32) -> bool {
        self.difficulties.iter().any(|t| t.required_level <= level)
    }
}

/// Ordered collection of bosses.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BossCatalog {
    bosses: Vec<Boss>,
}

impl BossCatalog {
    pub fn new(bosses: Vec<Boss>) -> Self {
        Self { bosses }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Catalog bundled with the application.
    pub fn builtin() -> &'static BossCatalog {
        &BUILTIN_CATALOG
    }

    pub fn all(&self) -> &[Boss] {
        &self.bosses
    }

    pub fn get(&self, boss_id: &str) -> Option<&Boss> {
        self.bosses.iter().find(|boss| boss.id == boss_id)
    }

    pub fn tier(&self, boss_id: &str, difficulty: Difficulty) -> Option<&BossDifficulty> {
        self.get(boss_id).and_then(|boss| boss.tier(difficulty))
    }

    /// Bosses with at least one tier enterable at `level`, in catalog order.
    pub fn recommended(&self, level: u32) -> Vec<&Boss> {
        self.bosses
            .iter()
            .filter(|boss| boss.is_available_at(level))
            .collect()
    }

    pub fn by_reset_type(&self, reset_type: ResetType) -> Vec<&Boss> {
        self.bosses
            .iter()
            .filter(|boss| boss.reset_type == reset_type)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.bosses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bosses.is_empty()
    }
}
