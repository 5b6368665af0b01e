//! Per-character boss selections and their expected meso payout.
//!
//! A [`SelectionSet`] maps each character on the roster to the ordered list of bosses that
//! character will run this reset cycle. Every mutation builds a fresh list for the affected
//! character and swaps it in whole, so readers never observe a half-applied change.
//!
//! Lookups that miss (unknown character, unselected boss, boss or tier no longer in the
//! catalog) are never errors: mutations become no-ops and payouts contribute zero.

use std::collections::HashMap;

use crate::model::boss::{Boss, BossCatalog};

pub use crate::model::boss::Difficulty;

pub const MIN_PARTY_SIZE: u8 = 1;
pub const MAX_PARTY_SIZE: u8 = 6;

/// Multiplier applied to a share to estimate the bonus item reward track.
pub const BONUS_ITEM_MARKUP: f64 = 1.2;

/// Run parameters for one boss on one character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BossSelection {
    pub boss_id: String,
    pub difficulty: Difficulty,
    /// Always within `MIN_PARTY_SIZE..=MAX_PARTY_SIZE`
    pub party_size: u8,
    pub bonus_item: bool,
}

impl BossSelection {
    /// Default selection for `boss`: lowest tier, solo, bonus item off.
    ///
    /// Returns `None` for a boss without tiers since no difficulty could resolve.
    pub fn for_boss(boss: &Boss) -> Option<Self> {
        boss.lowest_tier().map(|tier| Self {
            boss_id: boss.id.clone(),
            difficulty: tier.difficulty,
            party_size: MIN_PARTY_SIZE,
            bonus_item: false,
        })
    }

    /// This character's even share of one clear, or zero when the tier is gone.
    pub fn share(&self, catalog: &BossCatalog) -> f64 {
        match catalog.tier(&self.boss_id, self.difficulty) {
            Some(tier) => tier.expected_meso as f64 / f64::from(self.party_size.max(MIN_PARTY_SIZE)),
            None => 0.0,
        }
    }

    pub fn bonus_item_share(&self, catalog: &BossCatalog) -> f64 {
        self.share(catalog) * BONUS_ITEM_MARKUP
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleDirection {
    Prev,
    Next,
}

/// Expected yield for one character.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CharacterPayout {
    pub meso: f64,
    /// Reported alongside `meso`, never added into any total
    pub bonus_item_meso: f64,
    pub boss_count: usize,
}

/// Expected yield across the roster.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GrandTotal {
    pub meso: f64,
    pub boss_count: usize,
}

/// Roster of characters and the bosses selected for each.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionSet {
    roster: Vec<String>,
    selections: HashMap<String, Vec<BossSelection>>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Character ids in roster order.
    pub fn roster(&self) -> &[String] {
        &self.roster
    }

    pub fn contains_character(&self, character_id: &str) -> bool {
        self.roster.iter().any(|id| id == character_id)
    }

    pub fn selections(&self, character_id: &str) -> &[BossSelection] {
        self.selections
            .get(character_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn selection(&self, character_id: &str, boss_id: &str) -> Option<&BossSelection> {
        self.selections(character_id)
            .iter()
            .find(|s| s.boss_id == boss_id)
    }

    /// Appends characters missing from the roster, keeping existing order.
    pub fn add_characters<I, S>(&mut self, character_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for id in character_ids {
            let id = id.into();
            if !self.contains_character(&id) {
                self.roster.push(id);
            }
        }
    }

    /// Reconciles a character's selections against `boss_ids`.
    ///
    /// Bosses already selected keep their current selection untouched, new bosses get
    /// [`BossSelection::for_boss`] defaults, and bosses absent from `boss_ids` are dropped.
    /// The resulting order follows `boss_ids`. Ids that are repeated or unknown to the
    /// catalog are skipped. A character not yet on the roster is appended to it.
    pub fn replace_boss_set<S: AsRef<str>>(
        &mut self,
        catalog: &BossCatalog,
        character_id: &str,
        boss_ids: &[S],
    ) {
        let current = self.selections(character_id);
        let mut next: Vec<BossSelection> = Vec::with_capacity(boss_ids.len());

        for boss_id in boss_ids.iter().map(AsRef::as_ref) {
            if next.iter().any(|s| s.boss_id == boss_id) {
                continue;
            }

            if let Some(existing) = current.iter().find(|s| s.boss_id == boss_id) {
                next.push(existing.clone());
            } else if let Some(selection) = catalog.get(boss_id).and_then(BossSelection::for_boss)
            {
                next.push(selection);
            }
        }

        self.add_characters([character_id]);
        self.selections.insert(character_id.to_string(), next);
    }

    /// Moves the selection to the adjacent tier, wrapping around at either end.
    pub fn cycle_difficulty(
        &mut self,
        catalog: &BossCatalog,
        character_id: &str,
        boss_id: &str,
        direction: CycleDirection,
    ) {
        let Some(boss) = catalog.get(boss_id) else {
            return;
        };

        self.update_selection(character_id, boss_id, |selection| {
            let tier_count = boss.difficulties.len();
            let current = boss.tier_index(selection.difficulty)?;

            let next = match direction {
                CycleDirection::Next => (current + 1) % tier_count,
                CycleDirection::Prev => (current + tier_count - 1) % tier_count,
            };

            Some(BossSelection {
                difficulty: boss.difficulties[next].difficulty,
                ..selection.clone()
            })
        });
    }

    /// Steps the party size by one, stopping at the bounds instead of wrapping.
    pub fn cycle_party_size(&mut self, character_id: &str, boss_id: &str, direction: CycleDirection) {
        self.update_selection(character_id, boss_id, |selection| {
            let party_size = match direction {
                CycleDirection::Next if selection.party_size < MAX_PARTY_SIZE => {
                    selection.party_size + 1
                }
                CycleDirection::Prev if selection.party_size > MIN_PARTY_SIZE => {
                    selection.party_size - 1
                }
                _ => return None,
            };

            Some(BossSelection {
                party_size,
                ..selection.clone()
            })
        });
    }

    pub fn toggle_bonus_item(&mut self, character_id: &str, boss_id: &str) {
        self.update_selection(character_id, boss_id, |selection| {
            Some(BossSelection {
                bonus_item: !selection.bonus_item,
                ..selection.clone()
            })
        });
    }

    /// Drops a character from the roster together with all of its selections.
    pub fn remove_character(&mut self, character_id: &str) {
        self.roster.retain(|id| id != character_id);
        self.selections.remove(character_id);
    }

    /// Payout of a single selected boss, or `None` when it isn't selected.
    pub fn selection_payout(
        &self,
        catalog: &BossCatalog,
        character_id: &str,
        boss_id: &str,
    ) -> Option<CharacterPayout> {
        self.selection(character_id, boss_id)
            .map(|selection| payout_of(catalog, selection))
    }

    pub fn character_payout(&self, catalog: &BossCatalog, character_id: &str) -> CharacterPayout {
        self.selections(character_id)
            .iter()
            .map(|selection| payout_of(catalog, selection))
            .fold(CharacterPayout::default(), |acc, payout| CharacterPayout {
                meso: acc.meso + payout.meso,
                bonus_item_meso: acc.bonus_item_meso + payout.bonus_item_meso,
                boss_count: acc.boss_count + payout.boss_count,
            })
    }

    /// Sum of character payouts over the roster.
    pub fn grand_total(&self, catalog: &BossCatalog) -> GrandTotal {
        self.roster
            .iter()
            .map(|id| self.character_payout(catalog, id))
            .fold(GrandTotal::default(), |acc, payout| GrandTotal {
                meso: acc.meso + payout.meso,
                boss_count: acc.boss_count + payout.boss_count,
            })
    }

    /// Rebuilds one character's list with the matching selection replaced by `f`'s result.
    ///
    /// `f` returning `None` leaves the set untouched.
    fn update_selection<F>(&mut self, character_id: &str, boss_id: &str, f: F)
    where
        F: FnOnce(&BossSelection) -> Option<BossSelection>,
    {
        let current = self.selections(character_id);
        let Some(position) = current.iter().position(|s| s.boss_id == boss_id) else {
            return;
        };
        let Some(updated) = f(&current[position]) else {
            return;
        };

        let next: Vec<BossSelection> = current
            .iter()
            .enumerate()
            .map(|(i, s)| if i == position { updated.clone() } else { s.clone() })
            .collect();

        self.selections.insert(character_id.to_string(), next);
    }
}

fn payout_of(catalog: &BossCatalog, selection: &BossSelection) -> CharacterPayout {
    CharacterPayout {
        meso: selection.share(catalog),
        bonus_item_meso: selection.bonus_item_share(catalog),
        boss_count: 1,
    }
}
