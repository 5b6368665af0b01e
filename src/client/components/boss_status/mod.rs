//! Pieces of the boss status dashboard.
//!
//! Every component here that changes selections goes through the [`SelectionSet`]
//! operations, so difficulty, party size and bonus item rules hold no matter which
//! control was used.
//!
//! [`SelectionSet`]: crate::model::selection::SelectionSet

pub mod add_character_modal;
pub mod boss_card;
pub mod boss_selection_modal;
pub mod character_list;
pub mod totals;

pub use add_character_modal::AddCharacterModal;
pub use boss_card::BossCard;
pub use boss_selection_modal::BossSelectionModal;
pub use character_list::CharacterList;
pub use totals::TotalsPanel;

use crate::model::character::CharacterDto;

/// `"Hero Lv.260"`, with gaps for whatever is still unknown.
pub fn class_and_level(character: &CharacterDto) -> String {
    let class = character.class.as_deref().unwrap_or("");
    match character.level {
        Some(level) => format!("{} Lv.{}", class, level).trim().to_string(),
        None => class.to_string(),
    }
}
