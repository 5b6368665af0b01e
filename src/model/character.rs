//! Character roster DTOs and profile reconciliation.
//!
//! Stored character records may lack world, class or level (for example when only the name
//! and ocid were known at registration). Such records are completed from the Nexon API with
//! [`merge_profile`], a pure merge of two partial [`CharacterProfile`]s.

use serde::{Deserialize, Serialize};

/// Lowest level at which a character is offered for weekly boss tracking.
pub const MIN_BOSS_LEVEL: i32 = 235;

/// Placeholder values some records carry in place of a missing field.
const PLACEHOLDERS: [&str; 3] = ["", "Unknown", "알 수 없음"];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CharacterDto {
    pub id: i32,
    pub ocid: String,
    pub name: String,
    pub world: Option<String>,
    pub class: Option<String>,
    pub level: Option<i32>,
    pub image: Option<String>,
    pub is_main: bool,
}

/// A character offered during registration, straight from the account's character list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CharacterPreviewDto {
    pub ocid: String,
    pub name: String,
    pub world: String,
    pub class: String,
    pub level: i32,
    pub image: Option<String>,
}

/// Partial character record; any field may be missing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterProfile {
    pub name: Option<String>,
    pub world: Option<String>,
    pub class: Option<String>,
    pub level: Option<i32>,
    pub image: Option<String>,
}

impl CharacterProfile {
    /// Whether a field the roster displays is missing and worth fetching.
    pub fn is_incomplete(&self) -> bool {
        !has_text(&self.world) || !has_text(&self.class) || !has_level(self.level)
    }
}

impl From<&CharacterDto> for CharacterProfile {
    fn from(character: &CharacterDto) -> Self {
        Self {
            name: Some(character.name.clone()),
            world: character.world.clone(),
            class: character.class.clone(),
            level: character.level,
            image: character.image.clone(),
        }
    }
}

fn has_text(value: &Option<String>) -> bool {
    value
        .as_deref()
        .is_some_and(|v| !PLACEHOLDERS.contains(&v.trim()))
}

fn has_level(level: Option<i32>) -> bool {
    level.is_some_and(|l| l > 0)
}

/// Merges two partial records field by field.
///
/// A `primary` field wins when it holds a real value, otherwise the `secondary` field is
/// used. Placeholder strings and non-positive levels count as missing.
pub fn merge_profile(primary: CharacterProfile, secondary: CharacterProfile) -> CharacterProfile {
    fn pick(primary: Option<String>, secondary: Option<String>) -> Option<String> {
        if has_text(&primary) {
            primary
        } else if has_text(&secondary) {
            secondary
        } else {
            primary.or(secondary)
        }
    }

    CharacterProfile {
        name: pick(primary.name, secondary.name),
        world: pick(primary.world, secondary.world),
        class: pick(primary.class, secondary.class),
        level: if has_level(primary.level) {
            primary.level
        } else if has_level(secondary.level) {
            secondary.level
        } else {
            primary.level.or(secondary.level)
        },
        image: pick(primary.image, secondary.image),
    }
}

/// Orders characters by level, highest first, with unknown levels last.
pub fn sort_by_level_desc(characters: &mut [CharacterDto]) {
    characters.sort_by(|a, b| b.level.unwrap_or(0).cmp(&a.level.unwrap_or(0)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(world: Option<&str>, class: Option<&str>, level: Option<i32>) -> CharacterProfile {
        CharacterProfile {
            name: Some("Alpha".to_string()),
            world: world.map(str::to_string),
            class: class.map(str::to_string),
            level,
            image: None,
        }
    }

    mod merge_profile {
        use super::*;

        #[test]
        /// Expect secondary values to fill fields missing from primary
        fn fills_missing_fields() {
            let primary = profile(None, None, None);
            let secondary = CharacterProfile {
                image: Some("img".to_string()),
                ..profile(Some("Scania"), Some("Hero"), Some(260))
            };

            let merged = merge_profile(primary, secondary);

            assert_eq!(merged.world.as_deref(), Some("Scania"));
            assert_eq!(merged.class.as_deref(), Some("Hero"));
            assert_eq!(merged.level, Some(260));
            assert_eq!(merged.image.as_deref(), Some("img"));
            assert!(!merged.is_incomplete());
        }

        #[test]
        /// Expect real primary values to win over secondary ones
        fn primary_wins_when_present() {
            let primary = profile(Some("Luna"), Some("Bishop"), Some(270));
            let secondary = profile(Some("Scania"), Some("Hero"), Some(260));

            let merged = merge_profile(primary.clone(), secondary);

            assert_eq!(merged, primary);
        }

        #[test]
        /// Expect placeholder strings and zero levels to be treated as missing
        fn placeholders_count_as_missing() {
            let primary = profile(Some("Unknown"), Some(""), Some(0));
            let secondary = profile(Some("Scania"), Some("Hero"), Some(260));

            let merged = merge_profile(primary, secondary);

            assert_eq!(merged.world.as_deref(), Some("Scania"));
            assert_eq!(merged.class.as_deref(), Some("Hero"));
            assert_eq!(merged.level, Some(260));
        }

        #[test]
        /// Expect merging with an empty secondary to keep the primary record
        fn empty_secondary_keeps_primary() {
            let primary = profile(Some("Unknown"), None, Some(0));

            let merged = merge_profile(primary.clone(), CharacterProfile::default());

            assert_eq!(merged, primary);
            assert!(merged.is_incomplete());
        }
    }

    #[test]
    /// Expect characters without a level to sort after leveled ones
    fn sorts_by_level_descending() {
        let character = |id, level| CharacterDto {
            id,
            ocid: format!("ocid-{}", id),
            name: format!("c{}", id),
            world: None,
            class: None,
            level,
            image: None,
            is_main: false,
        };
        let mut characters = vec![character(1, Some(240)), character(2, None), character(3, Some(280))];

        sort_by_level_desc(&mut characters);

        let ids: Vec<i32> = characters.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
