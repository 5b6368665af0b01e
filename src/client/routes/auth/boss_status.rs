use std::collections::HashSet;

use dioxus::document::Title;
use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{
            boss_status::{
                AddCharacterModal, BossCard, BossSelectionModal, CharacterList, TotalsPanel,
            },
            ErrorAlert, Page,
        },
        util::KeyedGeneration,
    },
    model::{boss::BossCatalog, character::CharacterDto, selection::SelectionSet},
};

/// Weekly boss dashboard.
///
/// Owned characters are loaded once; every owned character starts on the roster. All edits go
/// through [`SelectionSet`] and totals are derived from it on each render.
#[component]
pub fn BossStatus() -> Element {
    #[allow(unused_mut)]
    let mut characters = use_signal(Vec::<CharacterDto>::new);
    #[allow(unused_mut)]
    let mut catalog = use_signal(|| BossCatalog::builtin().clone());
    let mut selections = use_signal(SelectionSet::new);
    let mut selected = use_signal(|| None::<String>);
    let mut show_add_modal = use_signal(|| false);
    let mut show_boss_modal = use_signal(|| false);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut loading = use_signal(|| true);
    #[allow(unused_mut)]
    let mut refreshing = use_signal(HashSet::<String>::new);
    #[allow(unused_mut)]
    let mut refreshes = use_signal(KeyedGeneration::default);

    #[cfg(feature = "web")]
    use_future(move || async move {
        use crate::client::util::api::{boss::list_bosses, user::get_user_characters};

        match get_user_characters().await {
            Ok(list) => {
                let main = list
                    .iter()
                    .find(|c| c.is_main)
                    .or(list.first())
                    .map(|c| c.ocid.clone());

                selections
                    .write()
                    .add_characters(list.iter().map(|c| c.ocid.clone()));
                if selected.read().is_none() {
                    selected.set(main);
                }
                characters.set(list);
            }
            Err(err) => {
                tracing::error!("Failed to load characters: {}", err);
                error.set(Some(err));
            }
        }
        loading.set(false);

        // The built in catalog stays in place if the server copy is unavailable
        match list_bosses().await {
            Ok(bosses) => catalog.set(BossCatalog::new(bosses)),
            Err(err) => tracing::warn!("Falling back to the built in boss catalog: {}", err),
        }
    });

    let roster: Vec<CharacterDto> = {
        let selections = selections.read();
        let characters = characters.read();
        selections
            .roster()
            .iter()
            .filter_map(|ocid| characters.iter().find(|c| &c.ocid == ocid).cloned())
            .collect()
    };
    let available: Vec<CharacterDto> = characters
        .read()
        .iter()
        .filter(|c| !selections.read().contains_character(&c.ocid))
        .cloned()
        .collect();
    let current: Option<CharacterDto> = selected
        .read()
        .as_ref()
        .and_then(|ocid| roster.iter().find(|c| &c.ocid == ocid).cloned());

    let on_remove = move |ocid: String| {
        selections.write().remove_character(&ocid);
        if selected.read().as_deref() == Some(ocid.as_str()) {
            let next = selections.read().roster().first().cloned();
            selected.set(next);
        }
    };

    let on_refresh = move |ocid: String| {
        #[cfg(feature = "web")]
        spawn(async move {
            use crate::client::util::api::user::refresh_character;

            let ticket = refreshes.write().issue(&ocid);
            refreshing.write().insert(ocid.clone());

            let result = refresh_character(&ocid).await;
            // A newer refresh of the same character owns the slot and the spinner
            if !refreshes.read().is_latest(&ocid, ticket) {
                return;
            }

            match result {
                Ok(updated) => {
                    error.set(None);
                    if let Some(slot) = characters.write().iter_mut().find(|c| c.ocid == updated.ocid) {
                        *slot = updated;
                    }
                }
                Err(err) => {
                    tracing::error!(ocid = %ocid, "Failed to refresh character: {}", err);
                    error.set(Some(err));
                }
            }
            refreshing.write().remove(&ocid);
        });

        #[cfg(not(feature = "web"))]
        let _ = ocid;
    };

    let on_add = move |ocids: Vec<String>| {
        if selected.read().is_none() {
            selected.set(ocids.first().cloned());
        }
        selections.write().add_characters(ocids);
    };

    rsx!(
        Title { "보돌 현황 | 메요일" }
        Page { class: "flex flex-col gap-4",
            ErrorAlert { message: error() }
            if loading() {
                div { class: "flex justify-center p-8",
                    span { class: "loading loading-spinner loading-lg" }
                }
            } else {
                div { class: "grid grid-cols-1 lg:grid-cols-[280px_1fr_300px] gap-4",
                    CharacterList {
                        characters: roster.clone(),
                        selected,
                        refreshing: refreshing(),
                        on_add: move |_| show_add_modal.set(true),
                        on_remove,
                        on_refresh,
                    }
                    div { class: "card bg-base-100 border border-base-300",
                        div { class: "card-body p-4 gap-4",
                            if let Some(character) = current.clone() {
                                div { class: "flex items-center justify-between",
                                    h3 { class: "card-title text-lg", "{character.name}의 보스" }
                                    button {
                                        class: "btn btn-sm bg-orange-500 text-white",
                                        onclick: move |_| show_boss_modal.set(true),
                                        "보스 추가/수정"
                                    }
                                }
                                if selections.read().selections(&character.ocid).is_empty() {
                                    p { class: "text-center opacity-60 p-8",
                                        "선택한 보스가 없습니다. 보스를 추가해 보세요."
                                    }
                                } else {
                                    div { class: "grid grid-cols-1 xl:grid-cols-2 gap-3",
                                        for selection in selections.read().selections(&character.ocid).to_vec() {
                                            BossCard {
                                                key: "{selection.boss_id}",
                                                character_id: character.ocid.clone(),
                                                selection,
                                                catalog,
                                                selections,
                                            }
                                        }
                                    }
                                }
                            } else {
                                p { class: "text-center opacity-60 p-8",
                                    "캐릭터를 추가하고 선택하면 보스를 고를 수 있습니다."
                                }
                            }
                        }
                    }
                    TotalsPanel { characters: roster.clone(), selections, catalog }
                }
            }
            if show_add_modal() {
                AddCharacterModal {
                    available,
                    on_close: move |_| show_add_modal.set(false),
                    on_add,
                }
            }
            if show_boss_modal() {
                if let Some(character) = current {
                    BossSelectionModal {
                        selected_boss_ids: selections
                            .read()
                            .selections(&character.ocid)
                            .iter()
                            .map(|s| s.boss_id.clone())
                            .collect::<Vec<_>>(),
                        on_close: move |_| show_boss_modal.set(false),
                        on_save: move |boss_ids: Vec<String>| {
                            if let Some(ocid) = selected() {
                                selections.write().replace_boss_set(&catalog.read(), &ocid, &boss_ids);
                            }
                        },
                        character,
                    }
                }
            }
        }
    )
}
