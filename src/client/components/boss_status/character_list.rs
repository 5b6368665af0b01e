use std::collections::HashSet;

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaArrowsRotate, FaPlus, FaXmark};
use dioxus_free_icons::Icon;

use crate::{
    client::components::boss_status::class_and_level, model::character::CharacterDto,
};

/// Roster sidebar; clicking a character selects it for the boss list.
#[component]
pub fn CharacterList(
    characters: Vec<CharacterDto>,
    selected: Signal<Option<String>>,
    refreshing: HashSet<String>,
    on_add: EventHandler<()>,
    on_remove: EventHandler<String>,
    on_refresh: EventHandler<String>,
) -> Element {
    rsx!(
        div { class: "card bg-base-100 border border-base-300",
            div { class: "card-body p-4",
                div { class: "flex items-center justify-between",
                    h3 { class: "card-title text-lg", "캐릭터 목록" }
                    button {
                        class: "btn btn-square btn-sm",
                        title: "보돌 캐릭터 추가",
                        onclick: move |_| on_add.call(()),
                        Icon { width: 16, height: 16, icon: FaPlus }
                    }
                }
                div { class: "flex flex-col gap-3 overflow-y-auto",
                    for character in characters {
                        CharacterRow {
                            key: "{character.ocid}",
                            is_selected: selected.read().as_deref() == Some(character.ocid.as_str()),
                            is_refreshing: refreshing.contains(&character.ocid),
                            character: character.clone(),
                            selected,
                            on_remove,
                            on_refresh,
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn CharacterRow(
    character: CharacterDto,
    is_selected: bool,
    is_refreshing: bool,
    mut selected: Signal<Option<String>>,
    on_remove: EventHandler<String>,
    on_refresh: EventHandler<String>,
) -> Element {
    let border = if is_selected {
        "border-orange-500 bg-orange-50"
    } else {
        "border-base-300"
    };
    let main_marker = if character.is_main {
        "border-l-4 border-l-orange-500"
    } else {
        ""
    };

    let select_ocid = character.ocid.clone();
    let remove_ocid = character.ocid.clone();
    let refresh_ocid = character.ocid.clone();

    rsx!(
        div { class: "relative p-3 rounded-lg border cursor-pointer {border} {main_marker}",
            // The main character can't leave the roster
            if !character.is_main {
                button {
                    class: "btn btn-circle btn-xs absolute top-1 right-1",
                    title: "목록에서 제거",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_remove.call(remove_ocid.clone());
                    },
                    Icon { width: 10, height: 10, icon: FaXmark }
                }
            }
            div {
                class: "flex items-center gap-3",
                onclick: move |_| selected.set(Some(select_ocid.clone())),
                div { class: "avatar",
                    div { class: "w-10 h-10 rounded-lg",
                        if let Some(image) = &character.image {
                            img { src: "{image}", alt: "{character.name}" }
                        }
                    }
                }
                div { class: "flex-1 min-w-0",
                    div { class: "flex items-center gap-2",
                        span { class: "font-medium truncate", "{character.name}" }
                        if let Some(world) = &character.world {
                            span { class: "text-xs opacity-60", "{world}" }
                        }
                        if character.is_main {
                            span { class: "badge badge-sm bg-orange-500 text-white", "본캐" }
                        }
                    }
                    div { class: "text-sm opacity-70 truncate", {class_and_level(&character)} }
                }
                button {
                    class: "btn btn-ghost btn-xs",
                    title: "캐릭터 정보 갱신",
                    disabled: is_refreshing,
                    onclick: move |e| {
                        e.stop_propagation();
                        on_refresh.call(refresh_ocid.clone());
                    },
                    if is_refreshing {
                        span { class: "loading loading-spinner loading-xs" }
                    } else {
                        Icon { width: 12, height: 12, icon: FaArrowsRotate }
                    }
                }
            }
        }
    )
}
