use dioxus::prelude::*;

use crate::model::{
    boss::BossCatalog,
    meso::format_meso,
    selection::{BossSelection, CycleDirection, SelectionSet, MAX_PARTY_SIZE, MIN_PARTY_SIZE},
};

#[derive(Clone, Copy)]
enum Control {
    Difficulty(CycleDirection),
    PartySize(CycleDirection),
    BonusItem,
}

/// One selected boss with its difficulty, party size and bonus item controls.
#[component]
pub fn BossCard(
    character_id: String,
    selection: BossSelection,
    catalog: Signal<BossCatalog>,
    mut selections: Signal<SelectionSet>,
) -> Element {
    let boss_id = selection.boss_id.clone();
    let apply = use_callback(move |control: Control| match control {
        Control::Difficulty(direction) => selections.write().cycle_difficulty(
            &catalog.read(),
            &character_id,
            &boss_id,
            direction,
        ),
        Control::PartySize(direction) => {
            selections
                .write()
                .cycle_party_size(&character_id, &boss_id, direction)
        }
        Control::BonusItem => selections.write().toggle_bonus_item(&character_id, &boss_id),
    });

    let catalog_guard = catalog.read();
    // The catalog may have been reloaded without this boss
    let Some(boss) = catalog_guard.get(&selection.boss_id) else {
        return rsx!();
    };

    let name = boss.name.clone();
    let image = boss.image.clone();
    let share = selection.share(&catalog_guard);
    let bonus_item_share = selection.bonus_item_share(&catalog_guard);
    drop(catalog_guard);

    let bonus_class = if selection.bonus_item {
        "btn-warning"
    } else {
        "btn-outline btn-warning"
    };

    rsx!(
        div { class: "relative border border-base-300 rounded-2xl p-3",
            div { class: "flex items-center gap-4",
                div { class: "w-16 h-16 rounded-2xl overflow-hidden bg-base-200 shrink-0",
                    if let Some(image) = image {
                        img { class: "w-full h-full object-cover", src: "{image}", alt: "{name}" }
                    }
                }
                div { class: "flex-1 flex flex-col gap-2",
                    h4 { class: "text-xl font-bold", "{name}" }
                    div { class: "flex items-center",
                        span { class: "text-sm font-medium text-orange-500 w-12", "난이도" }
                        button { class: "btn btn-circle btn-xs", onclick: move |_| apply.call(Control::Difficulty(CycleDirection::Prev)), "<" }
                        span { class: "w-20 text-center text-sm font-semibold", {selection.difficulty.label()} }
                        button { class: "btn btn-circle btn-xs", onclick: move |_| apply.call(Control::Difficulty(CycleDirection::Next)), ">" }
                        div { class: "ml-auto flex items-center gap-1",
                            span { class: "text-sm opacity-70", "결정석" }
                            span { class: "text-sm font-bold w-32 text-right", {format_meso(share)} }
                        }
                    }
                    div { class: "flex items-center",
                        span { class: "text-sm font-medium text-orange-500 w-12", "파티원" }
                        button {
                            class: "btn btn-circle btn-xs",
                            disabled: selection.party_size <= MIN_PARTY_SIZE,
                            onclick: move |_| apply.call(Control::PartySize(CycleDirection::Prev)),
                            "<"
                        }
                        span { class: "w-20 text-center text-sm font-semibold", "{selection.party_size}" }
                        button {
                            class: "btn btn-circle btn-xs",
                            disabled: selection.party_size >= MAX_PARTY_SIZE,
                            onclick: move |_| apply.call(Control::PartySize(CycleDirection::Next)),
                            ">"
                        }
                        div { class: "ml-auto flex items-center gap-1",
                            span { class: "text-sm opacity-70", "물욕템" }
                            span { class: "text-sm font-bold w-32 text-right", {format_meso(bonus_item_share)} }
                        }
                    }
                }
            }
            button {
                class: "btn btn-xs absolute top-3 right-3 {bonus_class}",
                onclick: move |_| apply.call(Control::BonusItem),
                "물욕템 체크"
            }
        }
    )
}
