use dioxus::prelude::*;

use crate::{
    client::components::boss_status::class_and_level,
    model::{
        boss::BossCatalog, character::CharacterDto, meso::format_meso, selection::SelectionSet,
    },
};

/// Grand total plus one summary box per roster character.
///
/// Bonus item estimates are shown per boss only; the totals here leave them out.
#[component]
pub fn TotalsPanel(
    characters: Vec<CharacterDto>,
    selections: Signal<SelectionSet>,
    catalog: Signal<BossCatalog>,
) -> Element {
    let selections = selections.read();
    let catalog = catalog.read();
    let total = selections.grand_total(&catalog);

    rsx!(
        div { class: "card bg-base-100 border border-base-300",
            div { class: "card-body p-4 gap-4",
                h3 { class: "card-title text-lg text-orange-500", "총계" }
                div { class: "btn btn-outline border-orange-500 text-orange-500 no-animation",
                    "총 {total.boss_count}마리 {format_meso(total.meso)}"
                }
                div { class: "flex flex-col gap-4 overflow-y-auto",
                    for character in characters {
                        {
                            let payout = selections.character_payout(&catalog, &character.ocid);
                            rsx!(
                                div { key: "{character.ocid}", class: "p-3 bg-base-200 rounded-lg flex flex-col gap-3",
                                    div { class: "flex items-center gap-3",
                                        if let Some(image) = &character.image {
                                            img { class: "w-8 h-8 rounded-lg", src: "{image}", alt: "{character.name}" }
                                        }
                                        div {
                                            div { class: "font-medium", "{character.name}" }
                                            div { class: "text-sm opacity-70", {class_and_level(&character)} }
                                        }
                                    }
                                    div { class: "text-sm flex flex-col gap-1",
                                        div { class: "flex justify-between",
                                            span { class: "opacity-70", "결정석" }
                                            span { class: "font-medium", {format_meso(payout.meso)} }
                                        }
                                        div { class: "flex justify-between",
                                            span { class: "opacity-70", "물욕템" }
                                            span { class: "font-medium", "-" }
                                        }
                                    }
                                    div { class: "flex items-center justify-center gap-1 font-bold text-orange-500",
                                        span { "{payout.boss_count}마리" }
                                        span { class: "opacity-30", "|" }
                                        span { {format_meso(payout.meso)} }
                                    }
                                }
                            )
                        }
                    }
                }
            }
        }
    )
}
