use dioxus::prelude::*;

use crate::{
    client::components::boss_status::class_and_level, model::character::CharacterDto,
};

/// Adds owned characters that are not on the boss roster yet.
#[component]
pub fn AddCharacterModal(
    available: Vec<CharacterDto>,
    on_close: EventHandler<()>,
    on_add: EventHandler<Vec<String>>,
) -> Element {
    let mut search = use_signal(String::new);
    let mut picked = use_signal(Vec::<String>::new);

    let term = search.read().trim().to_lowercase();
    let filtered: Vec<CharacterDto> = available
        .into_iter()
        .filter(|c| {
            term.is_empty()
                || c.name.to_lowercase().contains(&term)
                || c
                    .class
                    .as_deref()
                    .is_some_and(|class| class.to_lowercase().contains(&term))
        })
        .collect();

    rsx!(
        div { class: "fixed inset-0 modal-backdrop-dim flex items-center justify-center z-50",
            div { class: "bg-base-100 rounded-lg p-6 w-96 max-h-[80vh] flex flex-col gap-4",
                h2 { class: "text-lg font-semibold", "보돌 캐릭터 추가" }
                input {
                    class: "input input-bordered w-full",
                    placeholder: "캐릭터 이름 또는 직업 검색",
                    value: "{search}",
                    oninput: move |e| search.set(e.value()),
                }
                div { class: "flex-1 overflow-y-auto flex flex-col gap-2",
                    if filtered.is_empty() {
                        p { class: "text-center py-8 opacity-70", "추가할 수 있는 캐릭터가 없습니다." }
                    }
                    for character in filtered {
                        label {
                            key: "{character.ocid}",
                            class: "flex items-center gap-3 p-2 rounded-lg border border-base-300 cursor-pointer",
                            input {
                                r#type: "checkbox",
                                class: "checkbox checkbox-sm",
                                checked: picked.read().contains(&character.ocid),
                                onchange: {
                                    let ocid = character.ocid.clone();
                                    move |_| {
                                        let mut ids = picked.write();
                                        if let Some(position) = ids.iter().position(|id| *id == ocid) {
                                            ids.remove(position);
                                        } else {
                                            ids.push(ocid.clone());
                                        }
                                    }
                                },
                            }
                            div {
                                div { class: "font-medium", "{character.name}" }
                                div { class: "text-sm opacity-70", {class_and_level(&character)} }
                            }
                        }
                    }
                }
                div { class: "flex justify-end gap-2",
                    button { class: "btn btn-ghost", onclick: move |_| on_close.call(()), "취소" }
                    button {
                        class: "btn bg-orange-500 text-white",
                        disabled: picked.read().is_empty(),
                        onclick: move |_| {
                            on_add.call(picked());
                            on_close.call(());
                        },
                        "추가"
                    }
                }
            }
        }
    )
}
