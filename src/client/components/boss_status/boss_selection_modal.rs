use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;
use dioxus_free_icons::icons::fa_solid_icons::FaXmark;
use dioxus_free_icons::Icon;

use crate::{
    client::components::{boss_status::class_and_level, ErrorAlert},
    model::{
        boss::{Boss, Difficulty, ResetType},
        character::CharacterDto,
        meso::format_meso_short,
    },
};

/// Picks the weekly bosses one character will run.
///
/// Changes stay local until saved; `on_save` receives the full list of chosen boss ids.
#[component]
pub fn BossSelectionModal(
    character: CharacterDto,
    selected_boss_ids: Vec<String>,
    on_close: EventHandler<()>,
    on_save: EventHandler<Vec<String>>,
) -> Element {
    let mut chosen = use_signal(|| selected_boss_ids.clone());
    #[allow(unused_mut)]
    let mut bosses = use_signal(Vec::<Boss>::new);
    #[allow(unused_mut)]
    let mut loading = use_signal(|| true);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<String>);

    let level = character.level.unwrap_or(0).max(0) as u32;

    // Fetched once per opening; closing the modal drops the request with it
    #[cfg(feature = "web")]
    use_effect(move || {
        use crate::client::util::api::boss::list_recommended_bosses;

        spawn(async move {
            match list_recommended_bosses(level).await {
                Ok(list) => {
                    bosses.set(list);
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to load recommended bosses: {}", err);
                    error.set(Some(err));
                }
            }
            loading.set(false);
        });
    });

    let weekly: Vec<Boss> = bosses
        .read()
        .iter()
        .filter(|boss| boss.reset_type == ResetType::Weekly)
        .cloned()
        .collect();

    rsx!(
        div { class: "fixed inset-0 modal-backdrop-dim flex items-center justify-center z-50",
            div { class: "bg-base-100 rounded-lg max-w-4xl w-full mx-4 max-h-[90vh] overflow-hidden",
                div { class: "p-6 border-b border-base-300 flex items-center justify-between",
                    div {
                        h2 { class: "text-xl font-bold", "보스 선택" }
                        p { class: "text-sm opacity-70 mt-1",
                            "{character.name} ({class_and_level(&character)})"
                        }
                    }
                    button {
                        class: "btn btn-ghost btn-sm",
                        onclick: move |_| on_close.call(()),
                        Icon { width: 20, height: 20, icon: FaXmark }
                    }
                }
                div { class: "p-6 max-h-[60vh] overflow-y-auto flex flex-col gap-4",
                    ErrorAlert { message: error() }
                    if loading() {
                        div { class: "flex items-center justify-center py-12 gap-3",
                            span { class: "loading loading-spinner" }
                            span { class: "opacity-70", "보스 목록을 불러오는 중..." }
                        }
                    } else if weekly.is_empty() {
                        p { class: "text-center py-12 opacity-70", "입장 가능한 주간 보스가 없습니다." }
                    } else {
                        div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                            for boss in weekly {
                                BossOption {
                                    key: "{boss.id}",
                                    is_chosen: chosen.read().contains(&boss.id),
                                    boss: boss.clone(),
                                    chosen,
                                }
                            }
                        }
                    }
                }
                div { class: "p-6 border-t border-base-300 flex items-center justify-between",
                    span { class: "text-sm opacity-70", "{chosen.read().len()}개 선택됨" }
                    div { class: "flex gap-2",
                        button { class: "btn btn-ghost", onclick: move |_| on_close.call(()), "취소" }
                        button {
                            class: "btn bg-orange-500 text-white",
                            onclick: move |_| {
                                on_save.call(chosen());
                                on_close.call(());
                            },
                            "저장"
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn BossOption(boss: Boss, is_chosen: bool, mut chosen: Signal<Vec<String>>) -> Element {
    let Some(first) = boss.difficulties.first() else {
        return rsx!();
    };

    let border = if is_chosen {
        "border-orange-500 bg-orange-50"
    } else {
        "border-base-300"
    };
    let difficulty_class = difficulty_badge(first.difficulty);
    let extra_tiers = boss.difficulties.len() - 1;
    let min_level = boss.min_required_level().unwrap_or(first.required_level);
    let expected_meso = format_meso_short(first.expected_meso);
    let mut items = first
        .expected_items
        .iter()
        .take(2)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    if first.expected_items.len() > 2 {
        items.push_str(" 외");
    }
    let difficulty_label = first.difficulty.label();

    let boss_id = boss.id.clone();
    let toggle = move |_| {
        let mut ids = chosen.write();
        if let Some(position) = ids.iter().position(|id| *id == boss_id) {
            ids.remove(position);
        } else {
            ids.push(boss_id.clone());
        }
    };

    rsx!(
        div {
            class: "p-4 border rounded-lg cursor-pointer flex items-start justify-between {border}",
            onclick: toggle,
            div { class: "flex-1 flex flex-col gap-1",
                div { class: "flex items-center gap-2",
                    h3 { class: "font-medium", "{boss.name}" }
                    span { class: "badge badge-sm {difficulty_class}", "{difficulty_label}" }
                    if extra_tiers > 0 {
                        span { class: "badge badge-sm badge-ghost", "+{extra_tiers}" }
                    }
                }
                div { class: "text-sm opacity-70", "필요 레벨: {min_level}" }
                div { class: "text-sm font-medium text-orange-600", "예상 메소: {expected_meso}" }
                if !items.is_empty() {
                    div { class: "text-xs opacity-70", "주요 드랍: {items}" }
                }
            }
            input {
                r#type: "checkbox",
                class: "checkbox checkbox-warning checkbox-sm pointer-events-none",
                checked: is_chosen,
                readonly: true,
            }
        }
    )
}

fn difficulty_badge(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Normal => "badge-success",
        Difficulty::Hard => "badge-warning",
        Difficulty::Chaos => "badge-error",
        Difficulty::Extreme => "badge-secondary",
    }
}
