use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{ErrorAlert, Page},
        router::Route,
        store::session::SessionState,
        util::RequestGeneration,
    },
    model::{character::CharacterPreviewDto, user::RegisterDto},
};

#[derive(Clone, Copy, PartialEq)]
enum Step {
    ApiKey,
    Characters,
    Password,
}

/// Three step sign up: look up the account's characters by API key, pick the main and
/// sub characters, then set a password and accept the terms.
#[component]
pub fn Register() -> Element {
    #[allow(unused_mut)]
    let mut session = use_context::<Signal<SessionState>>();
    let navigator = use_navigator();

    let mut step = use_signal(|| Step::ApiKey);
    let mut nexon_api_key = use_signal(String::new);
    #[allow(unused_mut)]
    let mut characters = use_signal(Vec::<CharacterPreviewDto>::new);
    let mut main_character = use_signal(|| None::<String>);
    let mut sub_characters = use_signal(Vec::<String>::new);
    let mut password = use_signal(String::new);
    let mut password_confirm = use_signal(String::new);
    let mut agreed = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut loading = use_signal(|| false);
    #[allow(unused_mut)]
    let mut lookups = use_signal(RequestGeneration::default);

    use_effect(move || {
        if session.read().is_logged_in() {
            navigator.replace(Route::BossStatus {});
        }
    });

    let on_lookup = move |e: FormEvent| {
        e.prevent_default();

        let key = nexon_api_key().trim().to_string();
        if key.is_empty() {
            error.set(Some("Nexon API key is required".to_string()));
            return;
        }

        #[cfg(feature = "web")]
        {
            let ticket = lookups.write().issue();

            spawn(async move {
                use crate::client::util::api::auth::list_characters;

                loading.set(true);
                let result = list_characters(&key).await;

                // A newer lookup owns the form now
                if !lookups.read().is_latest(ticket) {
                    return;
                }

                match result {
                    Ok(list) if list.is_empty() => {
                        error.set(Some("보스에 도전할 수 있는 캐릭터가 없습니다.".to_string()));
                    }
                    Ok(list) => {
                        error.set(None);
                        main_character.set(None);
                        sub_characters.set(Vec::new());
                        characters.set(list);
                        step.set(Step::Characters);
                    }
                    Err(err) => error.set(Some(err)),
                }
                loading.set(false);
            });
        }
    };

    let on_pick_main = move |name: String| {
        sub_characters.write().retain(|sub| sub != &name);
        main_character.set(Some(name));
    };

    let on_toggle_sub = move |name: String| {
        let mut subs = sub_characters.write();
        if let Some(index) = subs.iter().position(|sub| sub == &name) {
            subs.remove(index);
        } else {
            subs.push(name);
        }
    };

    let on_characters_next = move |_| {
        if main_character.read().is_none() {
            error.set(Some("본캐를 선택해 주세요.".to_string()));
            return;
        }
        error.set(None);
        step.set(Step::Password);
    };

    let on_submit = move |e: FormEvent| {
        e.prevent_default();

        let dto = RegisterDto {
            nexon_api_key: nexon_api_key().trim().to_string(),
            main_character_name: main_character().unwrap_or_default(),
            sub_character_names: sub_characters(),
            password: password(),
            password_confirm: password_confirm(),
            data_collection_agreed: agreed(),
        };
        if let Err(err) = dto.validate() {
            error.set(Some(err.to_string()));
            return;
        }

        #[cfg(feature = "web")]
        spawn(async move {
            use crate::client::util::api::auth::register;

            loading.set(true);
            match register(&dto).await {
                Ok(user) => {
                    error.set(None);
                    session.set(SessionState::fetched(Some(user)));
                    navigator.push(Route::BossStatus {});
                }
                Err(err) => error.set(Some(err)),
            }
            loading.set(false);
        });
    };

    let characters_step_class = if step() != Step::ApiKey { "step step-warning" } else { "step" };
    let password_step_class = if step() == Step::Password { "step step-warning" } else { "step" };

    rsx!(
        Title { "회원가입 | 메요일" }
        Page { class: "flex items-center justify-center",
            div { class: "card bg-base-100 border border-base-300 w-full max-w-lg",
                div { class: "card-body gap-4",
                    h1 { class: "card-title text-xl", "회원가입" }
                    ul { class: "steps w-full",
                        li { class: "step step-warning", "API 키" }
                        li { class: "{characters_step_class}", "캐릭터 선택" }
                        li { class: "{password_step_class}", "비밀번호" }
                    }
                    {match step() {
                        Step::ApiKey => rsx!(
                            form { class: "flex flex-col gap-4", onsubmit: on_lookup,
                                p { class: "text-sm opacity-70",
                                    "Nexon Open API에서 발급받은 키를 입력하면 계정의 캐릭터를 불러옵니다."
                                }
                                input {
                                    class: "input input-bordered w-full",
                                    placeholder: "Nexon Open API 키",
                                    value: "{nexon_api_key}",
                                    oninput: move |e| nexon_api_key.set(e.value()),
                                }
                                ErrorAlert { message: error() }
                                button {
                                    class: "btn bg-orange-500 text-white",
                                    r#type: "submit",
                                    disabled: loading(),
                                    if loading() {
                                        span { class: "loading loading-spinner loading-sm" }
                                    }
                                    "캐릭터 불러오기"
                                }
                            }
                        ),
                        Step::Characters => rsx!(
                            div { class: "flex flex-col gap-4",
                                p { class: "text-sm opacity-70", "본캐 하나와 함께 보돌 캐릭터를 선택하세요." }
                                div { class: "flex flex-col gap-2 max-h-96 overflow-y-auto",
                                    for character in characters() {
                                        CharacterChoice {
                                            key: "{character.ocid}",
                                            is_main: main_character.read().as_deref() == Some(character.name.as_str()),
                                            is_sub: sub_characters.read().contains(&character.name),
                                            character: character.clone(),
                                            on_pick_main,
                                            on_toggle_sub,
                                        }
                                    }
                                }
                                ErrorAlert { message: error() }
                                div { class: "flex justify-between",
                                    button {
                                        class: "btn btn-ghost",
                                        onclick: move |_| step.set(Step::ApiKey),
                                        "이전"
                                    }
                                    button {
                                        class: "btn bg-orange-500 text-white",
                                        onclick: on_characters_next,
                                        "다음"
                                    }
                                }
                            }
                        ),
                        Step::Password => rsx!(
                            form { class: "flex flex-col gap-4", onsubmit: on_submit,
                                input {
                                    class: "input input-bordered w-full",
                                    r#type: "password",
                                    placeholder: "비밀번호 (10자 이상)",
                                    value: "{password}",
                                    oninput: move |e| password.set(e.value()),
                                }
                                input {
                                    class: "input input-bordered w-full",
                                    r#type: "password",
                                    placeholder: "비밀번호 확인",
                                    value: "{password_confirm}",
                                    oninput: move |e| password_confirm.set(e.value()),
                                }
                                label { class: "label cursor-pointer justify-start gap-3",
                                    input {
                                        class: "checkbox checkbox-warning",
                                        r#type: "checkbox",
                                        checked: agreed(),
                                        onchange: move |e| agreed.set(e.checked()),
                                    }
                                    span { class: "label-text",
                                        "이용약관 및 캐릭터 정보 수집에 동의합니다."
                                    }
                                }
                                ErrorAlert { message: error() }
                                div { class: "flex justify-between",
                                    button {
                                        class: "btn btn-ghost",
                                        r#type: "button",
                                        onclick: move |_| step.set(Step::Characters),
                                        "이전"
                                    }
                                    button {
                                        class: "btn bg-orange-500 text-white",
                                        r#type: "submit",
                                        disabled: loading(),
                                        "가입하기"
                                    }
                                }
                            }
                        ),
                    }}
                    Link { to: Route::Login {}, class: "link text-sm", "이미 계정이 있으신가요? 로그인" }
                }
            }
        }
    )
}

#[component]
fn CharacterChoice(
    character: CharacterPreviewDto,
    is_main: bool,
    is_sub: bool,
    on_pick_main: EventHandler<String>,
    on_toggle_sub: EventHandler<String>,
) -> Element {
    let name = character.name.clone();
    let sub_name = character.name.clone();

    rsx!(
        div { class: "flex items-center gap-3 p-2 rounded-lg bg-base-200",
            if let Some(image) = &character.image {
                img { class: "w-10 h-10 rounded-lg", src: "{image}", alt: "{character.name}" }
            }
            div { class: "flex-1",
                div { class: "font-medium", "{character.name}" }
                div { class: "text-sm opacity-70",
                    "{character.world} · {character.class} · Lv.{character.level}"
                }
            }
            label { class: "label cursor-pointer gap-2",
                span { class: "label-text text-sm", "본캐" }
                input {
                    class: "radio radio-warning radio-sm",
                    r#type: "radio",
                    name: "main-character",
                    checked: is_main,
                    onchange: move |_| on_pick_main.call(name.clone()),
                }
            }
            label { class: "label cursor-pointer gap-2",
                span { class: "label-text text-sm", "보돌" }
                input {
                    class: "checkbox checkbox-sm",
                    r#type: "checkbox",
                    checked: is_sub,
                    disabled: is_main,
                    onchange: move |_| on_toggle_sub.call(sub_name.clone()),
                }
            }
        }
    )
}
