use dioxus::document::Title;
use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{ErrorAlert, Page},
        store::session::SessionState,
    },
    model::{
        character::CharacterDto,
        user::{ChangePasswordDto, UserSettingsDto},
    },
};

#[component]
pub fn Settings() -> Element {
    #[allow(unused_mut)]
    let mut settings = use_signal(|| None::<UserSettingsDto>);
    #[allow(unused_mut)]
    let mut characters = use_signal(Vec::<CharacterDto>::new);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    use_future(move || async move {
        use crate::client::util::api::user::{get_settings, get_user_characters};

        match get_settings().await {
            Ok(loaded) => settings.set(Some(loaded)),
            Err(err) => error.set(Some(err)),
        }
        match get_user_characters().await {
            Ok(list) => characters.set(list),
            Err(err) => error.set(Some(err)),
        }
    });

    rsx!(
        Title { "설정 | 메요일" }
        Page { class: "flex flex-col items-center gap-4",
            div { class: "w-full max-w-xl flex flex-col gap-4",
                h1 { class: "text-2xl font-bold", "설정" }
                ErrorAlert { message: error() }
                MainCharacterSection { characters: characters(), settings }
                PasswordSection {}
                PreferencesSection { settings }
            }
        }
    )
}

#[component]
fn MainCharacterSection(
    characters: Vec<CharacterDto>,
    mut settings: Signal<Option<UserSettingsDto>>,
) -> Element {
    #[allow(unused_mut)]
    let mut session = use_context::<Signal<SessionState>>();
    let mut choice = use_signal(String::new);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut notice = use_signal(|| None::<String>);

    let current = settings
        .read()
        .as_ref()
        .map(|s| s.main_character_name.clone())
        .unwrap_or_default();

    let on_submit = move |e: FormEvent| {
        e.prevent_default();

        let name = choice();
        if name.is_empty() {
            error.set(Some("새 본캐를 선택해 주세요.".to_string()));
            return;
        }

        #[cfg(feature = "web")]
        spawn(async move {
            use crate::client::util::api::{auth::get_user, user::change_main_character};

            match change_main_character(&name).await {
                Ok(changed) => {
                    error.set(None);
                    notice.set(Some(format!(
                        "본캐가 {}에서 {}(으)로 변경되었습니다.",
                        changed.previous_main_character_name, changed.new_main_character_name
                    )));
                    if let Some(current) = settings.write().as_mut() {
                        current.main_character_name = changed.new_main_character_name;
                    }
                    // The navbar shows the main character name
                    match get_user().await {
                        Ok(user) => session.set(SessionState::fetched(user)),
                        Err(err) => tracing::warn!("Failed to reload session user: {}", err),
                    }
                }
                Err(err) => error.set(Some(err)),
            }
        });
    };

    rsx!(
        form {
            class: "card bg-base-100 border border-base-300",
            onsubmit: on_submit,
            div { class: "card-body gap-3",
                h2 { class: "card-title text-lg", "본캐 변경" }
                p { class: "text-sm opacity-70", "현재 본캐: {current}" }
                select {
                    class: "select select-bordered w-full",
                    value: "{choice}",
                    onchange: move |e| choice.set(e.value()),
                    option { value: "", disabled: true, selected: choice.read().is_empty(), "새 본캐 선택" }
                    for character in characters.iter().filter(|c| c.name != current) {
                        option { key: "{character.ocid}", value: "{character.name}", "{character.name}" }
                    }
                }
                ErrorAlert { message: error() }
                if let Some(message) = notice() {
                    p { class: "text-sm text-success", "{message}" }
                }
                button { class: "btn bg-orange-500 text-white", r#type: "submit", "변경" }
            }
        }
    )
}

#[component]
fn PasswordSection() -> Element {
    let mut current_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut new_password_confirm = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut notice = use_signal(|| None::<String>);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();

        let dto = ChangePasswordDto {
            current_password: current_password(),
            new_password: new_password(),
            new_password_confirm: new_password_confirm(),
        };
        if let Err(err) = dto.validate() {
            error.set(Some(err.to_string()));
            return;
        }

        #[cfg(feature = "web")]
        spawn(async move {
            use crate::client::util::api::user::change_password;

            match change_password(&dto).await {
                Ok(_) => {
                    error.set(None);
                    notice.set(Some("비밀번호가 변경되었습니다.".to_string()));
                    current_password.set(String::new());
                    new_password.set(String::new());
                    new_password_confirm.set(String::new());
                }
                Err(err) => error.set(Some(err)),
            }
        });
    };

    rsx!(
        form {
            class: "card bg-base-100 border border-base-300",
            onsubmit: on_submit,
            div { class: "card-body gap-3",
                h2 { class: "card-title text-lg", "비밀번호 변경" }
                input {
                    class: "input input-bordered w-full",
                    r#type: "password",
                    placeholder: "현재 비밀번호",
                    value: "{current_password}",
                    oninput: move |e| current_password.set(e.value()),
                }
                input {
                    class: "input input-bordered w-full",
                    r#type: "password",
                    placeholder: "새 비밀번호 (10자 이상)",
                    value: "{new_password}",
                    oninput: move |e| new_password.set(e.value()),
                }
                input {
                    class: "input input-bordered w-full",
                    r#type: "password",
                    placeholder: "새 비밀번호 확인",
                    value: "{new_password_confirm}",
                    oninput: move |e| new_password_confirm.set(e.value()),
                }
                ErrorAlert { message: error() }
                if let Some(message) = notice() {
                    p { class: "text-sm text-success", "{message}" }
                }
                button { class: "btn bg-orange-500 text-white", r#type: "submit", "변경" }
            }
        }
    )
}

#[derive(Clone, Copy, PartialEq)]
enum Preference {
    Privacy,
    WeeklyReset,
}

/// Toggles apply immediately; a failed update leaves the previous value in place.
#[component]
fn PreferencesSection(mut settings: Signal<Option<UserSettingsDto>>) -> Element {
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<String>);

    let (agreed, weekly_reset) = settings
        .read()
        .as_ref()
        .map(|s| (s.data_collection_agreed, s.weekly_reset_enabled))
        .unwrap_or_default();
    let disabled = settings.read().is_none();

    #[allow(unused_variables)]
    let toggle = use_callback(move |(preference, value): (Preference, bool)| {
        #[cfg(feature = "web")]
        spawn(async move {
            use crate::client::util::api::user::{update_privacy, update_weekly_reset};

            let result = match preference {
                Preference::Privacy => update_privacy(value).await,
                Preference::WeeklyReset => update_weekly_reset(value).await,
            };
            match result {
                Ok(updated) => {
                    error.set(None);
                    settings.set(Some(updated));
                }
                Err(err) => error.set(Some(err)),
            }
        });
    });

    rsx!(
        div { class: "card bg-base-100 border border-base-300",
            div { class: "card-body gap-3",
                h2 { class: "card-title text-lg", "환경 설정" }
                label { class: "label cursor-pointer",
                    span { class: "label-text", "캐릭터 정보 수집 동의" }
                    input {
                        class: "toggle toggle-warning",
                        r#type: "checkbox",
                        checked: agreed,
                        disabled,
                        onchange: move |e| toggle.call((Preference::Privacy, e.checked())),
                    }
                }
                label { class: "label cursor-pointer",
                    span { class: "label-text", "주간 초기화 시 보스 선택 초기화" }
                    input {
                        class: "toggle toggle-warning",
                        r#type: "checkbox",
                        checked: weekly_reset,
                        disabled,
                        onchange: move |e| toggle.call((Preference::WeeklyReset, e.checked())),
                    }
                }
                ErrorAlert { message: error() }
            }
        }
    )
}
