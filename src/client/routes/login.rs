use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::{
    client::{
        components::{ErrorAlert, Page},
        router::Route,
        store::session::SessionState,
    },
    model::user::LoginDto,
};

#[component]
pub fn Login() -> Element {
    #[allow(unused_mut)]
    let mut session = use_context::<Signal<SessionState>>();
    let navigator = use_navigator();

    let mut main_character_name = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut submitting = use_signal(|| false);

    // Logged in visitors go straight to the dashboard
    use_effect(move || {
        if session.read().is_logged_in() {
            navigator.replace(Route::BossStatus {});
        }
    });

    let on_submit = move |e: FormEvent| {
        e.prevent_default();

        let dto = LoginDto {
            main_character_name: main_character_name().trim().to_string(),
            password: password(),
        };
        if let Err(err) = dto.validate() {
            error.set(Some(err.to_string()));
            return;
        }

        #[cfg(feature = "web")]
        spawn(async move {
            use crate::client::util::api::auth::login;

            submitting.set(true);
            match login(&dto).await {
                Ok(user) => {
                    error.set(None);
                    session.set(SessionState::fetched(Some(user)));
                    navigator.push(Route::BossStatus {});
                }
                Err(err) => error.set(Some(err)),
            }
            submitting.set(false);
        });
    };

    rsx!(
        Title { "로그인 | 메요일" }
        Meta {
            name: "description",
            content: "메이플스토리 주간 보스 돌이와 결정석 수익을 한눈에 관리하세요."
        }
        Page { class: "flex items-center justify-center",
            form {
                class: "card bg-base-100 border border-base-300 w-full max-w-sm",
                onsubmit: on_submit,
                div { class: "card-body gap-4",
                    h1 { class: "card-title text-2xl justify-center text-orange-500", "메요일" }
                    p { class: "text-center text-sm opacity-70", "본캐 이름과 비밀번호로 로그인하세요." }
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "본캐 이름",
                        value: "{main_character_name}",
                        oninput: move |e| main_character_name.set(e.value()),
                    }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "password",
                        placeholder: "비밀번호",
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }
                    ErrorAlert { message: error() }
                    button {
                        class: "btn bg-orange-500 text-white w-full",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                        "로그인"
                    }
                    div { class: "flex justify-between text-sm",
                        Link { to: Route::Register {}, class: "link", "회원가입" }
                        Link { to: Route::ForgotPassword {}, class: "link", "비밀번호 찾기" }
                    }
                }
            }
        }
    )
}
