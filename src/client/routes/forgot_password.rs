use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{ErrorAlert, Page},
        router::Route,
    },
    model::user::ResetPasswordDto,
};

/// Issues a temporary password to whoever can show a Nexon API key for the main character.
#[component]
pub fn ForgotPassword() -> Element {
    let mut main_character_name = use_signal(String::new);
    let mut nexon_api_key = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut submitting = use_signal(|| false);
    #[allow(unused_mut)]
    let mut temporary_password = use_signal(|| None::<String>);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();

        let dto = ResetPasswordDto {
            main_character_name: main_character_name().trim().to_string(),
            nexon_api_key: nexon_api_key().trim().to_string(),
        };
        if let Err(err) = dto.validate() {
            error.set(Some(err.to_string()));
            return;
        }

        #[cfg(feature = "web")]
        spawn(async move {
            use crate::client::util::api::auth::reset_password;

            submitting.set(true);
            match reset_password(&dto).await {
                Ok(issued) => {
                    error.set(None);
                    temporary_password.set(Some(issued.temporary_password));
                }
                Err(err) => error.set(Some(err)),
            }
            submitting.set(false);
        });
    };

    rsx!(
        Title { "비밀번호 찾기 | 메요일" }
        Page { class: "flex items-center justify-center",
            div { class: "card bg-base-100 border border-base-300 w-full max-w-md",
                div { class: "card-body gap-4",
                    h1 { class: "card-title text-xl", "비밀번호 찾기" }
                    if let Some(issued) = temporary_password() {
                        div { class: "flex flex-col gap-3",
                            p { "임시 비밀번호가 발급되었습니다. 로그인 후 설정에서 비밀번호를 변경해 주세요." }
                            code { class: "p-3 bg-base-200 rounded-lg text-lg text-center select-all", "{issued}" }
                            Link { to: Route::Login {}, class: "btn bg-orange-500 text-white", "로그인하러 가기" }
                        }
                    } else {
                        form { class: "flex flex-col gap-4", onsubmit: on_submit,
                            p { class: "text-sm opacity-70",
                                "본캐가 속한 계정의 Nexon Open API 키로 본인 확인 후 임시 비밀번호를 발급합니다."
                            }
                            input {
                                class: "input input-bordered w-full",
                                placeholder: "본캐 이름",
                                value: "{main_character_name}",
                                oninput: move |e| main_character_name.set(e.value()),
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
                                disabled: submitting(),
                                "임시 비밀번호 발급"
                            }
                            Link { to: Route::Login {}, class: "link text-sm", "로그인으로 돌아가기" }
                        }
                    }
                }
            }
        }
    )
}
