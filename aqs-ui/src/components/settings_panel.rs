//! Profile and theme settings.
//!
//! The profile is held for the session only; the theme is persisted by the
//! root shell whenever `AppState::theme` changes.

use crate::js_bridge;
use crate::state::AppState;
use aqs_core::profile::Theme;
use dioxus::prelude::*;

const PICTURE_INPUT_ID: &str = "aqs-profile-picture";

#[component]
pub fn SettingsPanel() -> Element {
    let mut state = use_context::<AppState>();
    let mut name_input = use_signal(|| state.profile.peek().display_name.clone());
    let mut picture_error = use_signal(|| None::<String>);

    let profile = state.profile.read().clone();
    let theme = (state.theme)();

    let on_save_name = move |_| {
        let name = name_input();
        if !state.profile.write().rename(&name) {
            name_input.set(state.profile.peek().display_name.clone());
        }
    };

    let on_picture = move |_| {
        let Some(file) = js_bridge::selected_file(PICTURE_INPUT_ID) else {
            return;
        };
        spawn(async move {
            match js_bridge::read_file_as_data_url(file).await {
                Ok(data_url) => {
                    picture_error.set(None);
                    state.profile.write().picture_data = Some(data_url);
                }
                Err(e) => {
                    log::warn!("[AQS] settings: picture read failed: {}", e);
                    picture_error.set(Some(e));
                }
            }
        });
    };

    rsx! {
        div {
            class: "settings-panel",
            style: "display: grid; gap: 16px; max-width: 520px;",
            section {
                class: "card",
                h3 { style: "margin: 0 0 8px 0;", "Profile" }
                div {
                    style: "display: flex; gap: 16px; align-items: center;",
                    Avatar { size: 64 }
                    div {
                        style: "display: grid; gap: 6px;",
                        input {
                            id: PICTURE_INPUT_ID,
                            r#type: "file",
                            accept: "image/*",
                            onchange: on_picture,
                        }
                        if profile.picture_data.is_some() {
                            button {
                                onclick: move |_| state.profile.write().picture_data = None,
                                "Remove picture"
                            }
                        }
                    }
                }
                if let Some(message) = picture_error() {
                    p { style: "color: var(--danger);", "Could not read picture: {message}" }
                }
                label {
                    style: "display: block; margin-top: 12px;",
                    "Display name: "
                    input {
                        r#type: "text",
                        value: "{name_input}",
                        oninput: move |evt: Event<FormData>| name_input.set(evt.value()),
                    }
                }
                button { style: "margin-top: 8px;", onclick: on_save_name, "Save name" }
                p {
                    style: "font-size: 12px; color: var(--muted);",
                    "Profile details are kept until you close this tab."
                }
            }
            section {
                class: "card",
                h3 { style: "margin: 0 0 8px 0;", "Appearance" }
                for option in [Theme::Light, Theme::Dark] {
                    label {
                        style: "margin-right: 16px;",
                        input {
                            r#type: "radio",
                            name: "theme",
                            checked: theme == option,
                            onchange: move |_| state.theme.set(option),
                        }
                        " {option}"
                    }
                }
            }
        }
    }
}

/// Profile picture, or initials when none is set.
#[component]
pub fn Avatar(#[props(default = 32)] size: u32) -> Element {
    let state = use_context::<AppState>();
    let profile = state.profile.read().clone();
    let style = format!(
        "width: {size}px; height: {size}px; border-radius: 50%; object-fit: cover; display: inline-flex; align-items: center; justify-content: center; background: var(--accent); color: var(--on-accent); font-weight: 700; font-size: {}px;",
        size / 3
    );
    match profile.picture_data {
        Some(src) => rsx! { img { src: "{src}", alt: "{profile.display_name}", style: "{style}" } },
        None => {
            let initials = profile.initials();
            rsx! { span { style: "{style}", "{initials}" } }
        }
    }
}
