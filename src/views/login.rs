use dioxus::prelude::*;

use crate::router::Route;

/// The trimmed username to sign in with, or `None` when nothing was typed.
fn sign_in_name(raw: &str) -> Option<String> {
    let name = raw.trim();
    (!name.is_empty()).then(|| name.to_string())
}

#[component]
pub fn Login() -> Element {
    let mut username = use_signal(String::new);
    let nav = navigator();

    rsx! {
        h1 { "Sign in" }
        form {
            onsubmit: move |_| {
                let Some(name) = sign_in_name(&username.read()) else {
                    log::warn!("ignoring sign in without a username");
                    return;
                };

                log::info!("signing in as {}", name);
                nav.push(Route::ChatView {});
            },
            input {
                placeholder: "Username",
                value: "{username}",
                oninput: move |evt| username.set(evt.value())
            }
            button { r#type: "submit", "Continue" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_username_is_ignored() {
        assert_eq!(sign_in_name(""), None);
        assert_eq!(sign_in_name("   \t"), None);
    }

    #[test]
    fn username_is_trimmed() {
        assert_eq!(sign_in_name("  ada "), Some("ada".to_string()));
    }
}
