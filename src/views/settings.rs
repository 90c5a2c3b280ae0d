use dioxus::prelude::*;

use crate::router::Route;

#[component]
pub fn Settings() -> Element {
    let mut notifications = use_signal(|| true);

    rsx! {
        h1 { "Settings" }
        label {
            input {
                r#type: "checkbox",
                checked: notifications(),
                onchange: move |evt| notifications.set(evt.checked())
            }
            "Desktop notifications"
        }
        nav {
            Link { to: Route::ChatView {}, "Back to chat" }
            Link { to: Route::Login {}, "Sign out" }
        }
    }
}
