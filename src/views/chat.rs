use dioxus::prelude::*;

use crate::router::Route;

/// The message to send for a draft: trimmed, and `None` if only whitespace is left.
fn outgoing_message(draft: &str) -> Option<String> {
    let text = draft.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Append the draft to `messages` if it holds anything, clearing the draft once sent.
fn send_draft(messages: &mut Vec<String>, draft: &mut String) -> bool {
    let Some(text) = outgoing_message(draft) else {
        return false;
    };

    log::debug!("sending message ({} bytes)", text.len());
    messages.push(text);
    draft.clear();
    true
}

#[component]
pub fn ChatView() -> Element {
    let mut messages = use_signal(Vec::<String>::new);
    let mut draft = use_signal(String::new);

    let mut send = move || {
        send_draft(&mut messages.write(), &mut draft.write());
    };

    rsx! {
        nav {
            Link { to: Route::Settings {}, "Settings" }
        }
        ul {
            for (idx, message) in messages.read().iter().enumerate() {
                li { key: "{idx}", "{message}" }
            }
        }
        input {
            placeholder: "Message",
            value: "{draft}",
            oninput: move |evt| draft.set(evt.value()),
            onkeydown: move |evt| {
                if evt.key() == Key::Enter {
                    send();
                }
            }
        }
        button { onclick: move |_| send(), "Send" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_trimmed() {
        assert_eq!(outgoing_message("  hi there \n"), Some("hi there".to_string()));
    }

    #[test]
    fn blank_message_is_dropped() {
        let mut messages = vec!["first".to_string()];
        let mut draft = "   ".to_string();

        assert!(!send_draft(&mut messages, &mut draft));
        assert_eq!(messages, vec!["first".to_string()]);
        assert_eq!(draft, "   ");
    }

    #[test]
    fn sending_clears_the_draft() {
        let mut messages = Vec::new();
        let mut draft = " hello ".to_string();

        assert!(send_draft(&mut messages, &mut draft));
        assert_eq!(messages, vec!["hello".to_string()]);
        assert!(draft.is_empty());
    }
}
