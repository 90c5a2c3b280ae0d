mod chat;
mod login;
mod settings;

pub use chat::ChatView;
pub use login::Login;
pub use settings::Settings;
