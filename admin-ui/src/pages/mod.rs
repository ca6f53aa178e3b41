mod admin;
mod admin_settings;
mod home;
mod login;
mod not_found;
mod telegram_callback;

pub use admin::Admin;
pub use admin_settings::AdminSettings;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use telegram_callback::TelegramCallback;
