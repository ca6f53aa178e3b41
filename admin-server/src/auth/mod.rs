pub mod handlers;
pub mod session;
pub mod telegram;

pub use telegram::{TelegramAuthError, TelegramVerifier};
