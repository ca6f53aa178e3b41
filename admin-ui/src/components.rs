pub mod admin;
pub mod styles;

pub use admin::*;
pub use styles::ADMIN_STYLES;
