//! Building blocks of the settings page.

mod branding_tab;
mod gate;
mod icons;
mod search;
mod setting_row;
mod settings_tab;
mod sidebar;
mod theme_tab;

pub use branding_tab::BrandingTab;
pub use gate::AdminGate;
pub use icons::{BackIcon, BurgerIcon, CloseIcon, SearchIcon, StarIcon};
pub use search::{SearchBox, SearchSummaryLine};
pub use setting_row::SettingRow;
pub use settings_tab::{FavoritesTab, SettingsTab};
pub use sidebar::Sidebar;
pub use theme_tab::ThemeTab;
