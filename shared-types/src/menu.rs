//! Settings panel navigation: the static menu tree and content routing.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    None,
    Star,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub id: &'static str,
    pub icon: MenuIcon,
    /// Setting category keys aggregated under this item. Empty for custom tabs.
    pub categories: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuSection {
    pub id: &'static str,
    pub items: &'static [MenuItem],
}

pub const FAVORITES_ID: &str = "favorites";
pub const DEFAULT_SECTION: &str = "branding";

const fn custom(id: &'static str, icon: MenuIcon) -> MenuItem {
    MenuItem {
        id,
        icon,
        categories: &[],
    }
}

const fn settings(id: &'static str, categories: &'static [&'static str]) -> MenuItem {
    MenuItem {
        id,
        icon: MenuIcon::None,
        categories,
    }
}

pub static MENU_SECTIONS: &[MenuSection] = &[
    MenuSection {
        id: "favorites",
        items: &[custom(FAVORITES_ID, MenuIcon::Star)],
    },
    MenuSection {
        id: "appearance",
        items: &[
            custom("branding", MenuIcon::None),
            custom("theme", MenuIcon::None),
        ],
    },
    MenuSection {
        id: "finance",
        items: &[
            settings(
                "payments",
                &["PAYMENT", "YOOKASSA", "CRYPTOBOT", "TELEGRAM_STARS", "TRIBUTE"],
            ),
            settings(
                "subscriptions",
                &["SUBSCRIPTIONS_CORE", "TRIAL", "PERIODS", "TRAFFIC", "AUTOPAY"],
            ),
        ],
    },
    MenuSection {
        id: "system",
        items: &[
            settings("interface", &["INTERFACE", "LOCALIZATION", "MINIAPP"]),
            settings(
                "notifications",
                &["NOTIFICATIONS", "ADMIN_NOTIFICATIONS", "ADMIN_REPORTS"],
            ),
            settings("database", &["DATABASE", "POSTGRES", "REDIS", "BACKUP"]),
            settings(
                "system",
                &["CORE", "MAINTENANCE", "MONITORING", "LOGGING", "WEBHOOK"],
            ),
            settings("users", &["USERS", "REFERRAL", "CHANNEL", "MODERATION"]),
        ],
    },
];

pub const SETTINGS_SECTIONS: &[&str] = &[
    "payments",
    "subscriptions",
    "interface",
    "notifications",
    "database",
    "system",
    "users",
];

pub fn find_menu_item(id: &str) -> Option<&'static MenuItem> {
    MENU_SECTIONS
        .iter()
        .flat_map(|section| section.items.iter())
        .find(|item| item.id == id)
}

pub fn is_settings_section(id: &str) -> bool {
    SETTINGS_SECTIONS.contains(&id)
}

/// What the main content area shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentView {
    SearchResults,
    Branding,
    Theme,
    Favorites,
    Settings(&'static MenuItem),
    Empty,
}

/// A non-blank search always wins over the active section.
pub fn resolve_content(active_section: &str, search_query: &str) -> ContentView {
    if !search_query.trim().is_empty() {
        return ContentView::SearchResults;
    }

    match active_section {
        "branding" => ContentView::Branding,
        "theme" => ContentView::Theme,
        FAVORITES_ID => ContentView::Favorites,
        id if is_settings_section(id) => match find_menu_item(id) {
            Some(item) => ContentView::Settings(item),
            None => ContentView::Empty,
        },
        _ => ContentView::Empty,
    }
}

/// The favorites item shows a count badge only when there is something to count.
pub fn favorites_badge(item_id: &str, favorites_count: usize) -> Option<usize> {
    (item_id == FAVORITES_ID && favorites_count > 0).then_some(favorites_count)
}
