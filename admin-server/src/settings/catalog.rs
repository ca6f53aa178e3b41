//! Built-in setting catalog: every key the panel can edit, with its default.

use serde_json::{json, Value};
use shared_types::{SettingChoice, SettingHint, SettingKind};
use SettingKind::{Bool, Float, Int, Str};

/// Category keys with their server-side labels, in display order.
pub const CATEGORIES: &[(&str, &str)] = &[
    ("CORE", "Core"),
    ("MAINTENANCE", "Maintenance"),
    ("MONITORING", "Monitoring"),
    ("LOGGING", "Logging"),
    ("WEBHOOK", "Webhook"),
    ("PAYMENT", "Payments"),
    ("YOOKASSA", "YooKassa"),
    ("CRYPTOBOT", "CryptoBot"),
    ("TELEGRAM_STARS", "Telegram Stars"),
    ("TRIBUTE", "Tribute"),
    ("SUBSCRIPTIONS_CORE", "Subscriptions"),
    ("TRIAL", "Trial"),
    ("PERIODS", "Periods"),
    ("TRAFFIC", "Traffic"),
    ("AUTOPAY", "Autopay"),
    ("INTERFACE", "Interface"),
    ("LOCALIZATION", "Localization"),
    ("MINIAPP", "Mini App"),
    ("NOTIFICATIONS", "User notifications"),
    ("ADMIN_NOTIFICATIONS", "Admin notifications"),
    ("ADMIN_REPORTS", "Admin reports"),
    ("DATABASE", "Database"),
    ("POSTGRES", "PostgreSQL"),
    ("REDIS", "Redis"),
    ("BACKUP", "Backups"),
    ("USERS", "Users"),
    ("REFERRAL", "Referral program"),
    ("CHANNEL", "Required channel"),
    ("MODERATION", "Moderation"),
];

pub fn category_label(key: &str) -> &str {
    CATEGORIES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| *label)
        .unwrap_or(key)
}

#[derive(Debug, Clone)]
pub struct SettingSpec {
    pub key: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub kind: SettingKind,
    pub default: Value,
    pub is_optional: bool,
    pub read_only: bool,
    pub hint: Option<SettingHint>,
    pub choices: Vec<SettingChoice>,
}

impl SettingSpec {
    fn new(
        key: &'static str,
        name: &'static str,
        category: &'static str,
        kind: SettingKind,
        default: Value,
    ) -> Self {
        Self {
            key,
            name,
            category,
            kind,
            default,
            is_optional: false,
            read_only: false,
            hint: None,
            choices: Vec::new(),
        }
    }

    fn optional(mut self) -> Self {
        self.is_optional = true;
        self
    }

    fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    fn describe(mut self, description: &str) -> Self {
        self.hint.get_or_insert_with(SettingHint::default).description = Some(description.to_string());
        self
    }

    fn example(mut self, example: &str) -> Self {
        self.hint.get_or_insert_with(SettingHint::default).example = Some(example.to_string());
        self
    }

    fn warning(mut self, warning: &str) -> Self {
        self.hint.get_or_insert_with(SettingHint::default).warning = Some(warning.to_string());
        self
    }

    fn depends_on(mut self, dependencies: &str) -> Self {
        self.hint.get_or_insert_with(SettingHint::default).dependencies =
            Some(dependencies.to_string());
        self
    }

    fn choices(mut self, choices: &[(Value, &str)]) -> Self {
        self.choices = choices
            .iter()
            .map(|(value, label)| SettingChoice {
                value: value.clone(),
                label: (*label).to_string(),
                description: None,
            })
            .collect();
        self
    }
}

pub fn builtin_specs() -> Vec<SettingSpec> {
    vec![
        // system
        SettingSpec::new("BOT_USERNAME", "Bot username", "CORE", Str, json!(""))
            .read_only()
            .describe("Username of the Telegram bot, taken from the bot token at startup"),
        SettingSpec::new("SUPPORT_USERNAME", "Support username", "CORE", Str, json!("@support"))
            .describe("Telegram handle users are sent to from the help menu")
            .example("@my_support"),
        SettingSpec::new("MAINTENANCE_MODE", "Maintenance mode", "MAINTENANCE", Bool, json!(false))
            .describe("Stops serving users and shows the maintenance message")
            .warning("Users cannot buy or renew while maintenance mode is on"),
        SettingSpec::new(
            "MAINTENANCE_MESSAGE",
            "Maintenance message",
            "MAINTENANCE",
            Str,
            json!("Technical works are in progress. Please come back later."),
        )
        .depends_on("MAINTENANCE_MODE"),
        SettingSpec::new(
            "MONITORING_INTERVAL",
            "Monitoring interval",
            "MONITORING",
            Int,
            json!(60),
        )
        .describe("Seconds between subscription status checks"),
        SettingSpec::new("LOG_LEVEL", "Log level", "LOGGING", Str, json!("INFO")).choices(&[
            (json!("DEBUG"), "Debug"),
            (json!("INFO"), "Info"),
            (json!("WARNING"), "Warning"),
            (json!("ERROR"), "Error"),
        ]),
        SettingSpec::new("WEBHOOK_URL", "Webhook URL", "WEBHOOK", Str, json!(null))
            .optional()
            .describe("Public URL Telegram delivers updates to; polling is used when empty")
            .example("https://bot.example.com"),
        // payments
        SettingSpec::new("PAYMENT_CURRENCY", "Currency", "PAYMENT", Str, json!("RUB")).choices(&[
            (json!("RUB"), "Ruble"),
            (json!("USD"), "US dollar"),
            (json!("EUR"), "Euro"),
        ]),
        SettingSpec::new("MIN_TOPUP_AMOUNT", "Minimum top-up", "PAYMENT", Int, json!(100))
            .describe("Smallest balance top-up accepted, in whole currency units"),
        SettingSpec::new("YOOKASSA_ENABLED", "YooKassa enabled", "YOOKASSA", Bool, json!(false)),
        SettingSpec::new("YOOKASSA_SHOP_ID", "YooKassa shop id", "YOOKASSA", Str, json!(null))
            .optional()
            .depends_on("YOOKASSA_ENABLED"),
        SettingSpec::new("YOOKASSA_SECRET_KEY", "YooKassa secret key", "YOOKASSA", Str, json!(null))
            .optional()
            .warning("Stored in plain text in the settings database"),
        SettingSpec::new("CRYPTOBOT_ENABLED", "CryptoBot enabled", "CRYPTOBOT", Bool, json!(false)),
        SettingSpec::new("CRYPTOBOT_ASSETS", "Accepted assets", "CRYPTOBOT", Str, json!("USDT,TON"))
            .describe("Comma-separated list of crypto assets offered at checkout")
            .example("USDT,TON,BTC"),
        SettingSpec::new("TELEGRAM_STARS_ENABLED", "Stars enabled", "TELEGRAM_STARS", Bool, json!(true)),
        SettingSpec::new("TELEGRAM_STARS_RATE", "Stars rate", "TELEGRAM_STARS", Float, json!(1.79))
            .describe("Price of one Telegram Star in the payment currency"),
        SettingSpec::new("TRIBUTE_ENABLED", "Tribute enabled", "TRIBUTE", Bool, json!(false)),
        // subscriptions
        SettingSpec::new(
            "DEFAULT_DEVICE_LIMIT",
            "Device limit",
            "SUBSCRIPTIONS_CORE",
            Int,
            json!(3),
        )
        .describe("Devices allowed per subscription unless the tariff says otherwise"),
        SettingSpec::new("TRIAL_DURATION_DAYS", "Trial duration", "TRIAL", Int, json!(3))
            .describe("Length of the free trial in days"),
        SettingSpec::new("TRIAL_TRAFFIC_LIMIT_GB", "Trial traffic", "TRIAL", Int, json!(10))
            .describe("Traffic included in the trial; 0 means unlimited"),
        SettingSpec::new("AVAILABLE_PERIODS", "Available periods", "PERIODS", Str, json!("30,90,180"))
            .describe("Subscription lengths in days offered for purchase")
            .example("14,30,60,90"),
        SettingSpec::new("TRAFFIC_PACKAGES", "Traffic packages", "TRAFFIC", Str, json!("5,10,25,50,0"))
            .describe("Traffic options in GB; 0 is the unlimited package"),
        SettingSpec::new("AUTOPAY_ENABLED", "Autopay", "AUTOPAY", Bool, json!(true)),
        SettingSpec::new("AUTOPAY_DAYS_BEFORE", "Autopay lead time", "AUTOPAY", Int, json!(3))
            .describe("Days before expiry when autopay charges the balance")
            .depends_on("AUTOPAY_ENABLED"),
        // interface
        SettingSpec::new("MAIN_MENU_MODE", "Main menu mode", "INTERFACE", Str, json!("default")).choices(&[
            (json!("default"), "Full menu"),
            (json!("text"), "Text only"),
        ]),
        SettingSpec::new("DEFAULT_LANGUAGE", "Default language", "LOCALIZATION", Str, json!("ru")).choices(&[
            (json!("ru"), "Русский"),
            (json!("en"), "English"),
        ]),
        SettingSpec::new("MINIAPP_URL", "Mini App URL", "MINIAPP", Str, json!(null))
            .optional()
            .describe("Web app opened from the bot's menu button"),
        // notifications
        SettingSpec::new(
            "EXPIRY_NOTIFICATION_DAYS",
            "Expiry reminder",
            "NOTIFICATIONS",
            Int,
            json!(3),
        )
        .describe("Days before expiry when users receive a reminder"),
        SettingSpec::new(
            "ADMIN_NOTIFICATIONS_CHAT_ID",
            "Admin chat id",
            "ADMIN_NOTIFICATIONS",
            Str,
            json!(null),
        )
        .optional()
        .describe("Chat that receives purchase and error notifications")
        .example("-1001234567890"),
        SettingSpec::new("ADMIN_REPORTS_ENABLED", "Daily reports", "ADMIN_REPORTS", Bool, json!(false)),
        SettingSpec::new("ADMIN_REPORTS_TIME", "Report time", "ADMIN_REPORTS", Str, json!("10:00"))
            .describe("Local time the daily report is sent at")
            .depends_on("ADMIN_REPORTS_ENABLED"),
        // database
        SettingSpec::new("DATABASE_MODE", "Database mode", "DATABASE", Str, json!("auto"))
            .read_only()
            .choices(&[
                (json!("auto"), "Auto"),
                (json!("sqlite"), "SQLite"),
                (json!("postgresql"), "PostgreSQL"),
            ]),
        SettingSpec::new("POSTGRES_POOL_SIZE", "Pool size", "POSTGRES", Int, json!(10)),
        SettingSpec::new("REDIS_URL", "Redis URL", "REDIS", Str, json!("redis://localhost:6379/0"))
            .warning("Changing the URL drops cached carts and rate limits"),
        SettingSpec::new("BACKUP_ENABLED", "Automatic backups", "BACKUP", Bool, json!(true)),
        SettingSpec::new("BACKUP_INTERVAL_HOURS", "Backup interval", "BACKUP", Int, json!(24))
            .depends_on("BACKUP_ENABLED"),
        // users
        SettingSpec::new("USER_REGISTRATION_ENABLED", "Registration", "USERS", Bool, json!(true))
            .describe("Allow new users to start the bot"),
        SettingSpec::new("REFERRAL_COMMISSION_PERCENT", "Referral commission", "REFERRAL", Int, json!(25))
            .describe("Percent of referred users' payments credited to the referrer"),
        SettingSpec::new("CHANNEL_SUB_ID", "Channel id", "CHANNEL", Str, json!(null))
            .optional()
            .describe("Channel users must join before using the bot"),
        SettingSpec::new("MODERATION_BAN_MESSAGE", "Ban message", "MODERATION", Str, json!("Access denied"))
            .describe("Reply sent to blocked users"),
    ]
}
