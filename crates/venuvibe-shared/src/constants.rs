/// Application name
pub const APP_NAME: &str = "VenuVibe";

/// Key holding the single current-user record (JSON object).
pub const KEY_CURRENT_USER: &str = "venuvibe_user";

/// Key holding every registered user (JSON array).
pub const KEY_USERS: &str = "venuvibe_users";

/// Key holding every event of every user (JSON array).
pub const KEY_EVENTS: &str = "venuvibe_events";

pub const KEY_GUESTS: &str = "venuvibe_guests";
pub const KEY_VENDORS: &str = "venuvibe_vendors";
pub const KEY_BUDGET_ITEMS: &str = "venuvibe_budget_items";
pub const KEY_TASKS: &str = "venuvibe_tasks";

/// Key holding salted password hashes, one per user id (JSON array).
pub const KEY_CREDENTIALS: &str = "venuvibe_credentials";

/// Key derivation context for password hashing (BLAKE3)
pub const KDF_CONTEXT_PASSWORD: &str = "venuvibe-password-v1";

/// Password salt size in bytes
pub const SALT_SIZE: usize = 16;

/// Highest vendor rating
pub const MAX_VENDOR_RATING: f32 = 5.0;

/// Most plus-ones a single guest may bring
pub const MAX_PLUS_ONES: u32 = 50;

/// Largest accepted budget amount, in whole currency units
pub const MAX_BUDGET_AMOUNT: i64 = 1_000_000_000_000;
