//! Seed values and fixed dashboard constants.

/// Application name, shown as the sidebar title.
pub const APP_NAME: &str = "memodash";

/// Binary name for the CLI, used as the clap command name.
pub const BIN_NAME: &str = "memodash";

/// Seed display name of the signed-in user.
pub const SEED_USER_NAME: &str = "John Doe";
/// Seed role of the signed-in user.
pub const SEED_USER_ROLE: &str = "Admin";
/// Seed email of the signed-in user.
pub const SEED_USER_EMAIL: &str = "john@example.com";

/// Seed number of registered users.
pub const SEED_USERS: u64 = 1234;
/// Seed revenue in whole currency units.
pub const SEED_REVENUE: f64 = 56_780.0;
/// Seed number of orders.
pub const SEED_ORDERS: u64 = 890;
/// Seed month-over-month growth, in percent.
pub const SEED_GROWTH: f64 = 12.5;

/// Fixed month-over-month change shown on the revenue card.
pub const REVENUE_CHANGE: f64 = 8.2;
/// Fixed month-over-month change shown on the orders card.
pub const ORDERS_CHANGE: f64 = -2.4;

/// Number of entries in the derived activity feed.
pub const ACTIVITY_FEED_LEN: usize = 20;

/// Number of placeholder rows in the active users list.
pub const USER_LIST_LEN: usize = 5;

/// Default users added by a stats refresh.
pub const DEFAULT_USERS_INCREMENT: u64 = 10;

/// Default terminal poll interval in milliseconds.
pub const DEFAULT_TICK_RATE_MS: u64 = 250;
