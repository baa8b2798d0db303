use ratatui::style::Color;

// UI Constants
pub const HEAVY_DOWN_AND_RIGHT: char = '┏';
pub const HEAVY_DOWN_AND_LEFT: char = '┓';
pub const HEAVY_UP_AND_RIGHT: char = '┗';
pub const HEAVY_UP_AND_LEFT: char = '┛';
pub const HEAVY_HORIZONTAL: char = '━';

pub const APP_NAME: &str = "holofolio";
pub const LOGO_TEXT: &str = "P/GENAI";

// Palette
pub const CYBER_DARK: Color = Color::Rgb(15, 15, 15);
pub const NEON_CYAN: Color = Color::Rgb(0, 255, 213);
pub const NEON_PINK: Color = Color::Rgb(255, 0, 128);
pub const CYBER_PURPLE: Color = Color::Rgb(139, 92, 246);
pub const CYBER_BLUE: Color = Color::Rgb(14, 165, 233);
pub const EMERALD: Color = Color::Rgb(16, 185, 129);
pub const AMBER: Color = Color::Rgb(245, 158, 11);
pub const GOLD: Color = Color::Rgb(234, 179, 8);

// Timing defaults (milliseconds)
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1500;
pub const DEFAULT_CONTACT_SUBMIT_DELAY_MS: u64 = 2000;
pub const DEFAULT_TICK_RATE_MS: u64 = 100;
pub const DEFAULT_GEOCODE_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LOCATION_CACHE_SECS: u64 = 600;

// Geolocation
pub const DEFAULT_GEOCODE_URL: &str =
    "https://api.bigdatacloud.net/data/reverse-geocode-client";
pub const FALLBACK_LOCATION: &str = "India • Remote Worldwide";
pub const LOCATION_CACHE_CAPACITY: usize = 16;

pub const MAX_LOG_ENTRIES: usize = 200;
