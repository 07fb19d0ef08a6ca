//! Application-wide constants
//!
//! This module contains all magic numbers and string literals used throughout
//! the application, providing a single source of truth for constant values.

/// Marvel API constants
pub mod api {
    /// Default API host (the `/v1/public/characters` path is appended)
    pub const DEFAULT_BASE_URL: &str = "https://gateway.marvel.com";

    /// Path of the character listing endpoint, relative to the base URL
    pub const CHARACTERS_PATH: &str = "v1/public/characters";

    /// Number of characters requested per fetch.
    /// Must never exceed the location pool size.
    pub const FETCH_LIMIT: usize = crate::locations::POOL_SIZE;

    /// Default HTTP timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
}

/// Key-value storage constants
pub mod storage {
    /// Key holding the dark theme flag
    pub const THEME_KEY: &str = "isThemeDark";

    /// Filename of the durable key-value store inside the app config dir
    pub const FILENAME: &str = "storage.json";
}

/// Config file locations
pub mod config {
    /// Directory under the platform config dir
    pub const APP_DIR: &str = "marvel-roster";

    /// Config filename
    pub const FILENAME: &str = "config.json";
}

/// Environment variable names
pub mod env {
    pub const PUBLIC_KEY: &str = "MARVEL_PUBLIC_KEY";
    pub const PRIVATE_KEY: &str = "MARVEL_PRIVATE_KEY";
    pub const BASE_URL: &str = "MARVEL_BASE_URL";
    pub const TIMEOUT_SECS: &str = "MARVEL_TIMEOUT_SECS";
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
}

/// Config validation ranges
pub mod validation {
    pub const MIN_TIMEOUT_SECS: u64 = 1;
    pub const MAX_TIMEOUT_SECS: u64 = 120;
}

/// Character presentation constants
pub mod character {
    /// Substituted for empty descriptions returned by the API
    pub const FALLBACK_DESCRIPTION: &str = "Marvel characters are a diverse group of superheroes and villains with extraordinary powers. From Iron Man to Spider-Man, they captivate audiences through comics, movies, and shows. These iconic characters bring unique stories, struggles, and motivations, inspiring fans worldwide.";
}

/// Map camera constants
pub mod map {
    /// Default camera center (Rotterdam)
    pub const DEFAULT_LATITUDE: f64 = 51.9225;
    pub const DEFAULT_LONGITUDE: f64 = 4.47917;

    /// Zoom span of the initial region
    pub const REGION_DELTA: f64 = 0.05;

    /// Camera altitude when focused on a character
    pub const FOCUSED_ALTITUDE: f64 = 3.0;

    /// Camera altitude for the overview
    pub const OVERVIEW_ALTITUDE: f64 = 1.0;
}
