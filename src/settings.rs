//! Product-wide constants

use once_cell::sync::Lazy;

/// Part of the ProdID string that describes the organization (example of a ProdID string: `-//ABC Corporation//My Product//EN`).
pub const ORG_NAME: &str = "LoveConnect";

/// Part of the ProdID string that describes the product name.
pub const PRODUCT_NAME: &str = "LoveConnect Journal";

/// Domain suffix appended to event identifiers in exported `UID` lines
pub const UID_DOMAIN: &str = "loveconnect";

/// File name offered when downloading a calendar export
pub const CALENDAR_EXPORT_FILE_NAME: &str = "loveconnect-events.ics";

/// File name offered when downloading a full-document backup
pub const BACKUP_FILE_NAME: &str = "loveconnect-backup.json";

/// Key (file name) holding the serialized document inside a store folder
pub const DOCUMENT_FILE: &str = "data.json";
/// Key holding the UI theme token
pub const THEME_FILE: &str = "theme";
/// Key holding the display language token
pub const LANGUAGE_FILE: &str = "lang";
/// Key mirroring the platform notification permission
pub const NOTIFY_PERMISSION_FILE: &str = "notify-permission";
/// Key holding the onboarding-seen flag (boolean-as-text)
pub const ONBOARDING_FILE: &str = "onboarding-seen";

/// Bump this to evict every previously installed asset cache on the next activation
pub const CACHE_VERSION: &str = "v1";

/// Name of the asset cache the running version installs into
pub static CACHE_NAME: Lazy<String> =
    Lazy::new(|| format!("loveconnect-cache-{}", CACHE_VERSION));

/// Application shell document, served to navigations that are both uncached and offline
pub const APP_SHELL: &str = "/index.html";

/// Static assets fetched and pinned at install time
pub const ASSET_MANIFEST: &[&str] = &[
    "/",
    "/index.html",
    "/manifest.json",
    "/styles/globals.css",
    "/scripts/app.js",
    "/icons/icon-192x192.png",
    "/icons/icon-512x512.png",
    "/icons/favicon.ico",
    "/sounds/notification.mp3",
    "/sounds/kiss.mp3",
    "/sounds/hug.mp3",
];
