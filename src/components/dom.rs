//! Element ids the client controller script looks up.
//!
//! The script in `assets/site.js` uses the same literals; keep both in sync.

/// Button that opens and closes the mobile menu.
pub const MENU_TOGGLE: &str = "menu-toggle";

/// Mobile menu panel (hidden until toggled).
pub const MOBILE_MENU: &str = "mobile-menu";

/// Dark-mode toggle button.
pub const DARK_MODE_TOGGLE: &str = "dark-mode-toggle";

/// Container the script fills with sign-in state.
pub const AUTH_CONTAINER: &str = "auth-container";

/// Slot for the signed-in user's avatar.
pub const USER_AVATAR: &str = "user-avatar";

/// Every hook id, for tests and the controller script check.
pub const ALL: &[&str] = &[
    MENU_TOGGLE,
    MOBILE_MENU,
    DARK_MODE_TOGGLE,
    AUTH_CONTAINER,
    USER_AVATAR,
];
