// DOM wiring constants for the web frontend.

// Element ids
pub const GALAXY_CANVAS_ID: &str = "galaxy-canvas";
pub const PARTICLES_CANVAS_ID: &str = "particles-canvas";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";

// Media query consulted when no theme is stored
pub const PREFERS_LIGHT_QUERY: &str = "(prefers-color-scheme: light)";

// Debounce / revert delays (milliseconds)
pub const RESIZE_DEBOUNCE_MS: i32 = 250; // particle field re-seed after the last resize
pub const POINTER_IDLE_MS: i32 = 100; // pointer influence ends after the last move
pub const TOGGLE_SPIN_MS: i32 = 300; // toggle control rotation is cleared after this

// Toggle control spin
pub const TOGGLE_SPIN_TRANSFORM: &str = "rotate(360deg)";
