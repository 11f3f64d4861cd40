use crate::paint::{Color, ColorStop};

// Shared tuning constants for the page background and theme handling.
// Distances are CSS pixels, times are milliseconds, angles are radians.

// ---------------- Particle field ----------------

// Viewport width breakpoints (exclusive upper bound, particle count)
pub const PARTICLE_BREAKPOINTS: [(f32, usize); 3] = [(480.0, 30), (768.0, 50), (1024.0, 70)];
pub const PARTICLE_COUNT_MAX: usize = 100;

pub const PARTICLE_MIN_RADIUS: f32 = 1.0;
pub const PARTICLE_MAX_RADIUS: f32 = 3.0;
pub const PARTICLE_SPEED: f32 = 0.3; // full span of each velocity component, centered on 0
pub const PARTICLE_MIN_OPACITY: f32 = 0.3;
pub const PARTICLE_OPACITY_SPAN: f32 = 0.5;
pub const PARTICLE_MIN_PULSE_SPEED: f64 = 0.01;
pub const PARTICLE_PULSE_SPEED_SPAN: f64 = 0.02;
pub const PULSE_AMPLITUDE: f32 = 0.5;
pub const PARTICLE_MIN_DRAWN_RADIUS: f32 = 0.5;

// Off-canvas slack before a particle wraps to the opposite edge
pub const WRAP_MARGIN: f32 = 10.0;

// Neighbor lines
pub const CONNECTION_DISTANCE: f32 = 120.0;
pub const CONNECTION_MAX_ALPHA: f32 = 0.15;
pub const CONNECTION_LINE_WIDTH: f32 = 0.5;

// Pointer influence
pub const POINTER_INFLUENCE_RADIUS: f32 = 100.0;
pub const POINTER_PUSH: f32 = 0.02; // fraction of the offset applied per frame at full force

pub const PARTICLE_COLORS: [Color; 5] = [
    Color::rgba(0, 217, 255, 0.6),   // cyan
    Color::rgba(255, 0, 128, 0.6),   // pink
    Color::rgba(124, 58, 237, 0.6),  // purple
    Color::rgba(255, 255, 255, 0.4), // white
    Color::rgba(103, 126, 234, 0.5), // blue
];

// ---------------- Starfield / planets ----------------

pub const STAR_COUNT: usize = 200;
pub const STAR_MIN_RADIUS: f32 = 0.2;
pub const STAR_RADIUS_SPAN: f32 = 1.2;
pub const STAR_MIN_ALPHA: f32 = 0.5;
pub const STAR_ALPHA_SPAN: f32 = 0.5;

pub const PLANET_COUNT: usize = 10;
pub const PLANET_MIN_RADIUS: f32 = 20.0;
pub const PLANET_RADIUS_SPAN: f32 = 30.0;
pub const ORBIT_MIN_RADIUS: f32 = 50.0;
pub const ORBIT_RADIUS_SPAN: f32 = 100.0;
pub const ORBIT_SPEED_SPAN: f32 = 0.002; // radians per frame, centered on 0
pub const PLANET_GLOW_BLUR: f32 = 20.0;

pub const PLANET_COLORS: [Color; 8] = [
    Color::rgb(0xf5, 0xc5, 0x42), // yellow
    Color::rgb(0x42, 0xa7, 0xf5), // blue
    Color::rgb(0xf5, 0x42, 0xa7), // pink
    Color::rgb(0x42, 0xf5, 0x54), // green
    Color::rgb(0xf5, 0x42, 0x42), // red
    Color::rgb(0xb1, 0x42, 0xf5), // purple
    Color::rgb(0xf5, 0xe1, 0x42), // light yellow
    Color::rgb(0x42, 0xf5, 0xe6), // cyan
];

// Background gradient: inner radius = width / 8, outer radius = width / 1.2
pub const BACKGROUND_INNER_DIVISOR: f32 = 8.0;
pub const BACKGROUND_OUTER_DIVISOR: f32 = 1.2;
pub const BACKGROUND_STOPS: [ColorStop; 3] = [
    ColorStop {
        offset: 0.0,
        color: Color::rgb(0x1a, 0x00, 0x33),
    },
    ColorStop {
        offset: 0.5,
        color: Color::rgb(0x12, 0x00, 0x2a),
    },
    ColorStop {
        offset: 1.0,
        color: Color::rgb(0x09, 0x00, 0x13),
    },
];

// ---------------- Theme ----------------

pub const THEME_STORAGE_KEY: &str = "linktree-theme";
pub const THEME_ATTRIBUTE: &str = "data-theme";
