pub const SLIDE_SPAN_PERCENT: i64 = 100;      // Shift per index step, in percent of a slide's width
pub const SLIDE_STAGGER_PERCENT: i64 = 10;    // Fixed per-slide offset added for each position in the row

pub const WINDOW_WIDTH: i32 = 1280;           // Default window width
pub const WINDOW_HEIGHT: i32 = 720;           // Default window height
pub const FPS: u32 = 60;                      // Frames per second

pub const FIT_RATIO: f32 = 0.9;               // Share of the frame an image may cover
pub const NAV_BUTTON_WIDTH: f32 = 60.0;       // Width of the previous/next click areas (pixels)
pub const ERROR_DISPLAY_SECS: u64 = 5;        // How long fatal load errors stay on screen
