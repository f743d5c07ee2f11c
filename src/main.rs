use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use carousel::constants::*;
use carousel::slide::Slide;
use carousel::image_dir::load_sorted_image_paths;
use carousel::texture_loader::load_texture_with_exif_rotation;
use carousel::{Carousel, Navigation};

/// Browse a directory of images as a horizontal carousel.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Directory containing the images to show
    image_directory: PathBuf,

    /// Window width in pixels
    #[arg(long, default_value_t = WINDOW_WIDTH)]
    width: i32,

    /// Window height in pixels
    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    height: i32,

    /// Target frames per second
    #[arg(long, default_value_t = FPS)]
    fps: u32,

    /// Slides to advance by after startup (negative moves backward)
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    start: i64,
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn show_fatal(rl: &mut RaylibHandle, thread: &RaylibThread, message: &str) {
    let mut d = rl.begin_drawing(thread);
    d.clear_background(Color::BLACK);
    d.draw_text(&format!("Error: {}", message), 20, 20, 20, Color::RED);
    drop(d);
    std::thread::sleep(Duration::from_secs(ERROR_DISPLAY_SECS));
}

// Keyboard and the two edge click areas map to one navigation per frame.
fn read_navigation(rl: &RaylibHandle) -> Option<Navigation> {
    use KeyboardKey::*;

    if [KEY_RIGHT, KEY_D, KEY_SPACE].iter().any(|&k| rl.is_key_pressed(k)) {
        return Some(Navigation::Next);
    }
    if [KEY_LEFT, KEY_A].iter().any(|&k| rl.is_key_pressed(k)) {
        return Some(Navigation::Previous);
    }

    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        let x = rl.get_mouse_position().x;
        let width = rl.get_screen_width() as f32;
        if x <= NAV_BUTTON_WIDTH {
            return Some(Navigation::Previous);
        }
        if x >= width - NAV_BUTTON_WIDTH {
            return Some(Navigation::Next);
        }
    }

    None
}

fn draw_nav_buttons(d: &mut impl RaylibDraw, width: i32, height: i32) {
    let button = NAV_BUTTON_WIDTH as i32;
    let shade = Color::new(0, 0, 0, 120);
    d.draw_rectangle(0, 0, button, height, shade);
    d.draw_rectangle(width - button, 0, button, height, shade);
    d.draw_text("<", button / 2 - 8, height / 2 - 20, 40, Color::WHITE);
    d.draw_text(">", width - button / 2 - 8, height / 2 - 20, 40, Color::WHITE);
}

fn main() -> Result<()> {
    setup_logging();
    let args = Args::parse();
    info!(directory = ?args.image_directory, "starting carousel");

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let image_paths = match load_sorted_image_paths(&args.image_directory) {
        Ok(paths) => paths,
        Err(e) => {
            show_fatal(&mut rl, &thread, &e.to_string());
            return Err(e).context("loading slides");
        }
    };

    let mut slides = Vec::with_capacity(image_paths.len());
    for path in image_paths {
        match load_texture_with_exif_rotation(&mut rl, &thread, &path) {
            Ok(texture) => slides.push(Slide::new(texture)),
            Err(e) => warn!(error = %e, "skipping image"),
        }
    }

    if slides.is_empty() {
        show_fatal(&mut rl, &thread, "No slides loaded.");
        anyhow::bail!("no slides could be loaded from {:?}", args.image_directory);
    }
    info!(count = slides.len(), "slides loaded");

    let mut carousel = Carousel::new(slides);
    if args.start != 0 {
        carousel.advance(args.start);
    }

    while !rl.window_should_close() {
        if let Some(navigation) = read_navigation(&rl) {
            carousel.navigate(navigation);
            info!(index = carousel.current_index(), "showing slide");
        }

        let width = rl.get_screen_width();
        let height = rl.get_screen_height();

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        for (position, slide) in carousel.host().iter().enumerate() {
            slide.draw(&mut d, position, width as f32, height as f32);
        }
        draw_nav_buttons(&mut d, width, height);
    }

    Ok(())
}
