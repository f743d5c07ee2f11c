//! Horizontal slide carousel with wraparound navigation.
//!
//! [`Carousel`] owns the current index and positions the slides of any
//! [`SlideHost`]. The `viewer` feature adds a raylib host that shows a
//! directory of images.

pub mod carousel;
pub mod constants;
pub mod host;
pub mod image_dir;
pub mod state;

#[cfg(feature = "viewer")]
pub mod slide;
#[cfg(feature = "viewer")]
pub mod texture_loader;

pub use carousel::{Carousel, slide_offset};
pub use host::{Offset, SlideElement, SlideHost};
pub use state::Navigation;
