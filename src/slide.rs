use raylib::prelude::*;
use crate::constants::*;
use crate::host::{Offset, SlideElement};

pub struct Slide {
    image: Texture2D,
    offset: Offset,
}

impl Slide {
    pub fn new(image: Texture2D) -> Self {
        Self { image, offset: Offset::default() }
    }

    // Scale that fits the texture inside FIT_RATIO of the frame
    fn fit_scale(&self, frame_width: f32, frame_height: f32) -> f32 {
        let width = self.image.width() as f32;
        let height = self.image.height() as f32;
        (frame_width * FIT_RATIO / width)
            .min(frame_height * FIT_RATIO / height)
            .min(1.0)
    }

    /// Draws the slide at `position` in a row of frames, shifted by its offset.
    ///
    /// Each slide is one frame wide, so the offset is a percentage of the
    /// frame width.
    pub fn draw(&self, d: &mut impl RaylibDraw, position: usize, frame_width: f32, frame_height: f32) {
        let frame_x = position as f32 * frame_width + self.offset.to_pixels(frame_width);
        if frame_x >= frame_width || frame_x + frame_width <= 0.0 {
            return;
        }

        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;

        let scale = self.fit_scale(frame_width, frame_height);
        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            Rectangle::new(
                frame_x + (frame_width - scaled_width) * 0.5,
                (frame_height - scaled_height) * 0.5,
                scaled_width,
                scaled_height,
            ),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }
}

impl SlideElement for Slide {
    fn set_offset(&mut self, offset: Offset) {
        self.offset = offset;
    }
}
