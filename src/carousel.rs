use tracing::debug;

use crate::constants::*;
use crate::host::{Offset, SlideElement, SlideHost};
use crate::state::Navigation;

/// Cycles the slides of a host horizontally, wrapping around at both ends.
#[derive(Debug)]
pub struct Carousel<H: SlideHost> {
    host: H,
    current_index: i64,
}

impl<H: SlideHost> Carousel<H> {
    /// Takes ownership of the host and positions its slides once.
    pub fn new(host: H) -> Self {
        let mut carousel = Self {
            host,
            current_index: 0,
        };
        carousel.render();
        carousel
    }

    pub fn advance(&mut self, n: i64) {
        self.current_index += n;
        debug!(step = n, index = self.current_index, "advance");
        self.render();
    }

    pub fn navigate(&mut self, navigation: Navigation) {
        self.advance(navigation.step());
    }

    /// Wraps the current index back into range and writes every slide's offset.
    pub fn render(&mut self) {
        let slides = self.host.slides_mut();
        let len = slides.len() as i64;

        // Both checks run every time; with no slides a negative index ends up at -1.
        if self.current_index >= len {
            self.current_index = 0;
        }
        if self.current_index < 0 {
            self.current_index = len - 1;
        }

        for (i, slide) in slides.iter_mut().enumerate() {
            slide.set_offset(slide_offset(self.current_index, i));
        }

        debug!(index = self.current_index, slides = len, "render");
    }

    pub fn current_index(&self) -> i64 {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.host.slides().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }
}

/// Offset of the slide at `position` while `current_index` is active.
pub fn slide_offset(current_index: i64, position: usize) -> Offset {
    Offset(-(current_index * SLIDE_SPAN_PERCENT) + position as i64 * SLIDE_STAGGER_PERCENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct RecordingSlide {
        offset: Option<Offset>,
        writes: usize,
    }

    impl SlideElement for RecordingSlide {
        fn set_offset(&mut self, offset: Offset) {
            self.offset = Some(offset);
            self.writes += 1;
        }
    }

    fn slides(n: usize) -> Vec<RecordingSlide> {
        (0..n).map(|_| RecordingSlide::default()).collect()
    }

    fn offsets(carousel: &Carousel<Vec<RecordingSlide>>) -> Vec<i64> {
        carousel
            .host()
            .iter()
            .map(|s| s.offset.expect("slide never positioned").percent())
            .collect()
    }

    #[test]
    fn startup_renders_once_at_index_zero() {
        let carousel = Carousel::new(slides(3));
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(offsets(&carousel), vec![0, 10, 20]);
        assert!(carousel.host().iter().all(|s| s.writes == 1));
    }

    #[test]
    fn unit_steps_cycle_with_period_n() {
        let mut carousel = Carousel::new(slides(3));
        carousel.advance(1);
        assert_eq!(carousel.current_index(), 1);
        carousel.advance(1);
        assert_eq!(carousel.current_index(), 2);
        carousel.advance(1);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn stepping_back_from_first_wraps_to_last() {
        let mut carousel = Carousel::new(slides(5));
        carousel.advance(-1);
        assert_eq!(carousel.current_index(), 4);
        assert_eq!(offsets(&carousel), vec![-400, -390, -380, -370, -360]);
    }

    #[test]
    fn offsets_follow_index_and_stagger() {
        let mut carousel = Carousel::new(slides(4));
        carousel.advance(2);
        assert_eq!(offsets(&carousel), vec![-200, -190, -180, -170]);
    }

    #[test]
    fn index_stays_in_range_for_mixed_steps() {
        let mut carousel = Carousel::new(slides(4));
        for n in [1, 1, -1, -1, -1, 7, -9, 3, 0, 4, -4, 2, 100, -100] {
            carousel.advance(n);
            let index = carousel.current_index();
            assert!((0..4).contains(&index), "index {index} out of range after advance({n})");
        }
    }

    #[test]
    fn large_jumps_reset_instead_of_modulo() {
        let mut carousel = Carousel::new(slides(3));
        carousel.advance(5);
        assert_eq!(carousel.current_index(), 0);
        carousel.advance(-5);
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn advance_zero_still_rewrites_every_slide() {
        let mut carousel = Carousel::new(slides(3));
        carousel.advance(0);
        assert_eq!(carousel.current_index(), 0);
        assert!(carousel.host().iter().all(|s| s.writes == 2));
    }

    #[test]
    fn empty_host_is_a_no_op() {
        let mut carousel = Carousel::new(slides(0));
        carousel.advance(1);
        assert_eq!(carousel.current_index(), 0);
        assert!(carousel.is_empty());

        carousel.advance(-1);
        assert_eq!(carousel.current_index(), -1);
        carousel.advance(1);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn navigation_maps_to_unit_steps() {
        let mut carousel = Carousel::new(slides(2));
        carousel.navigate(Navigation::Next);
        assert_eq!(carousel.current_index(), 1);
        carousel.navigate(Navigation::Next);
        assert_eq!(carousel.current_index(), 0);
        carousel.navigate(Navigation::Previous);
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn slides_are_queried_fresh_each_render() {
        let mut carousel = Carousel::new(slides(1));
        carousel.advance(1);
        assert_eq!(carousel.current_index(), 0);

        carousel.host_mut().push(RecordingSlide::default());
        carousel.advance(1);
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(offsets(&carousel), vec![-100, -90]);
        assert_eq!(carousel.len(), 2);
    }

    #[test]
    fn shrinking_host_wraps_on_next_render() {
        let mut carousel = Carousel::new(slides(4));
        carousel.advance(3);
        carousel.host_mut().truncate(2);
        carousel.render();
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(offsets(&carousel), vec![0, 10]);
    }

    #[test]
    fn length_queries_take_a_shared_borrow() {
        let carousel = Carousel::new(slides(3));
        let view = &carousel;
        assert_eq!(view.len(), 3);
        assert!(!view.is_empty());
        assert_eq!(view.host().slides().len(), 3);
    }

    #[test]
    fn plain_offsets_can_act_as_slides() {
        let carousel = Carousel::new(vec![Offset::default(); 3]);
        let host = carousel.into_host();
        assert_eq!(host, vec![Offset(0), Offset(10), Offset(20)]);
    }
}
