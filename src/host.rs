use std::fmt;

/// Horizontal translation of a slide, in percent of the slide's own width.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, PartialOrd, Ord, Hash)]
pub struct Offset(pub i64);

impl Offset {
    pub fn percent(self) -> i64 {
        self.0
    }

    /// Offset in pixels for an element `width` pixels wide.
    pub fn to_pixels(self, width: f32) -> f32 {
        width * self.0 as f32 / 100.0
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translateX({}%)", self.0)
    }
}

pub trait SlideElement {
    fn set_offset(&mut self, offset: Offset);
}

/// Owner of the slide collection.
///
/// The carousel asks for the slides again on every render, so a host is free
/// to add or remove elements between calls.
pub trait SlideHost {
    type Slide: SlideElement;

    fn slides(&self) -> &[Self::Slide];

    fn slides_mut(&mut self) -> &mut [Self::Slide];
}

impl<S: SlideElement> SlideHost for Vec<S> {
    type Slide = S;

    fn slides(&self) -> &[S] {
        self.as_slice()
    }

    fn slides_mut(&mut self) -> &mut [S] {
        self.as_mut_slice()
    }
}

impl SlideElement for Offset {
    fn set_offset(&mut self, offset: Offset) {
        *self = offset;
    }
}
