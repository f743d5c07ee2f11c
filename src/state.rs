#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Navigation {
    Next,     // Move forward one slide
    Previous, // Move backward one slide
}

impl Navigation {
    pub fn step(self) -> i64 {
        match self {
            Navigation::Next => 1,
            Navigation::Previous => -1,
        }
    }
}
