/// Carousel navigation state
///
/// Tracks which slide is showing. By default navigation clamps at the
/// ends; with `looping` it wraps around instead.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    len: usize,
    looping: bool,
}

impl CarouselState {
    pub fn new(len: usize, looping: bool) -> Self {
        Self {
            index: 0,
            len,
            looping,
        }
    }

    /// Index of the visible slide
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn can_go_next(&self) -> bool {
        self.len > 1 && (self.looping || self.index + 1 < self.len)
    }

    pub fn can_go_previous(&self) -> bool {
        self.len > 1 && (self.looping || self.index > 0)
    }

    pub fn next(&mut self) {
        if !self.can_go_next() {
            return;
        }
        self.index = (self.index + 1) % self.len;
    }

    pub fn previous(&mut self) {
        if !self.can_go_previous() {
            return;
        }
        self.index = if self.index == 0 {
            self.len - 1
        } else {
            self.index - 1
        };
    }

    /// Jump directly to a slide (out of range indexes are ignored)
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}
