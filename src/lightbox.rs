//! State machine of the homepage lightbox.
//!
//! `static/js/lightbox.js` implements the same transitions against the DOM.
//! Keep the two in step when either changes.

/// Where a click inside the open modal landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Backdrop,
    Content,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Lightbox {
    #[default]
    Closed,
    Open { media: Vec<String>, index: usize },
}

impl Lightbox {
    pub fn new() -> Self {
        Self::Closed
    }

    /// Thumbnail activated. Always starts at the first item; an empty list
    /// has nothing to show and leaves the lightbox closed.
    pub fn open(&mut self, media: Vec<String>) {
        *self = if media.is_empty() {
            Self::Closed
        } else {
            Self::Open { media, index: 0 }
        };
    }

    pub fn next(&mut self) {
        if let Self::Open { media, index } = self {
            *index = (*index + 1) % media.len();
        }
    }

    pub fn prev(&mut self) {
        if let Self::Open { media, index } = self {
            *index = (*index + media.len() - 1) % media.len();
        }
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    /// Clicks close the modal only when they hit the backdrop itself.
    pub fn click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Backdrop {
            self.close();
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Open { index, .. } => Some(*index),
            Self::Closed => None,
        }
    }

    pub fn current(&self) -> Option<&str> {
        match self {
            Self::Open { media, index } => media.get(*index).map(String::as_str),
            Self::Closed => None,
        }
    }

    /// Prev/next controls are hidden unless there is something to page to.
    pub fn shows_navigation(&self) -> bool {
        matches!(self, Self::Open { media, .. } if media.len() > 1)
    }
}
