//! Lightbox navigation state machine.
//!
//! The lightbox pages through an ordered artwork sequence owned by the host
//! page. It stores only an index into that sequence, so every transition that
//! depends on the sequence takes its current length.
//!
//! While open, the index is always in `[0, len - 1]`. Navigation past either
//! end is a no-op; there is no wraparound.

use crate::config::LIGHTBOX_ZOOM_FACTOR;

/// Discrete zoom levels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Zoom {
    /// 1x
    #[default]
    Normal,
    /// 1.5x
    Magnified,
}

impl Zoom {
    pub fn factor(self) -> f64 {
        match self {
            Self::Normal => 1.0,
            Self::Magnified => LIGHTBOX_ZOOM_FACTOR,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Normal => Self::Magnified,
            Self::Magnified => Self::Normal,
        }
    }
}

/// Transient state of an open lightbox.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewing {
    pub index: usize,
    pub zoom: Zoom,
    pub show_info: bool,
    /// Display-only like flag for the current item; never persisted.
    pub liked: bool,
}

impl Viewing {
    fn at(index: usize) -> Self {
        Self {
            index,
            ..Self::default()
        }
    }
}

/// Keys the lightbox responds to while open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxKey {
    Close,
    Previous,
    Next,
    ToggleInfo,
}

impl LightboxKey {
    /// Map a `KeyboardEvent.key` value. Unlisted keys pass through.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Close),
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            "i" => Some(Self::ToggleInfo),
            _ => None,
        }
    }
}

/// Lightbox modal state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lightbox {
    #[default]
    Closed,
    Open(Viewing),
}

impl Lightbox {
    /// Open at `start` within a sequence of `len` items.
    ///
    /// Refuses to open (and returns `false`) when the sequence is empty.
    /// An out-of-range `start` is clamped to the last item. Zoom, info
    /// panel and like flag always start fresh.
    pub fn open(&mut self, len: usize, start: usize) -> bool {
        if len == 0 {
            return false;
        }
        *self = Self::Open(Viewing::at(start.min(len - 1)));
        true
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    #[inline]
    pub fn viewing(&self) -> Option<&Viewing> {
        match self {
            Self::Open(viewing) => Some(viewing),
            Self::Closed => None,
        }
    }

    #[inline]
    pub fn index(&self) -> Option<usize> {
        self.viewing().map(|v| v.index)
    }

    pub fn zoom(&self) -> Zoom {
        self.viewing().map(|v| v.zoom).unwrap_or_default()
    }

    pub fn show_info(&self) -> bool {
        self.viewing().is_some_and(|v| v.show_info)
    }

    pub fn liked(&self) -> bool {
        self.viewing().is_some_and(|v| v.liked)
    }

    pub fn has_previous(&self) -> bool {
        self.index().is_some_and(|i| i > 0)
    }

    pub fn has_next(&self, len: usize) -> bool {
        self.index().is_some_and(|i| i + 1 < len)
    }

    /// Advance to the next item. Returns `true` if the index moved.
    pub fn next(&mut self, len: usize) -> bool {
        if !self.has_next(len) {
            return false;
        }
        self.step(|i| i + 1)
    }

    /// Go back to the previous item. Returns `true` if the index moved.
    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.step(|i| i - 1)
    }

    pub fn toggle_zoom(&mut self) {
        if let Self::Open(v) = self {
            v.zoom = v.zoom.toggled();
        }
    }

    pub fn toggle_info(&mut self) {
        if let Self::Open(v) = self {
            v.show_info = !v.show_info;
        }
    }

    pub fn toggle_like(&mut self) {
        if let Self::Open(v) = self {
            v.liked = !v.liked;
        }
    }

    /// Re-validate the index after the underlying sequence changed length.
    ///
    /// Closes when the sequence became empty; otherwise clamps the index.
    pub fn sync_len(&mut self, len: usize) {
        if let Self::Open(v) = self {
            if len == 0 {
                *self = Self::Closed;
            } else if v.index >= len {
                v.index = len - 1;
                v.zoom = Zoom::Normal;
                v.liked = false;
            }
        }
    }

    /// Apply a key press. Returns `true` if the key was consumed.
    pub fn handle_key(&mut self, key: &str, len: usize) -> bool {
        if !self.is_open() {
            return false;
        }
        match LightboxKey::from_key(key) {
            Some(LightboxKey::Close) => self.close(),
            Some(LightboxKey::Previous) => {
                self.previous();
            }
            Some(LightboxKey::Next) => {
                self.next(len);
            }
            Some(LightboxKey::ToggleInfo) => self.toggle_info(),
            None => return false,
        }
        true
    }

    // Moving to another item resets zoom; the like flag belongs to the
    // item that was on screen.
    fn step(&mut self, f: impl FnOnce(usize) -> usize) -> bool {
        match self {
            Self::Open(v) => {
                v.index = f(v.index);
                v.zoom = Zoom::Normal;
                v.liked = false;
                true
            }
            Self::Closed => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_at_every_valid_index() {
        for len in 1..6 {
            for i in 0..len {
                let mut lb = Lightbox::default();
                assert!(lb.open(len, i));
                assert_eq!(lb.index(), Some(i));
                assert_eq!(lb.zoom(), Zoom::Normal);
                assert!(!lb.show_info());
            }
        }
    }

    #[test]
    fn test_open_empty_refuses() {
        let mut lb = Lightbox::default();
        assert!(!lb.open(0, 0));
        assert!(!lb.is_open());
        assert_eq!(lb.index(), None);
    }

    #[test]
    fn test_open_clamps_start() {
        let mut lb = Lightbox::default();
        assert!(lb.open(3, 10));
        assert_eq!(lb.index(), Some(2));
    }

    #[test]
    fn test_no_wraparound_at_ends() {
        let mut lb = Lightbox::default();
        lb.open(4, 0);
        assert!(!lb.previous());
        assert_eq!(lb.index(), Some(0));

        lb.open(4, 3);
        assert!(!lb.next(4));
        assert_eq!(lb.index(), Some(3));
    }

    #[test]
    fn test_next_then_previous_round_trips() {
        let len = 6;
        for start in 1..len - 1 {
            let mut lb = Lightbox::default();
            lb.open(len, start);
            assert!(lb.next(len));
            assert!(lb.previous());
            assert_eq!(lb.index(), Some(start));
        }
    }

    #[test]
    fn test_five_item_scenario() {
        let mut lb = Lightbox::default();
        lb.open(5, 2);
        lb.next(5);
        assert_eq!(lb.index(), Some(3));
        lb.next(5);
        assert_eq!(lb.index(), Some(4));
        lb.next(5);
        assert_eq!(lb.index(), Some(4));
    }

    #[test]
    fn test_toggle_zoom_twice_is_identity() {
        let mut lb = Lightbox::default();
        lb.open(2, 0);
        lb.toggle_zoom();
        assert_eq!(lb.zoom(), Zoom::Magnified);
        assert_eq!(lb.zoom().factor(), 1.5);
        lb.toggle_zoom();
        assert_eq!(lb.zoom(), Zoom::Normal);
        assert_eq!(lb.zoom().factor(), 1.0);
    }

    #[test]
    fn test_navigation_resets_zoom_but_not_info() {
        let mut lb = Lightbox::default();
        lb.open(3, 0);
        lb.toggle_zoom();
        lb.toggle_info();
        lb.next(3);
        assert_eq!(lb.zoom(), Zoom::Normal);
        assert!(lb.show_info());
    }

    #[test]
    fn test_reopen_resets_transient_state() {
        let mut lb = Lightbox::default();
        lb.open(3, 1);
        lb.toggle_zoom();
        lb.toggle_info();
        lb.toggle_like();
        lb.close();
        assert!(!lb.is_open());

        lb.open(3, 1);
        assert_eq!(lb.zoom(), Zoom::Normal);
        assert!(!lb.show_info());
        assert!(!lb.liked());
    }

    #[test]
    fn test_like_is_per_item() {
        let mut lb = Lightbox::default();
        lb.open(3, 0);
        lb.toggle_like();
        assert!(lb.liked());
        lb.next(3);
        assert!(!lb.liked());
    }

    #[test]
    fn test_toggles_ignored_when_closed() {
        let mut lb = Lightbox::default();
        lb.toggle_zoom();
        lb.toggle_info();
        lb.toggle_like();
        assert!(!lb.next(3));
        assert!(!lb.previous());
        assert_eq!(lb, Lightbox::Closed);
    }

    #[test]
    fn test_keyboard_contract() {
        let mut lb = Lightbox::default();
        assert!(!lb.handle_key("ArrowRight", 3));

        lb.open(3, 1);
        assert!(lb.handle_key("ArrowRight", 3));
        assert_eq!(lb.index(), Some(2));
        assert!(lb.handle_key("ArrowLeft", 3));
        assert_eq!(lb.index(), Some(1));
        assert!(lb.handle_key("i", 3));
        assert!(lb.show_info());
        assert!(!lb.handle_key("I", 3));
        assert!(!lb.handle_key("Enter", 3));
        assert!(lb.handle_key("Escape", 3));
        assert!(!lb.is_open());
    }

    #[test]
    fn test_sync_len_clamps_or_closes() {
        let mut lb = Lightbox::default();
        lb.open(5, 4);
        lb.sync_len(3);
        assert_eq!(lb.index(), Some(2));

        lb.sync_len(3);
        assert_eq!(lb.index(), Some(2));

        lb.sync_len(0);
        assert!(!lb.is_open());
    }

    #[test]
    fn test_has_previous_and_next() {
        let mut lb = Lightbox::default();
        assert!(!lb.has_previous());
        assert!(!lb.has_next(3));
        lb.open(3, 1);
        assert!(lb.has_previous());
        assert!(lb.has_next(3));
        lb.open(1, 0);
        assert!(!lb.has_previous());
        assert!(!lb.has_next(1));
    }
}
