use thiserror::Error;

/// Horizontal pointer travel (px) a drag must exceed before it navigates.
pub const SWIPE_THRESHOLD: f64 = 50.0;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    #[error("carousel needs at least one slide")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Next,
    Prev,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        match value {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            _ => Self::Other,
        }
    }
}

/// Focused-index state machine shared by every carousel on the page.
///
/// The slide count is fixed at construction, so `focused` is always a valid
/// index in `[0, len)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    len: usize,
    focused: usize,
    hovered: bool,
    drag_origin: Option<f64>,
}

impl Carousel {
    pub fn new(len: usize) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::Empty);
        }
        Ok(Self {
            len,
            focused: 0,
            hovered: false,
            drag_origin: None,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    /// True while the pointer hovers the deck or a drag is in progress;
    /// autoplay holds off until both end.
    pub fn is_paused(&self) -> bool {
        self.hovered || self.is_dragging()
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    pub fn next(&mut self) {
        self.focused = (self.focused + 1) % self.len;
    }

    pub fn prev(&mut self) {
        self.focused = (self.focused + self.len - 1) % self.len;
    }

    pub fn go_to(&mut self, index: usize) {
        self.focused = index % self.len;
    }

    pub fn apply(&mut self, nav: Nav) {
        match nav {
            Nav::Next => self.next(),
            Nav::Prev => self.prev(),
        }
    }

    pub fn drag_start(&mut self, x: f64) {
        self.drag_origin = Some(x);
    }

    /// Finishes a drag at `x`. A leftward swipe past the threshold moves
    /// forward, a rightward one moves back.
    pub fn drag_end(&mut self, x: f64) -> Option<Nav> {
        let origin = self.drag_origin.take()?;
        let delta = x - origin;
        if delta.abs() <= SWIPE_THRESHOLD {
            return None;
        }
        let nav = if delta < 0.0 { Nav::Next } else { Nav::Prev };
        self.apply(nav);
        Some(nav)
    }

    pub fn drag_cancel(&mut self) {
        self.drag_origin = None;
    }

    pub fn handle_key(&mut self, key: Key) -> Option<Nav> {
        let nav = match key {
            Key::ArrowLeft => Nav::Prev,
            Key::ArrowRight => Nav::Next,
            Key::Other => return None,
        };
        self.apply(nav);
        Some(nav)
    }

    /// Where slide `index` sits relative to the focused slide.
    ///
    /// Offsets wrap around the ring and take the shorter way; the slide
    /// directly opposite on an even ring lands on the positive side.
    pub fn placement(&self, index: usize) -> Placement {
        let len = self.len as isize;
        let mut position = (index as isize - self.focused as isize).rem_euclid(len);
        if position > len / 2 {
            position -= len;
        }
        Placement {
            index,
            position,
            distance: position.unsigned_abs(),
            is_focused: position == 0,
        }
    }

    pub fn placements(&self) -> impl Iterator<Item = Placement> + '_ {
        (0..self.len).map(|i| self.placement(i))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub index: usize,
    pub position: isize,
    pub distance: usize,
    pub is_focused: bool,
}

impl Placement {
    fn side(&self) -> f64 {
        self.position.signum() as f64
    }
}

/// Distance-to-style mapping for a carousel section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlidePolicy {
    Experience,
    /// Skips slides more than two steps away from the focus.
    Projects,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlideStyle {
    pub opacity: f64,
    pub scale: f64,
    /// Horizontal offset as a percentage of the slide width.
    pub translate_x: f64,
    pub z_index: i32,
    pub interactive: bool,
    pub rendered: bool,
}

impl SlideStyle {
    fn focused() -> Self {
        Self {
            opacity: 1.0,
            scale: 1.0,
            translate_x: 0.0,
            z_index: 30,
            interactive: true,
            rendered: true,
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: translateX({}%) scale({}); z-index: {}; pointer-events: {};",
            self.opacity,
            self.translate_x,
            self.scale,
            self.z_index,
            if self.interactive { "auto" } else { "none" }
        )
    }
}

impl SlidePolicy {
    pub fn style(&self, placement: Placement) -> SlideStyle {
        if placement.is_focused {
            return SlideStyle::focused();
        }
        let side = placement.side();
        let (opacity, scale, offset, z_index, rendered) = match (self, placement.distance) {
            (Self::Experience, 1) => (0.5, 0.85, 60.0, 20, true),
            (Self::Experience, _) => (0.0, 0.7, 120.0, 10, true),
            (Self::Projects, 1) => (0.6, 0.8, 70.0, 20, true),
            (Self::Projects, 2) => (0.15, 0.6, 130.0, 10, true),
            (Self::Projects, _) => (0.0, 0.5, 160.0, 0, false),
        };
        SlideStyle {
            opacity,
            scale,
            translate_x: side * offset,
            z_index,
            interactive: false,
            rendered,
        }
    }
}
