//! Index state of the full-screen image viewer.

/// Lightbox over a list of `len` images.
///
/// While open the index always satisfies `index < len`; moving past either
/// end is a no-op rather than a wrap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lightbox {
    len: usize,
    index: Option<usize>,
}

impl Lightbox {
    /// Closed lightbox over `len` images.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: None,
        }
    }

    /// Number of images.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Shown image, `None` while closed.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Whether the overlay is visible.
    pub fn is_open(&self) -> bool {
        self.index.is_some()
    }

    /// Open on `index`. Out-of-range indices leave the state unchanged.
    pub fn open(&mut self, index: usize) -> bool {
        if index >= self.len {
            tracing::warn!(index, len = self.len, "lightbox index out of range");
            return false;
        }
        self.index = Some(index);
        true
    }

    /// Jump to `index` while open, e.g. from the thumbnail strip.
    pub fn select(&mut self, index: usize) -> bool {
        if !self.is_open() {
            return false;
        }
        self.open(index)
    }

    /// Hide the overlay.
    pub fn close(&mut self) {
        self.index = None;
    }

    /// Step forward; no-op on the last image or while closed.
    pub fn next(&mut self) -> bool {
        match self.index {
            Some(i) if i + 1 < self.len => {
                self.index = Some(i + 1);
                true
            },
            _ => false,
        }
    }

    /// Step back; no-op on the first image or while closed.
    pub fn prev(&mut self) -> bool {
        match self.index {
            Some(i) if i > 0 => {
                self.index = Some(i - 1);
                true
            },
            _ => false,
        }
    }

    /// Whether [`Lightbox::next`] would move.
    pub fn has_next(&self) -> bool {
        matches!(self.index, Some(i) if i + 1 < self.len)
    }

    /// Whether [`Lightbox::prev`] would move.
    pub fn has_prev(&self) -> bool {
        matches!(self.index, Some(i) if i > 0)
    }

    /// Follow a change of the underlying image list, clamping the index to
    /// the new bounds and closing when the list became empty.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.index = match self.index {
            Some(_) if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => None,
        };
    }

    /// One-based `"current / total"` label while open.
    pub fn position_label(&self) -> Option<String> {
        self.index.map(|i| format!("{} / {}", i + 1, self.len))
    }
}

#[cfg(test)]
mod tests {
    use super::Lightbox;

    #[test]
    fn next_and_prev_stop_at_bounds() {
        let mut lightbox = Lightbox::new(3);
        assert!(lightbox.open(0));

        assert!(!lightbox.prev());
        assert_eq!(lightbox.index(), Some(0));

        assert!(lightbox.next());
        assert!(lightbox.next());
        assert!(!lightbox.next());
        assert_eq!(lightbox.index(), Some(2));
        assert!(!lightbox.has_next());
        assert!(lightbox.has_prev());
    }

    #[test]
    fn open_rejects_out_of_range() {
        let mut lightbox = Lightbox::new(2);
        assert!(!lightbox.open(2));
        assert!(!lightbox.is_open());

        let mut empty = Lightbox::new(0);
        assert!(!empty.open(0));
        assert!(empty.is_empty());
    }

    #[test]
    fn select_only_moves_while_open() {
        let mut lightbox = Lightbox::new(5);
        assert!(!lightbox.select(3));

        lightbox.open(1);
        assert!(lightbox.select(4));
        assert_eq!(lightbox.position_label().as_deref(), Some("5 / 5"));
        assert!(!lightbox.select(9));
        assert_eq!(lightbox.index(), Some(4));
    }

    #[test]
    fn closed_lightbox_ignores_navigation() {
        let mut lightbox = Lightbox::new(4);
        assert!(!lightbox.next());
        assert!(!lightbox.prev());
        assert_eq!(lightbox.position_label(), None);

        lightbox.open(2);
        lightbox.close();
        assert_eq!(lightbox.index(), None);
    }

    #[test]
    fn shrinking_list_clamps_or_closes() {
        let mut lightbox = Lightbox::new(6);
        lightbox.open(5);

        lightbox.set_len(3);
        assert_eq!(lightbox.index(), Some(2));

        lightbox.set_len(0);
        assert!(!lightbox.is_open());
    }

    #[test]
    fn index_stays_in_bounds_under_any_walk() {
        let mut lightbox = Lightbox::new(4);
        lightbox.open(1);
        for step in 0..40 {
            if step % 3 == 0 {
                lightbox.prev();
            } else {
                lightbox.next();
            }
            let index = lightbox.index().expect("stays open");
            assert!(index < lightbox.len());
        }
    }
}
