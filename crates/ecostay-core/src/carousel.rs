//! Per-hotel image browsing with wraparound.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    images: Vec<String>,
    index: usize,
}

impl Carousel {
    /// Start on the first image.
    pub fn new(images: Vec<String>) -> Self {
        Self { images, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn current(&self) -> Option<&str> {
        self.images.get(self.index).map(String::as_str)
    }

    /// Navigation controls are only offered with two or more images.
    pub fn has_controls(&self) -> bool {
        self.images.len() > 1
    }

    pub fn next(&mut self) {
        if self.has_controls() {
            self.index = (self.index + 1) % self.images.len();
        }
    }

    pub fn previous(&mut self) {
        if self.has_controls() {
            let len = self.images.len();
            self.index = (self.index + len - 1) % len;
        }
    }

    /// "Slide 2 of 5" style label, `None` without images.
    pub fn position_label(&self) -> Option<String> {
        (!self.is_empty()).then(|| format!("Slide {} of {}", self.index + 1, self.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three() -> Carousel {
        Carousel::new(vec!["a".into(), "b".into(), "c".into()])
    }

    #[test]
    fn test_next_cycles_back_to_start() {
        let mut carousel = three();
        carousel.next();
        carousel.next();
        assert_eq!(carousel.current(), Some("c"));
        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_previous_wraps_to_end() {
        let mut carousel = three();
        carousel.previous();
        assert_eq!(carousel.index(), 2);
        assert_eq!(carousel.position_label().as_deref(), Some("Slide 3 of 3"));
    }

    #[test]
    fn test_single_image_has_no_controls() {
        let mut carousel = Carousel::new(vec!["only".into()]);
        assert!(!carousel.has_controls());
        carousel.next();
        carousel.previous();
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.current(), Some("only"));
    }

    #[test]
    fn test_empty_carousel() {
        let mut carousel = Carousel::new(Vec::new());
        carousel.next();
        carousel.previous();
        assert_eq!(carousel.current(), None);
        assert_eq!(carousel.position_label(), None);
        assert!(!carousel.has_controls());
    }
}
