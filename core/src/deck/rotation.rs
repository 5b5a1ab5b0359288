use std::time::Duration;

/// Cyclic highlight over a testimonial list, advanced by a periodic timer.
///
/// A rotation lives only as long as the section that created it; dropping
/// it is how its timer is cancelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestimonialRotation {
    section: usize,
    current: usize,
    len: usize,
    interval: Duration,
}

impl TestimonialRotation {
    /// Returns `None` for an empty list.
    pub fn new(section: usize, len: usize, interval: Duration) -> Option<Self> {
        if len == 0 {
            return None;
        }
        Some(Self {
            section,
            current: 0,
            len,
            interval,
        })
    }

    pub fn tick(&mut self) -> usize {
        self.current = (self.current + 1) % self.len;
        self.current
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn section(&self) -> usize {
        self.section
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_wraps_back_to_first() {
        let mut rotation = TestimonialRotation::new(0, 3, Duration::from_secs(5)).unwrap();
        assert_eq!(rotation.tick(), 1);
        assert_eq!(rotation.tick(), 2);
        assert_eq!(rotation.tick(), 0);
    }

    #[test]
    fn empty_list_has_no_rotation() {
        assert!(TestimonialRotation::new(0, 0, Duration::from_secs(5)).is_none());
    }
}
