/// A range of ray parameters or channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }

    /// The displayable color range.
    pub const UNIT: Interval = Interval { min: 0.0, max: 1.0 };

    /// Everything in front of the ray origin.
    pub const FORWARD: Interval = Interval {
        min: 0.0,
        max: f32::INFINITY,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_surrounds() {
        let interval = Interval::new(0.0, 10.0);

        // Exclusive bounds - endpoints NOT included
        assert!(!interval.surrounds(0.0));
        assert!(!interval.surrounds(10.0));

        assert!(interval.surrounds(5.0));
        assert!(interval.surrounds(0.1));
        assert!(!interval.surrounds(-0.1));
    }

    #[test]
    fn test_interval_clamp() {
        let interval = Interval::UNIT;

        assert_eq!(interval.clamp(-5.0), 0.0);
        assert_eq!(interval.clamp(0.25), 0.25);
        assert_eq!(interval.clamp(3.0), 1.0);
    }

    #[test]
    fn test_interval_constants() {
        // Forward excludes the origin itself
        assert!(!Interval::FORWARD.surrounds(0.0));
        assert!(Interval::FORWARD.surrounds(1e-6));
        assert!(Interval::FORWARD.surrounds(1e30));
    }
}
