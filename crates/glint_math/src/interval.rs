/// A closed range of ray parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns the size of the interval (max - min).
    pub fn size(&self) -> f64 {
        self.max - self.min
    }

    /// Smallest interval covering both `self` and `x`.
    pub fn include(&self, x: f64) -> Interval {
        Interval::new(self.min.min(x), self.max.max(x))
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.min, self.max)
    }

    /// Everything in front of a ray origin, origin excluded via `surrounds`.
    pub const FORWARD: Interval = Interval {
        min: 0.0,
        max: f64::INFINITY,
    };

    /// An empty interval (min > max, contains nothing).
    pub const EMPTY: Interval = Interval {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_size() {
        assert_eq!(Interval::new(2.0, 7.0).size(), 5.0);
        assert_eq!(Interval::new(-5.0, 5.0).size(), 10.0);
    }

    #[test]
    fn test_interval_include() {
        let range = [3.0, -1.0, 7.5, 2.0]
            .into_iter()
            .fold(Interval::EMPTY, |r, x| r.include(x));

        assert_eq!(range, Interval::new(-1.0, 7.5));
    }

    #[test]
    fn test_interval_surrounds() {
        let interval = Interval::new(0.0, 10.0);

        // Exclusive bounds - endpoints NOT included
        assert!(!interval.surrounds(0.0));
        assert!(!interval.surrounds(10.0));
        assert!(interval.surrounds(5.0));
        assert!(!interval.surrounds(-0.1));
    }

    #[test]
    fn test_interval_forward() {
        assert!(!Interval::FORWARD.surrounds(0.0));
        assert!(!Interval::FORWARD.surrounds(-1e-9));
        assert!(Interval::FORWARD.surrounds(1e-9));
        assert!(Interval::FORWARD.surrounds(1e300));
    }

    #[test]
    fn test_interval_clamp() {
        let interval = Interval::new(0.0, 10.0);

        assert_eq!(interval.clamp(-5.0), 0.0);
        assert_eq!(interval.clamp(5.0), 5.0);
        assert_eq!(interval.clamp(15.0), 10.0);
    }

    #[test]
    fn test_interval_empty() {
        let empty = Interval::EMPTY;

        assert!(empty.min > empty.max);
        assert_eq!(empty.include(2.0), Interval::new(2.0, 2.0));
        assert!(!empty.surrounds(0.0));
    }
}
