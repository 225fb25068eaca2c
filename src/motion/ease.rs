use std::str::FromStr;

use super::AnimationError;

/// Easing curves, named the way animation libraries usually name them.
/// `power2` is cubic and `power3` is quartic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    Linear,
    Power2Out,
    Power2InOut,
    #[default]
    Power3Out,
}

impl Ease {
    /// Maps linear progress `t` in `[0, 1]` onto the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Power2Out => 1.0 - (1.0 - t).powi(3),
            Self::Power2InOut => {
                if t < 0.5 {
                    4.0 * t.powi(3)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Self::Power3Out => 1.0 - (1.0 - t).powi(4),
        }
    }
}

impl FromStr for Ease {
    type Err = AnimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" | "linear" => Ok(Self::Linear),
            "power2.out" => Ok(Self::Power2Out),
            "power2.inOut" => Ok(Self::Power2InOut),
            "power3.out" => Ok(Self::Power3Out),
            other => Err(AnimationError::UnknownEase(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 4] = [
        Ease::Linear,
        Ease::Power2Out,
        Ease::Power2InOut,
        Ease::Power3Out,
    ];

    #[test]
    fn test_endpoints() {
        for ease in ALL {
            assert!(ease.apply(0.0).abs() < 1e-12, "{ease:?} at 0");
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?} at 1");
        }
    }

    #[test]
    fn test_monotonic() {
        for ease in ALL {
            let mut prev = 0.0;
            for i in 1..=100 {
                let v = ease.apply(i as f64 / 100.0);
                assert!(v >= prev, "{ease:?} decreased at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn test_shapes() {
        assert_eq!(Ease::Power2InOut.apply(0.5), 0.5);
        assert!(Ease::Power3Out.apply(0.5) > Ease::Power2Out.apply(0.5));
        assert!(Ease::Power2Out.apply(0.5) > Ease::Linear.apply(0.5));
        // out of range input is clamped
        assert_eq!(Ease::Linear.apply(1.5), 1.0);
        assert_eq!(Ease::Linear.apply(-0.5), 0.0);
    }

    #[test]
    fn test_parse() {
        assert_eq!("power3.out".parse::<Ease>(), Ok(Ease::Power3Out));
        assert_eq!("power2.inOut".parse::<Ease>(), Ok(Ease::Power2InOut));
        assert_eq!("none".parse::<Ease>(), Ok(Ease::Linear));
        assert_eq!(
            "elastic".parse::<Ease>(),
            Err(AnimationError::UnknownEase("elastic".to_string()))
        );
    }
}
