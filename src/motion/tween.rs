use super::{Ease, Pose};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    #[default]
    Once,
    Forever,
}

/// Interpolation from one pose to another over `duration` seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: Pose,
    pub to: Pose,
    pub duration: f64,
    pub delay: f64,
    pub ease: Ease,
    pub repeat: Repeat,
    /// On repeat, every other cycle runs backwards.
    pub yoyo: bool,
}

impl Tween {
    pub fn new(from: Pose, to: Pose, duration: f64) -> Self {
        Self {
            from,
            to,
            duration,
            delay: 0.0,
            ease: Ease::default(),
            repeat: Repeat::Once,
            yoyo: false,
        }
    }

    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn repeat_forever(mut self) -> Self {
        self.repeat = Repeat::Forever;
        self
    }

    pub fn yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    /// Local time at which the tween settles, `None` when it never does.
    pub fn end_time(&self) -> Option<f64> {
        match self.repeat {
            Repeat::Once => Some(self.delay + self.duration),
            Repeat::Forever => None,
        }
    }

    /// End of the first cycle, finite even for repeating tweens.
    pub fn first_cycle_end(&self) -> f64 {
        self.delay + self.duration
    }

    pub fn has_started(&self, t: f64) -> bool {
        t >= self.delay
    }

    /// Eased progress in `[0, 1]` at local time `t`.
    pub fn progress(&self, t: f64) -> f64 {
        let local = t - self.delay;
        if local <= 0.0 {
            return self.ease.apply(0.0);
        }
        if self.duration <= 0.0 {
            return 1.0;
        }
        let cycles = local / self.duration;
        let linear = match self.repeat {
            Repeat::Once => cycles.min(1.0),
            Repeat::Forever => {
                let cycle = cycles.floor();
                let frac = cycles - cycle;
                if self.yoyo && (cycle as u64) % 2 == 1 {
                    1.0 - frac
                } else {
                    frac
                }
            }
        };
        self.ease.apply(linear)
    }

    pub fn sample(&self, t: f64) -> Pose {
        self.from.lerp(&self.to, self.progress(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rise() -> Tween {
        Tween::new(Pose::IDENTITY.opacity(0.0).y(100.0), Pose::IDENTITY, 1.0).ease(Ease::Linear)
    }

    #[test]
    fn test_sample_once() {
        let tween = rise().delay(0.5);
        assert_eq!(tween.sample(0.0), tween.from);
        assert_eq!(tween.sample(0.5), tween.from);
        assert_eq!(tween.sample(1.0).y, 50.0);
        assert_eq!(tween.sample(1.5), tween.to);
        assert_eq!(tween.sample(10.0), tween.to);
        assert_eq!(tween.end_time(), Some(1.5));
    }

    #[test]
    fn test_yoyo_forever() {
        let tween = Tween::new(Pose::IDENTITY, Pose::IDENTITY.y(-30.0), 4.0)
            .ease(Ease::Linear)
            .repeat_forever()
            .yoyo(true);
        assert_eq!(tween.end_time(), None);
        assert_eq!(tween.sample(2.0).y, -15.0);
        assert_eq!(tween.sample(4.0).y, -30.0);
        // second cycle runs back towards the start
        assert_eq!(tween.sample(5.0).y, -22.5);
        assert_eq!(tween.sample(8.0).y, 0.0);
        assert_eq!(tween.sample(9.0).y, -7.5);
    }

    #[test]
    fn test_repeat_without_yoyo_restarts() {
        let tween = Tween::new(Pose::IDENTITY, Pose::IDENTITY.x(10.0), 1.0)
            .ease(Ease::Linear)
            .repeat_forever();
        assert_eq!(tween.sample(0.25).x, 2.5);
        assert_eq!(tween.sample(1.25).x, 2.5);
    }

    #[test]
    fn test_zero_duration_jumps_to_end() {
        let tween = Tween::new(Pose::IDENTITY, Pose::IDENTITY.scale(2.0), 0.0);
        assert_eq!(tween.sample(0.0).scale, 1.0);
        assert_eq!(tween.sample(0.01).scale, 2.0);
    }
}
