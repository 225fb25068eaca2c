use std::str::FromStr;

use super::{AnimationError, Pose, Tween};

/// Where a tween is placed on a [`Timeline`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    /// Right after the previously added tween.
    End,
    /// Offset from the end of the previously added tween ("-=0.8", "+=0.2").
    Relative(f64),
    /// Absolute time after the timeline delay.
    At(f64),
}

impl FromStr for Position {
    type Err = AnimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || AnimationError::InvalidPosition(s.to_string());
        if s.is_empty() || s == ">" {
            return Ok(Self::End);
        }
        if let Some(rest) = s.strip_prefix("-=") {
            return rest.parse::<f64>().map(|d| Self::Relative(-d)).map_err(|_| invalid());
        }
        if let Some(rest) = s.strip_prefix("+=") {
            return rest.parse::<f64>().map(Self::Relative).map_err(|_| invalid());
        }
        s.parse::<f64>().map(Self::At).map_err(|_| invalid())
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    target: usize,
    start: f64,
    tween: Tween,
}

/// Tweens for a set of targets (indices into the elements a player binds),
/// placed on a shared clock.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    delay: f64,
    cursor: f64,
    entries: Vec<Entry>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(delay: f64) -> Self {
        Self {
            delay,
            cursor: delay,
            entries: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn add(mut self, target: usize, tween: Tween, position: Position) -> Self {
        let start = match position {
            Position::End => self.cursor,
            Position::Relative(d) => (self.cursor + d).max(0.0),
            Position::At(s) => self.delay + s,
        };
        self.cursor = start + tween.first_cycle_end();
        self.entries.push(Entry {
            target,
            start,
            tween,
        });
        self
    }

    /// Starts targets `0..count` one after another, `each` seconds apart,
    /// beginning where the previous tween ended.
    pub fn stagger(mut self, count: usize, each: f64, make: impl Fn(usize) -> Tween) -> Self {
        let base = self.cursor;
        let mut end = base;
        for i in 0..count {
            let tween = make(i);
            let start = base + each * i as f64;
            end = end.max(start + tween.first_cycle_end());
            self.entries.push(Entry {
                target: i,
                start,
                tween,
            });
        }
        self.cursor = end;
        self
    }

    /// Start time of every entry, in insertion order.
    pub fn starts(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.start).collect()
    }

    /// Number of targets the timeline animates.
    pub fn target_count(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.target + 1)
            .max()
            .unwrap_or(0)
    }

    /// Total length in seconds, `None` if anything repeats forever.
    pub fn duration(&self) -> Option<f64> {
        self.entries.iter().try_fold(self.delay, |acc, e| {
            e.tween.end_time().map(|end| acc.max(e.start + end))
        })
    }

    /// Pose of `target` at time `t`. Before anything has started the first
    /// tween's `from` pose holds; after that the latest started tween wins.
    pub fn sample(&self, target: usize, t: f64) -> Option<Pose> {
        let mut first = None;
        let mut current: Option<&Entry> = None;
        for entry in self.entries.iter().filter(|e| e.target == target) {
            if first.is_none() {
                first = Some(entry);
            }
            if entry.tween.has_started(t - entry.start)
                && current.is_none_or(|c| entry.start >= c.start)
            {
                current = Some(entry);
            }
        }
        match current {
            Some(entry) => Some(entry.tween.sample(t - entry.start)),
            None => first.map(|entry| entry.tween.from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Ease;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn intro(duration: f64) -> Tween {
        Tween::new(Pose::IDENTITY.opacity(0.0).y(100.0), Pose::IDENTITY, duration)
    }

    #[test]
    fn test_position_parse() {
        assert_eq!("-=0.8".parse::<Position>(), Ok(Position::Relative(-0.8)));
        assert_eq!("+=0.2".parse::<Position>(), Ok(Position::Relative(0.2)));
        assert_eq!("1.5".parse::<Position>(), Ok(Position::At(1.5)));
        assert_eq!(">".parse::<Position>(), Ok(Position::End));
        assert!("-=abc".parse::<Position>().is_err());
        assert!("soon".parse::<Position>().is_err());
    }

    #[test]
    fn test_hero_intro_offsets() {
        let tl = Timeline::with_delay(0.5)
            .add(0, intro(1.2), Position::End)
            .add(1, intro(1.0), "-=0.8".parse().unwrap())
            .add(2, intro(1.0), "-=0.6".parse().unwrap())
            .add(3, intro(1.0), "-=0.7".parse().unwrap());
        let starts = tl.starts();
        let expected = [0.5, 0.9, 1.3, 1.6];
        assert_eq!(starts.len(), expected.len());
        for (got, want) in starts.iter().zip(expected) {
            assert!(close(*got, want), "{got} != {want}");
        }
        assert!(close(tl.duration().unwrap(), 2.6));
        assert_eq!(tl.target_count(), 4);

        // everything is hidden before the delay elapses
        for target in 0..4 {
            assert_eq!(tl.sample(target, 0.0).unwrap().opacity, 0.0);
        }
        assert_eq!(tl.sample(3, 3.0), Some(Pose::IDENTITY));
        assert_eq!(tl.sample(4, 1.0), None);
    }

    #[test]
    fn test_stagger() {
        let tl = Timeline::new().stagger(3, 0.2, |i| {
            Tween::new(
                Pose::IDENTITY.width(0.0),
                Pose::IDENTITY.width(50.0 + 10.0 * i as f64),
                1.0,
            )
            .ease(Ease::Linear)
        });
        let starts = tl.starts();
        assert!(close(starts[1], 0.2));
        assert!(close(starts[2], 0.4));
        assert!(close(tl.duration().unwrap(), 1.4));
        assert_eq!(tl.sample(2, 0.3).unwrap().width, Some(0.0));
        assert_eq!(tl.sample(2, 5.0).unwrap().width, Some(70.0));
    }

    #[test]
    fn test_latest_started_entry_wins() {
        let tl = Timeline::new()
            .add(0, Tween::new(Pose::IDENTITY, Pose::IDENTITY.x(100.0), 1.0).ease(Ease::Linear), Position::End)
            .add(0, Tween::new(Pose::IDENTITY.x(100.0), Pose::IDENTITY.x(0.0), 1.0).ease(Ease::Linear), Position::End);
        assert_eq!(tl.sample(0, 0.5).unwrap().x, 50.0);
        assert_eq!(tl.sample(0, 1.5).unwrap().x, 50.0);
        assert_eq!(tl.sample(0, 3.0).unwrap().x, 0.0);
    }

    #[test]
    fn test_infinite_duration() {
        let tl = Timeline::new().add(
            0,
            Tween::new(Pose::IDENTITY, Pose::IDENTITY.rotate(360.0), 4.0).repeat_forever(),
            Position::At(0.0),
        );
        assert_eq!(tl.duration(), None);
        assert!(Timeline::new().is_empty());
        assert_eq!(Timeline::new().duration(), Some(0.0));
    }
}
