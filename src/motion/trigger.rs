use std::str::FromStr;

use super::AnimationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Center,
    Bottom,
}

impl FromStr for Edge {
    type Err = AnimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "center" => Ok(Self::Center),
            "bottom" => Ok(Self::Bottom),
            other => Err(AnimationError::InvalidAnchor(other.to_string())),
        }
    }
}

/// Pairs an element edge with a line in the viewport, e.g. "top 80%":
/// the element's top reaching 80% of the viewport height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub edge: Edge,
    /// Viewport line as a fraction of its height, measured from the top.
    pub viewport: f64,
}

impl Anchor {
    pub const fn new(edge: Edge, viewport: f64) -> Self {
        Self { edge, viewport }
    }

    /// Whether the element edge has scrolled up to (or past) the viewport line.
    pub fn reached(&self, rect_top: f64, rect_bottom: f64, viewport_height: f64) -> bool {
        let edge = match self.edge {
            Edge::Top => rect_top,
            Edge::Center => (rect_top + rect_bottom) / 2.0,
            Edge::Bottom => rect_bottom,
        };
        edge <= self.viewport * viewport_height
    }
}

impl FromStr for Anchor {
    type Err = AnimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AnimationError::InvalidAnchor(s.to_string());
        let mut parts = s.split_whitespace();
        let (edge, line) = match (parts.next(), parts.next(), parts.next()) {
            (Some(edge), Some(line), None) => (edge, line),
            _ => return Err(invalid()),
        };
        let edge = edge.parse::<Edge>().map_err(|_| invalid())?;
        let viewport = match line {
            "top" => 0.0,
            "center" => 0.5,
            "bottom" => 1.0,
            pct => pct
                .strip_suffix('%')
                .and_then(|n| n.parse::<f64>().ok())
                .map(|n| n / 100.0)
                .ok_or_else(invalid)?,
        };
        Ok(Self { edge, viewport })
    }
}

/// Where the trigger element sits relative to its start and end lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Region {
    #[default]
    Before,
    Active,
    After,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Play,
    Pause,
    Resume,
    Reverse,
    Restart,
    Reset,
    Complete,
    None,
}

impl FromStr for Action {
    type Err = AnimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "play" => Ok(Self::Play),
            "pause" => Ok(Self::Pause),
            "resume" => Ok(Self::Resume),
            "reverse" => Ok(Self::Reverse),
            "restart" => Ok(Self::Restart),
            "reset" => Ok(Self::Reset),
            "complete" => Ok(Self::Complete),
            "none" => Ok(Self::None),
            other => Err(AnimationError::InvalidToggleActions(other.to_string())),
        }
    }
}

/// Actions for entering, leaving, entering back and leaving back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleActions {
    pub on_enter: Action,
    pub on_leave: Action,
    pub on_enter_back: Action,
    pub on_leave_back: Action,
}

impl FromStr for ToggleActions {
    type Err = AnimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let actions = s
            .split_whitespace()
            .map(str::parse::<Action>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| AnimationError::InvalidToggleActions(s.to_string()))?;
        match actions[..] {
            [on_enter, on_leave, on_enter_back, on_leave_back] => Ok(Self {
                on_enter,
                on_leave,
                on_enter_back,
                on_leave_back,
            }),
            _ => Err(AnimationError::InvalidToggleActions(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTrigger {
    pub start: Anchor,
    pub end: Anchor,
    pub actions: ToggleActions,
}

impl Default for ScrollTrigger {
    /// "top 80%" to "bottom 20%", "play none none reverse".
    fn default() -> Self {
        Self {
            start: Anchor::new(Edge::Top, 0.8),
            end: Anchor::new(Edge::Bottom, 0.2),
            actions: ToggleActions {
                on_enter: Action::Play,
                on_leave: Action::None,
                on_enter_back: Action::None,
                on_leave_back: Action::Reverse,
            },
        }
    }
}

impl ScrollTrigger {
    pub fn region(&self, rect_top: f64, rect_bottom: f64, viewport_height: f64) -> Region {
        if !self.start.reached(rect_top, rect_bottom, viewport_height) {
            Region::Before
        } else if self.end.reached(rect_top, rect_bottom, viewport_height) {
            Region::After
        } else {
            Region::Active
        }
    }

    /// Actions to run when the element moves from `prev` to `next`. A jump
    /// across the whole range fires both crossings in order.
    pub fn transition(&self, prev: Region, next: Region) -> Vec<Action> {
        let a = &self.actions;
        let fired = match (prev, next) {
            (Region::Before, Region::Active) => vec![a.on_enter],
            (Region::Active, Region::After) => vec![a.on_leave],
            (Region::After, Region::Active) => vec![a.on_enter_back],
            (Region::Active, Region::Before) => vec![a.on_leave_back],
            (Region::Before, Region::After) => vec![a.on_enter, a.on_leave],
            (Region::After, Region::Before) => vec![a.on_enter_back, a.on_leave_back],
            _ => vec![],
        };
        fired.into_iter().filter(|a| *a != Action::None).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_matches_default() {
        let trigger = ScrollTrigger {
            start: "top 80%".parse().unwrap(),
            end: "bottom 20%".parse().unwrap(),
            actions: "play none none reverse".parse().unwrap(),
        };
        assert_eq!(trigger, ScrollTrigger::default());
    }

    #[test]
    fn test_parse_errors() {
        assert!("top".parse::<Anchor>().is_err());
        assert!("middle 50%".parse::<Anchor>().is_err());
        assert!("top eighty".parse::<Anchor>().is_err());
        assert_eq!("center center".parse::<Anchor>(), Ok(Anchor::new(Edge::Center, 0.5)));
        assert!("play none".parse::<ToggleActions>().is_err());
        assert!("play none none rewind".parse::<ToggleActions>().is_err());
    }

    #[test]
    fn test_regions() {
        let trigger = ScrollTrigger::default();
        let vh = 1000.0;
        // section still below the 80% line
        assert_eq!(trigger.region(900.0, 1500.0, vh), Region::Before);
        assert_eq!(trigger.region(800.0, 1400.0, vh), Region::Active);
        assert_eq!(trigger.region(-300.0, 300.0, vh), Region::Active);
        // bottom scrolled above the 20% line
        assert_eq!(trigger.region(-500.0, 150.0, vh), Region::After);
    }

    #[test]
    fn test_transitions() {
        let trigger = ScrollTrigger::default();
        assert_eq!(
            trigger.transition(Region::Before, Region::Active),
            vec![Action::Play]
        );
        assert!(trigger.transition(Region::Active, Region::After).is_empty());
        assert!(trigger.transition(Region::After, Region::Active).is_empty());
        assert_eq!(
            trigger.transition(Region::Active, Region::Before),
            vec![Action::Reverse]
        );
        assert_eq!(
            trigger.transition(Region::Before, Region::After),
            vec![Action::Play]
        );
        assert_eq!(
            trigger.transition(Region::After, Region::Before),
            vec![Action::Reverse]
        );
        assert!(trigger.transition(Region::Active, Region::Active).is_empty());
    }
}
