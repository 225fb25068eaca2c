//! The timelines each section plays, kept apart from the components so they
//! build and test without a browser.

use crate::content::{CONTACT_INFO, PARTICLE_POSITIONS, SKILLS};
use crate::motion::{Ease, Pose, Position, Timeline, Tween};

pub const PARTICLE_OPACITY: f64 = 0.6;

/// Pose every hero intro element holds until its tween starts. The server
/// renders it inline so the text never flashes before hydration.
pub const INTRO_START: Pose = Pose::IDENTITY.opacity(0.0).y(100.0);

fn rise(duration: f64) -> Tween {
    Tween::new(INTRO_START, Pose::IDENTITY, duration).ease(Ease::Power3Out)
}

/// Title, subtitle, tagline and buttons rising in, overlapping each other.
pub fn intro_timeline() -> Timeline {
    Timeline::with_delay(0.5)
        .add(0, rise(1.2), Position::End)
        .add(1, rise(1.0), Position::Relative(-0.8))
        .add(2, rise(1.0), Position::Relative(-0.6))
        .add(3, rise(1.0), Position::Relative(-0.7))
}

fn particle_drift(i: usize) -> Tween {
    let n = i as f64;
    let side = if i % 2 == 0 { 1.0 } else { -1.0 };
    let base = Pose::IDENTITY.opacity(PARTICLE_OPACITY);
    Tween::new(
        base,
        base.y(-100.0).x(side * (50.0 + n * 10.0)).rotate(n * 24.0),
        3.0 + (i % 3) as f64,
    )
    .ease(Ease::Power2Out)
    .delay(n * 0.2)
    .repeat_forever()
    .yoyo(true)
}

/// Target 0 is the floating block, the particles follow.
pub fn ambient_timeline() -> Timeline {
    let float = Tween::new(Pose::IDENTITY, Pose::IDENTITY.y(-30.0).rotate(360.0), 4.0)
        .ease(Ease::Power2InOut)
        .repeat_forever()
        .yoyo(true);
    (0..PARTICLE_POSITIONS.len()).fold(
        Timeline::new().add(0, float, Position::At(0.0)),
        |tl, i| tl.add(i + 1, particle_drift(i), Position::At(0.0)),
    )
}

/// About image from the left, copy from the right, together.
pub fn about_timeline() -> Timeline {
    let image = Tween::new(
        Pose::IDENTITY.opacity(0.0).x(-100.0).rotate_y(-15.0),
        Pose::IDENTITY,
        1.2,
    );
    let copy = Tween::new(Pose::IDENTITY.opacity(0.0).x(100.0), Pose::IDENTITY, 1.2);
    Timeline::new()
        .add(0, image.ease(Ease::Power3Out), Position::At(0.0))
        .add(1, copy.ease(Ease::Power3Out), Position::At(0.0))
}

/// Project cards rise and grow in one after another.
pub fn project_cards_timeline(count: usize) -> Timeline {
    Timeline::new().stagger(count, 0.2, |_| {
        Tween::new(
            Pose::IDENTITY.opacity(0.0).y(50.0).scale(0.9),
            Pose::IDENTITY,
            0.8,
        )
        .ease(Ease::Power3Out)
    })
}

/// Skill levels in page order, across every category.
pub fn skill_levels() -> Vec<u8> {
    SKILLS
        .iter()
        .flat_map(|c| c.skills.iter().map(|s| s.level))
        .collect()
}

pub fn skill_categories_timeline() -> Timeline {
    Timeline::new().stagger(SKILLS.len(), 0.2, |_| {
        Tween::new(Pose::IDENTITY.opacity(0.0).y(50.0), Pose::IDENTITY, 0.8).ease(Ease::Power3Out)
    })
}

/// Every bar fills from empty to its proficiency.
pub fn skill_bars_timeline() -> Timeline {
    let levels = skill_levels();
    Timeline::new().stagger(levels.len(), 0.1, |i| {
        let level = f64::from(levels[i]);
        Tween::new(Pose::IDENTITY.width(0.0), Pose::IDENTITY.width(level), 1.5)
            .ease(Ease::Power2Out)
    })
}

pub fn skill_items_timeline() -> Timeline {
    Timeline::new().stagger(skill_levels().len(), 0.05, |_| {
        Tween::new(Pose::IDENTITY.opacity(0.0).x(-30.0), Pose::IDENTITY, 0.6).ease(Ease::Power3Out)
    })
}

/// One card per contact detail plus the form.
pub fn contact_cards_timeline() -> Timeline {
    Timeline::new().stagger(CONTACT_INFO.len() + 1, 0.2, |_| {
        Tween::new(Pose::IDENTITY.opacity(0.0).y(50.0), Pose::IDENTITY, 0.8).ease(Ease::Power3Out)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_intro_starts_at_rendered_pose() {
        let tl = intro_timeline();
        for target in 0..4 {
            assert_eq!(tl.sample(target, 0.0), Some(INTRO_START));
        }
        assert_eq!(INTRO_START.opacity, 0.0);
        assert!(INTRO_START.to_css().contains("opacity: 0.0000;"));
    }

    #[test]
    fn test_intro_offsets() {
        let starts = intro_timeline().starts();
        let expected = [0.5, 0.9, 1.3, 1.6];
        for (got, want) in starts.iter().zip(expected) {
            assert!(close(*got, want), "{got} != {want}");
        }
    }

    #[test]
    fn test_ambient_never_ends() {
        let tl = ambient_timeline();
        assert_eq!(tl.target_count(), PARTICLE_POSITIONS.len() + 1);
        assert_eq!(tl.duration(), None);
        assert_eq!(tl.sample(1, 0.0).unwrap().opacity, PARTICLE_OPACITY);
    }

    #[test]
    fn test_skill_bars_fill_to_each_level() {
        let tl = skill_bars_timeline();
        let levels = skill_levels();
        assert_eq!(levels.len(), 17);
        assert_eq!(tl.target_count(), levels.len());
        let end = tl.duration().unwrap();
        for (i, level) in levels.iter().enumerate() {
            assert_eq!(tl.sample(i, 0.0).unwrap().width, Some(0.0));
            let done = tl.sample(i, end).unwrap().width.unwrap();
            assert!(close(done, f64::from(*level)));
        }
    }

    #[test]
    fn test_stagger_offsets() {
        let categories = skill_categories_timeline().starts();
        assert_eq!(categories.len(), 3);
        assert!(close(categories[2], 0.4));

        let items = skill_items_timeline().starts();
        assert_eq!(items.len(), 17);
        assert!(close(items[1], 0.05));

        assert_eq!(contact_cards_timeline().target_count(), 5);
        assert!(close(project_cards_timeline(2).duration().unwrap(), 1.0));
    }

    #[test]
    fn test_about_slides_together() {
        let tl = about_timeline();
        assert_eq!(tl.starts(), vec![0.0, 0.0]);
        assert_eq!(tl.sample(0, 0.0).unwrap().rotate_y, -15.0);
        assert_eq!(tl.sample(1, 0.0).unwrap().x, 100.0);
    }
}
