use leptos::prelude::*;
use leptos_use::{use_window_scroll, use_window_size, UseWindowSizeReturn};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use super::{Action, Ease, Pose, Region, ScrollTrigger, Timeline, Tween};

const ANIMATED_PROPERTIES: [&str; 3] = ["opacity", "transform", "width"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy)]
struct QuickTween {
    tween: Tween,
    started_at: f64,
}

struct PlayerState {
    timeline: Timeline,
    targets: Vec<HtmlElement>,
    last: Vec<Pose>,
    quick: Vec<Option<QuickTween>>,
    time: f64,
    direction: Direction,
    running: bool,
    engaged: bool,
    frame_pending: bool,
    last_frame: Option<f64>,
}

impl PlayerState {
    fn new(timeline: Timeline) -> Self {
        Self {
            timeline,
            targets: Vec::new(),
            last: Vec::new(),
            quick: Vec::new(),
            time: 0.0,
            direction: Direction::Forward,
            running: false,
            engaged: false,
            frame_pending: false,
            last_frame: None,
        }
    }

    fn perform(&mut self, action: Action) {
        match action {
            Action::Play => {
                self.direction = Direction::Forward;
                self.running = true;
                self.engaged = true;
            }
            Action::Pause => self.running = false,
            Action::Resume => self.running = true,
            Action::Reverse => {
                self.direction = Direction::Backward;
                self.running = true;
                self.engaged = false;
            }
            Action::Restart => {
                self.time = 0.0;
                self.direction = Direction::Forward;
                self.running = true;
                self.engaged = true;
            }
            Action::Reset => {
                self.time = 0.0;
                self.running = false;
            }
            Action::Complete => {
                if let Some(d) = self.timeline.duration() {
                    self.time = d;
                }
                self.running = false;
            }
            Action::None => {}
        }
    }

    /// Steps the clock to `now` (ms) and writes every target's pose.
    /// Returns whether another frame is needed.
    fn advance(&mut self, now: f64) -> bool {
        let dt = self
            .last_frame
            .map(|last| (now - last).max(0.0) / 1000.0)
            .unwrap_or(0.0);
        self.last_frame = Some(now);

        if self.running {
            match self.direction {
                Direction::Forward => {
                    self.time += dt;
                    if let Some(d) = self.timeline.duration() {
                        if self.time >= d {
                            self.time = d;
                            self.running = false;
                        }
                    }
                }
                Direction::Backward => {
                    self.time -= dt;
                    if self.time <= 0.0 {
                        self.time = 0.0;
                        self.running = false;
                    }
                }
            }
        }

        let mut quick_active = false;
        for (i, el) in self.targets.iter().enumerate() {
            let pose = match self.quick[i] {
                Some(q) => {
                    let local = (now - q.started_at) / 1000.0;
                    if q.tween.end_time().is_some_and(|end| local >= end) {
                        self.quick[i] = None;
                        Some(q.tween.to)
                    } else {
                        quick_active = true;
                        Some(q.tween.sample(local))
                    }
                }
                None => self.timeline.sample(i, self.time),
            };
            if let Some(pose) = pose {
                write_pose(el, &pose);
                self.last[i] = pose;
            }
        }

        let active = self.running || quick_active;
        if !active {
            self.last_frame = None;
        }
        active
    }

    fn clear_styles(&mut self) {
        for el in &self.targets {
            let style = el.style();
            for prop in ANIMATED_PROPERTIES {
                let _ = style.remove_property(prop);
            }
        }
    }
}

fn write_pose(el: &HtmlElement, pose: &Pose) {
    let style = el.style();
    for (prop, value) in pose.css_properties() {
        if let Err(e) = style.set_property(prop, &value) {
            log::debug!("couldn't set {prop}: {e:?}");
        }
    }
}

/// Drives a [`Timeline`] on bound DOM elements with `requestAnimationFrame`.
/// Cheap to copy; the state lives in the reactive owner that created it and
/// the written styles are removed when that owner is cleaned up.
#[derive(Clone, Copy)]
pub struct Player {
    state: StoredValue<PlayerState, LocalStorage>,
}

impl Player {
    pub fn new(timeline: Timeline) -> Self {
        let player = Self {
            state: StoredValue::new_local(PlayerState::new(timeline)),
        };
        on_cleanup(move || player.revert());
        player
    }

    /// Binds targets by index. Initial poses are written right away; a player
    /// that was already playing forward starts over on the new targets.
    pub fn bind(self, targets: Vec<HtmlElement>) {
        let now = js_sys::Date::now();
        let bound = self.state.try_update_value(|s| {
            s.clear_styles();
            let n = targets.len();
            s.targets = targets;
            s.last = vec![Pose::IDENTITY; n];
            s.quick = vec![None; n];
            s.time = 0.0;
            s.last_frame = None;
            if s.engaged {
                s.running = true;
            }
            s.advance(now);
            n
        });
        if let Some(n) = bound {
            log::debug!("animation bound to {n} element(s)");
            self.schedule();
        }
    }

    /// Swaps in a timeline sized for `targets`, then binds them.
    pub fn rebind(self, timeline: Timeline, targets: Vec<HtmlElement>) {
        self.state.try_update_value(|s| s.timeline = timeline);
        self.bind(targets);
    }

    pub fn perform(self, action: Action) {
        if action == Action::None {
            return;
        }
        self.state.try_update_value(|s| s.perform(action));
        self.schedule();
    }

    pub fn play(self) {
        self.perform(Action::Play);
    }

    pub fn reverse(self) {
        self.perform(Action::Reverse);
    }

    /// Tweens one target from wherever it is now to `update(current)`.
    pub fn tween_to(
        self,
        target: usize,
        update: impl FnOnce(Pose) -> Pose,
        duration: f64,
        ease: Ease,
    ) {
        self.state.try_update_value(|s| {
            if let Some(from) = s.last.get(target).copied() {
                let to = update(from);
                s.quick[target] = Some(QuickTween {
                    tween: Tween::new(from, to, duration).ease(ease),
                    started_at: js_sys::Date::now(),
                });
            }
        });
        self.schedule();
    }

    /// Stops the frame loop and removes every inline style the player wrote.
    pub fn revert(self) {
        self.state.try_update_value(|s| {
            s.running = false;
            s.engaged = false;
            s.clear_styles();
            s.targets.clear();
            s.last.clear();
            s.quick.clear();
        });
    }

    fn schedule(self) {
        let needed = self
            .state
            .try_update_value(|s| {
                if s.frame_pending || s.targets.is_empty() {
                    false
                } else {
                    s.frame_pending = true;
                    true
                }
            })
            .unwrap_or(false);
        if needed {
            request_animation_frame(move || self.on_frame());
        }
    }

    fn on_frame(self) {
        let now = js_sys::Date::now();
        let again = self
            .state
            .try_update_value(|s| {
                s.frame_pending = false;
                s.advance(now)
            })
            .unwrap_or(false);
        if again {
            self.schedule();
        }
    }
}

/// Runs `player` through `trigger` as the window scrolls. `element` yields the
/// trigger element once it is mounted.
pub fn bind_scroll<F>(player: Player, trigger: ScrollTrigger, element: F)
where
    F: Fn() -> Option<Element> + 'static,
{
    let (_, scroll_y) = use_window_scroll();
    let UseWindowSizeReturn { height, .. } = use_window_size();

    Effect::new(move |prev: Option<Region>| {
        scroll_y.track();
        let viewport_height = height.get();
        let prev = prev.unwrap_or_default();
        let Some(el) = element() else {
            return prev;
        };
        let rect = el.get_bounding_client_rect();
        let next = trigger.region(rect.top(), rect.bottom(), viewport_height);
        for action in trigger.transition(prev, next) {
            player.perform(action);
        }
        next
    });
}

/// Every element under `root` matching `selector`, in document order.
pub fn select(root: &Element, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::debug!("invalid selector: {selector}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use leptos::reactive::owner::Owner;

    use super::*;

    #[test]
    fn test_disposed_player_ignores_calls() {
        let owner = Owner::new();
        let player = owner.with(|| Player::new(Timeline::new()));
        owner.unset();

        player.perform(Action::Play);
        player.reverse();
        player.tween_to(0, |p| p.rotate_x(10.0), 0.3, Ease::Power2Out);
        player.revert();
    }

    #[test]
    fn test_unbound_player_ignores_tween_to() {
        let owner = Owner::new();
        owner.with(|| {
            let player = Player::new(Timeline::new());
            // no targets yet, so nothing to tween and no frame requested
            player.tween_to(3, |p| p.opacity(0.0), 0.5, Ease::Linear);
            player.play();
        });
    }
}
