use std::rc::Rc;

use yew::Reducible;

/// Share of the hero that must be on screen before the scene may load.
pub const VISIBILITY_THRESHOLD: f64 = 0.2;

/// Browsers may report the threshold-crossing entry a hair under the
/// threshold (e.g. 0.1999).
const VISIBILITY_EPSILON: f64 = 0.001;

pub fn reached_visibility(is_intersecting: bool, ratio: f64) -> bool {
    is_intersecting && ratio + VISIBILITY_EPSILON >= VISIBILITY_THRESHOLD
}

/// The 3D scene is only allowed when the user asked for it, the hero has been
/// seen, and the OS does not request reduced motion.
pub fn scene_allowed(user_enabled: bool, hero_visible: bool, reduced_motion: bool) -> bool {
    user_enabled && hero_visible && !reduced_motion
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeroGate {
    pub user_enabled: bool,
    pub hero_visible: bool,
    pub reduced_motion: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeroAction {
    ToggleAnimation,
    HeroVisible,
    ReducedMotion(bool),
}

impl HeroGate {
    pub fn apply(self, action: HeroAction) -> Self {
        match action {
            // Reduced motion wins; the toggle stays off while it holds.
            HeroAction::ToggleAnimation if self.reduced_motion => self,
            HeroAction::ToggleAnimation => Self {
                user_enabled: !self.user_enabled,
                ..self
            },
            // Latched: nothing ever clears it.
            HeroAction::HeroVisible => Self {
                hero_visible: true,
                ..self
            },
            HeroAction::ReducedMotion(true) => Self {
                reduced_motion: true,
                user_enabled: false,
                ..self
            },
            HeroAction::ReducedMotion(false) => Self {
                reduced_motion: false,
                ..self
            },
        }
    }

    pub fn should_render_scene(&self) -> bool {
        scene_allowed(self.user_enabled, self.hero_visible, self.reduced_motion)
    }
}

impl Reducible for HeroGate {
    type Action = HeroAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(actions: &[HeroAction]) -> HeroGate {
        actions
            .iter()
            .fold(HeroGate::default(), |gate, action| gate.apply(*action))
    }

    #[test]
    fn starts_static() {
        let gate = HeroGate::default();
        assert!(!gate.user_enabled);
        assert!(!gate.should_render_scene());
    }

    #[test]
    fn decision_is_the_conjunction_of_three_signals() {
        for user in [false, true] {
            for visible in [false, true] {
                for reduced in [false, true] {
                    assert_eq!(
                        scene_allowed(user, visible, reduced),
                        user && visible && !reduced,
                        "user={user} visible={visible} reduced={reduced}"
                    );
                }
            }
        }
    }

    #[test]
    fn toggle_and_visibility_enable_the_scene() {
        let gate = run(&[HeroAction::HeroVisible, HeroAction::ToggleAnimation]);
        assert!(gate.should_render_scene());

        let gate = gate.apply(HeroAction::ToggleAnimation);
        assert!(!gate.should_render_scene());
    }

    #[test]
    fn never_toggled_never_renders() {
        let gate = run(&[
            HeroAction::HeroVisible,
            HeroAction::ReducedMotion(true),
            HeroAction::ReducedMotion(false),
            HeroAction::HeroVisible,
        ]);
        assert!(!gate.should_render_scene());
    }

    #[test]
    fn reduced_motion_forces_static_and_resets_toggle() {
        let gate = run(&[
            HeroAction::HeroVisible,
            HeroAction::ToggleAnimation,
            HeroAction::ReducedMotion(true),
        ]);
        assert!(!gate.user_enabled);
        assert!(!gate.should_render_scene());
    }

    #[test]
    fn toggling_under_reduced_motion_does_nothing() {
        let gate = run(&[
            HeroAction::HeroVisible,
            HeroAction::ReducedMotion(true),
            HeroAction::ToggleAnimation,
            HeroAction::ToggleAnimation,
            HeroAction::ToggleAnimation,
        ]);
        assert!(!gate.user_enabled);
        assert!(!gate.should_render_scene());
    }

    #[test]
    fn clearing_reduced_motion_needs_a_fresh_opt_in() {
        let gate = run(&[
            HeroAction::HeroVisible,
            HeroAction::ToggleAnimation,
            HeroAction::ReducedMotion(true),
            HeroAction::ReducedMotion(false),
        ]);
        assert!(!gate.should_render_scene());

        let gate = gate.apply(HeroAction::ToggleAnimation);
        assert!(gate.should_render_scene());
    }

    #[test]
    fn visibility_latch_survives_everything() {
        let gate = run(&[
            HeroAction::HeroVisible,
            HeroAction::ToggleAnimation,
            HeroAction::ReducedMotion(true),
            HeroAction::ReducedMotion(false),
        ]);
        assert!(gate.hero_visible);
    }

    #[test]
    fn threshold_is_twenty_percent() {
        assert!(!reached_visibility(true, 0.0));
        assert!(!reached_visibility(true, 0.19));
        assert!(reached_visibility(true, 0.2));
        assert!(reached_visibility(true, 1.0));
    }

    #[test]
    fn crossing_reported_just_under_threshold_still_latches() {
        assert!(reached_visibility(true, 0.1999));
        assert!(reached_visibility(true, 0.19995));
        assert!(!reached_visibility(true, 0.198));
    }

    #[test]
    fn leaving_entries_never_latch() {
        assert!(!reached_visibility(false, 0.2));
        assert!(!reached_visibility(false, 0.1999));
    }

    #[test]
    fn reducer_keeps_identity_when_nothing_changes() {
        let gate = Rc::new(HeroGate::default().apply(HeroAction::HeroVisible));
        let same = gate.clone().reduce(HeroAction::HeroVisible);
        assert!(Rc::ptr_eq(&gate, &same));

        let changed = gate.clone().reduce(HeroAction::ToggleAnimation);
        assert!(!Rc::ptr_eq(&gate, &changed));
        assert!(changed.should_render_scene());
    }
}
