use config::{Color, RevealPolicy};
use std::f32::consts::PI;

/// Duration of every show/hide animation in host time units.
pub const TRANSITION_DURATION: f32 = 0.8;
/// Extra delay before the scale-in ramp starts on activation.
pub const SCALE_IN_DELAY: f32 = 0.3;
/// Orientation offset the reveal unfurls from, and hides return to.
pub const REVEAL_OFFSET: f32 = PI;

/// Attachment seam to the host's scene collection. Called exactly at
/// activation and deactivation-completion boundaries. Implementations must
/// treat duplicate attach or detach calls as no-ops.
pub trait SceneRegistry {
    fn attach(&mut self, name: &str);
    fn detach(&mut self, name: &str);
}

/// Seam to the external animation driver. The core only issues declarative
/// requests; interpolation and timing stay with the host. Once a request
/// finishes on the host's frame timeline, the host reports its handle back
/// through `Model::complete`.
pub trait Tweener {
    fn animate(&mut self, animation: Animation);
}

/// Animated visual attribute of a model entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Scalar intensity/point-size uniform, 0 hides the cloud, 1 shows it.
    Scale,
    /// Rotation around the vertical axis in radians, the reveal unfurl.
    Orientation,
    /// Ambient backdrop color of the surrounding page or scene.
    Backdrop,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Target {
    Scalar(f32),
    Color(Color),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Fast start, decelerating toward the target.
    EaseOut,
}

/// Identifies one issued animation. Completions echo the handle back; the
/// model name routes requests of a shared driver to the right entity's
/// attributes, the generation invalidates completions of requests that a
/// later show or hide has superseded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnimationHandle {
    pub model: String,
    pub channel: Channel,
    pub generation: u64,
}

/// Declarative animation request for the external driver.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    pub channel: Channel,
    /// Starting value to snap to before interpolating, if any. When absent
    /// the driver animates from the attribute's current value.
    pub from: Option<Target>,
    pub to: Target,
    pub duration: f32,
    pub delay: f32,
    pub easing: Easing,
    pub handle: AnimationHandle,
}

/// Maximal run of activate calls without a settled deactivate in between.
/// Reveal and crossfade fire at most once per streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Streak {
    NeverActivated,
    ActivatedOnce,
    ReActivating,
}

/// Drives the show/hide animation requests of one model entity and keeps
/// overlapping calls straight.
///
/// Every request carries the generation it was issued under. A new show or
/// hide bumps the generation, so completions of superseded requests no
/// longer match and get dropped. This is what keeps a stale hide from
/// detaching an entity that has been reactivated in the meantime.
pub struct TransitionController {
    model: String,
    generation: u64,
    streak: Streak,
    pending_hide: bool,
    policy: RevealPolicy,
}

impl TransitionController {
    pub fn new(model: &str, policy: RevealPolicy) -> TransitionController {
        TransitionController {
            model: String::from(model),
            generation: 0,
            streak: Streak::NeverActivated,
            pending_hide: false,
            policy,
        }
    }

    /// Issues the show animations: the scale ramp toward 1 always, the
    /// reveal rotation and backdrop crossfade only when the policy says
    /// so for the current streak. All requests of one call start
    /// concurrently, none are sequenced after another.
    pub fn begin_show<T: Tweener>(&mut self, tweener: &mut T, background: Color) {
        self.generation += 1;
        self.pending_hide = false;

        let reveal = match self.policy {
            RevealPolicy::PerStreak => self.streak == Streak::NeverActivated,
            RevealPolicy::Always => true,
            RevealPolicy::Never => false,
        };

        tweener.animate(Animation {
            channel: Channel::Scale,
            from: None,
            to: Target::Scalar(1.0),
            duration: TRANSITION_DURATION,
            delay: SCALE_IN_DELAY,
            easing: Easing::EaseOut,
            handle: self.handle(Channel::Scale),
        });

        if reveal {
            tweener.animate(Animation {
                channel: Channel::Orientation,
                from: Some(Target::Scalar(REVEAL_OFFSET)),
                to: Target::Scalar(0.0),
                duration: TRANSITION_DURATION,
                delay: 0.0,
                easing: Easing::EaseOut,
                handle: self.handle(Channel::Orientation),
            });

            tweener.animate(Animation {
                channel: Channel::Backdrop,
                from: None,
                to: Target::Color(background),
                duration: TRANSITION_DURATION,
                delay: 0.0,
                easing: Easing::EaseOut,
                handle: self.handle(Channel::Backdrop),
            });
        }

        self.streak = match self.streak {
            Streak::NeverActivated => Streak::ActivatedOnce,
            Streak::ActivatedOnce | Streak::ReActivating => Streak::ReActivating,
        };
    }

    /// Issues the hide animations: scale ramp toward 0 and orientation
    /// back to the reveal offset. The scale ramp's completion is what
    /// later settles the hide, see `settle`.
    pub fn begin_hide<T: Tweener>(&mut self, tweener: &mut T) {
        self.generation += 1;
        self.pending_hide = true;

        tweener.animate(Animation {
            channel: Channel::Scale,
            from: None,
            to: Target::Scalar(0.0),
            duration: TRANSITION_DURATION,
            delay: 0.0,
            easing: Easing::EaseOut,
            handle: self.handle(Channel::Scale),
        });

        tweener.animate(Animation {
            channel: Channel::Orientation,
            from: None,
            to: Target::Scalar(REVEAL_OFFSET),
            duration: TRANSITION_DURATION,
            delay: 0.0,
            easing: Easing::EaseOut,
            handle: self.handle(Channel::Orientation),
        });
    }

    /// A handle is current when it belongs to this controller's model and
    /// no later show or hide has superseded the call that issued it.
    pub fn is_current(&self, handle: &AnimationHandle) -> bool {
        handle.model == self.model && handle.generation == self.generation
    }

    /// Applies a completion. Returns true exactly when it settles a
    /// pending hide, that is, when the hide's own scale ramp finished and
    /// no show or hide has been issued since. Settling ends the streak, so
    /// the next activation replays reveal and crossfade.
    pub fn settle(&mut self, handle: &AnimationHandle) -> bool {
        if !self.is_current(handle) {
            return false;
        }

        if self.pending_hide && handle.channel == Channel::Scale {
            self.pending_hide = false;
            self.streak = Streak::NeverActivated;
            true
        } else {
            false
        }
    }

    fn handle(&self, channel: Channel) -> AnimationHandle {
        AnimationHandle {
            model: self.model.clone(),
            channel,
            generation: self.generation,
        }
    }
}
