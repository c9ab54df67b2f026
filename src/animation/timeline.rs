use crate::animation::ease::Ease;
use crate::foundation::core::{Color, Point, Vec2};

/// Animatable widget state.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Pose {
    /// Position in parent space.
    pub position: Point,
    /// Scale factors.
    pub scale: Vec2,
    /// Tint, normalized.
    pub color: Color,
    /// Rotation in degrees.
    pub rotation_deg: f64,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Point::ORIGIN,
            scale: Vec2::new(1.0, 1.0),
            color: Color::WHITE,
            rotation_deg: 0.0,
        }
    }
}

impl Pose {
    /// Interpolate every property with the same progress `t`.
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            position: self.position.lerp(other.position, t),
            scale: self.scale.lerp(other.scale, t),
            color: self.color.lerp(other.color, t),
            rotation_deg: self.rotation_deg + (other.rotation_deg - self.rotation_deg) * t,
        }
    }
}

/// One timeline step: move, scale, tint and rotate toward `target` in parallel, sharing one
/// duration and easing curve.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TimelineStep {
    /// Step length in seconds. Non-positive durations complete immediately.
    pub duration: f64,
    /// Easing shared by all four transitions.
    pub ease: Ease,
    /// State reached at the end of the step.
    pub target: Pose,
}

/// Sequential steps applied to one widget.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Timeline {
    /// Steps in playback order.
    pub steps: Vec<TimelineStep>,
}

impl Timeline {
    /// Empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step.
    pub fn push(&mut self, step: TimelineStep) {
        self.steps.push(step);
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// `true` when the timeline has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total playback length in seconds.
    pub fn duration(&self) -> f64 {
        self.steps.iter().map(|s| s.duration.max(0.0)).sum()
    }

    /// State at `time` seconds, starting from `start`.
    ///
    /// Each step starts from wherever the previous one ended, so the first step animates away from
    /// the widget's own state.
    pub fn sample(&self, start: &Pose, time: f64) -> Pose {
        let mut from = *start;
        let mut t = time;
        for step in &self.steps {
            let d = step.duration.max(0.0);
            if t >= d {
                from = step.target;
                t -= d;
                continue;
            }
            return from.lerp(&step.target, step.ease.apply(t / d));
        }
        from
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
