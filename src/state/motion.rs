/// Decorative motion: entrance tween and the cursor-following paw
///
/// Both are plain state advanced by `tick(dt)` from the animation frame
/// subscription. Nothing here knows about iced.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Largest integration step; longer frames are split so the spring stays stable
const MAX_STEP: f32 = 1.0 / 120.0;

/// Below these the spring snaps to its target and stops
const REST_DISTANCE: f32 = 0.05;
const REST_VELOCITY: f32 = 0.05;

/// Slowest accepted decay (1/s); weaker damping leaves the paw wobbling for minutes
const MIN_DECAY_RATE: f32 = 1.0;

/// Distance the page slides up while fading in (pixels)
pub const ENTRANCE_OFFSET: f32 = 20.0;

/// Spring tuning, loaded from settings
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: 150.0,
            damping: 15.0,
            mass: 1.0,
        }
    }
}

impl SpringParams {
    /// Check that the spring settles with the fixed integration step
    pub fn check(&self) -> Result<(), &'static str> {
        let Self {
            stiffness,
            damping,
            mass,
        } = *self;

        if ![stiffness, damping, mass]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
        {
            return Err("values must be finite and positive");
        }
        // Semi-implicit Euler needs omega * dt and (c / m) * dt well below 2
        if (stiffness / mass).sqrt() * MAX_STEP >= 1.0 || damping / mass * MAX_STEP >= 1.0 {
            return Err("spring is too stiff for the animation step");
        }
        if damping / (2.0 * mass) < MIN_DECAY_RATE {
            return Err("damping is too weak for the paw to settle");
        }
        Ok(())
    }

    /// These parameters if usable, otherwise the defaults
    pub fn sanitized(self) -> Self {
        match self.check() {
            Ok(()) => self,
            Err(reason) => {
                tracing::warn!(params = ?self, "Ignoring spring settings: {reason}");
                Self::default()
            }
        }
    }
}

/// Last pointer position reported by the window
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CursorState {
    pub x: f32,
    pub y: f32,
}

/// One-dimensional damped spring
#[derive(Debug, Clone, Copy)]
pub struct Spring {
    position: f32,
    velocity: f32,
    target: f32,
    params: SpringParams,
}

impl Spring {
    pub fn new(position: f32, params: SpringParams) -> Self {
        Self {
            position,
            velocity: 0.0,
            target: position,
            params,
        }
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn arrived(&self) -> bool {
        (self.position - self.target).abs() < REST_DISTANCE && self.velocity.abs() < REST_VELOCITY
    }

    /// Advance by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        if self.arrived() {
            self.position = self.target;
            self.velocity = 0.0;
            return;
        }

        let mass = self.params.mass.max(f32::EPSILON);
        let mut remaining = dt.max(0.0);
        while remaining > 0.0 {
            let step = remaining.min(MAX_STEP);
            let displacement = self.position - self.target;
            let force = -self.params.stiffness * displacement - self.params.damping * self.velocity;
            self.velocity += force / mass * step;
            self.position += self.velocity * step;
            remaining -= step;
        }

        if self.arrived() {
            self.position = self.target;
            self.velocity = 0.0;
        }
    }
}

/// Paw icon that trails the cursor
#[derive(Debug, Clone, Copy)]
pub struct CursorFollower {
    x: Spring,
    y: Spring,
}

impl CursorFollower {
    pub fn new(params: SpringParams) -> Self {
        Self {
            x: Spring::new(0.0, params),
            y: Spring::new(0.0, params),
        }
    }

    pub fn follow(&mut self, cursor: CursorState) {
        self.x.set_target(cursor.x);
        self.y.set_target(cursor.y);
    }

    pub fn tick(&mut self, dt: f32) {
        self.x.update(dt);
        self.y.update(dt);
    }

    pub fn is_at_rest(&self) -> bool {
        self.x.arrived() && self.y.arrived()
    }

    pub fn position(&self) -> CursorState {
        CursorState {
            x: self.x.position(),
            y: self.y.position(),
        }
    }
}

/// Fade-and-slide played once when the page opens
#[derive(Debug, Clone, Copy)]
pub struct Entrance {
    elapsed: Duration,
    duration: Duration,
}

impl Entrance {
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Eased progress in [0, 1]
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        ease_out_cubic(t.clamp(0.0, 1.0))
    }

    /// Current vertical offset of the sliding content
    pub fn offset(&self) -> f32 {
        (1.0 - self.progress()) * ENTRANCE_OFFSET
    }
}

impl Default for Entrance {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}

pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spring_settles_on_target() {
        let mut spring = Spring::new(0.0, SpringParams::default());
        spring.set_target(100.0);
        assert!(!spring.arrived());

        for _ in 0..600 {
            spring.update(1.0 / 60.0);
        }

        assert!(spring.arrived());
        assert_eq!(spring.position(), 100.0);
    }

    #[test]
    fn test_long_frame_is_stable() {
        let mut spring = Spring::new(0.0, SpringParams::default());
        spring.set_target(50.0);
        spring.update(2.0);
        assert!(spring.position().is_finite());
        assert!((spring.position() - 50.0).abs() < 50.0);
    }

    #[test]
    fn test_default_params_pass_check() {
        assert_eq!(SpringParams::default().check(), Ok(()));
    }

    #[test]
    fn test_unusable_params_fall_back_to_defaults() {
        let bad = [
            SpringParams { stiffness: 100_000.0, ..SpringParams::default() },
            SpringParams { damping: 0.0, ..SpringParams::default() },
            SpringParams { damping: 0.5, ..SpringParams::default() },
            SpringParams { damping: 1_000.0, ..SpringParams::default() },
            SpringParams { mass: -1.0, ..SpringParams::default() },
            SpringParams { stiffness: f32::NAN, ..SpringParams::default() },
            SpringParams { stiffness: f32::INFINITY, ..SpringParams::default() },
        ];
        for params in bad {
            assert!(params.check().is_err(), "{params:?} should be rejected");
            assert_eq!(params.sanitized(), SpringParams::default());
        }
    }

    #[test]
    fn test_usable_custom_params_are_kept() {
        let params = SpringParams {
            stiffness: 400.0,
            damping: 30.0,
            mass: 2.0,
        };
        assert_eq!(params.sanitized(), params);
    }

    #[test]
    fn test_follower_tracks_cursor() {
        let mut paw = CursorFollower::new(SpringParams::default());
        assert!(paw.is_at_rest());

        paw.follow(CursorState { x: 40.0, y: -20.0 });
        assert!(!paw.is_at_rest());

        for _ in 0..600 {
            paw.tick(1.0 / 60.0);
        }
        assert!(paw.is_at_rest());
        assert_eq!(paw.position(), CursorState { x: 40.0, y: -20.0 });
    }

    #[test]
    fn test_entrance_is_monotone_and_finishes() {
        let mut entrance = Entrance::default();
        assert_eq!(entrance.progress(), 0.0);
        assert_eq!(entrance.offset(), ENTRANCE_OFFSET);

        let mut last = 0.0;
        for _ in 0..40 {
            entrance.advance(Duration::from_millis(16));
            let p = entrance.progress();
            assert!(p >= last);
            last = p;
        }

        assert!(entrance.is_done());
        assert_eq!(entrance.progress(), 1.0);
        assert_eq!(entrance.offset(), 0.0);
    }

    #[test]
    fn test_zero_length_entrance() {
        let entrance = Entrance::new(Duration::ZERO);
        assert!(entrance.is_done());
        assert_eq!(entrance.progress(), 1.0);
    }
}
