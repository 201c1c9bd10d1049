//! Control policies for the second paddle.
//!
//! Paddle two has no keys of its own yet. Whatever drives it implements
//! [`PaddleController`] and is handed to [`crate::Match::with_controller`].

use crate::Ball;

/// Read-only snapshot a controller decides from
#[derive(Debug, Clone, Copy)]
pub struct ControlView {
    pub leader_y: f32, // paddle one, already moved this frame
    pub own_y: f32,
    pub ball: Ball,
    pub dt: f32,
}

pub trait PaddleController {
    /// Desired y for the controlled paddle. Clamping happens afterwards.
    fn target_y(&mut self, view: &ControlView) -> f32;
}

/// Copies paddle one's y every frame
#[derive(Debug, Clone, Copy, Default)]
pub struct MirrorController;

impl PaddleController for MirrorController {
    fn target_y(&mut self, view: &ControlView) -> f32 {
        view.leader_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_mirror_follows_leader() {
        let mut controller = MirrorController;
        let view = ControlView {
            leader_y: 123.0,
            own_y: 400.0,
            ball: Ball::new(Vec2::ZERO, Vec2::X),
            dt: 0.016,
        };
        assert_eq!(controller.target_y(&view), 123.0);
    }

    #[test]
    fn test_mirror_does_not_clamp() {
        let mut controller = MirrorController;
        let view = ControlView {
            leader_y: -50.0,
            own_y: 400.0,
            ball: Ball::new(Vec2::ZERO, Vec2::X),
            dt: 0.016,
        };
        assert_eq!(controller.target_y(&view), -50.0);
    }
}
