use crate::{Params, Player};
use glam::Vec2;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_inset: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub win_score: u8,
    pub max_dt: f32,
    /// Advance the ball a second time after scoring is resolved, as the
    /// first desktop build did. Off by default.
    pub double_step: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_inset: Params::PADDLE_INSET,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            win_score: Params::WIN_SCORE,
            max_dt: Params::MAX_DT,
            double_step: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position for paddle based on player
    pub fn paddle_x(&self, player: Player) -> f32 {
        match player {
            Player::One => self.arena_width * self.paddle_inset,
            Player::Two => self.arena_width * (1.0 - self.paddle_inset),
        }
    }

    /// Clamp paddle Y to arena bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let half_height = self.paddle_height / 2.0;
        y.clamp(half_height, self.arena_height - half_height)
    }

    pub fn ball_half_extent(&self) -> Vec2 {
        Vec2::splat(self.ball_size * 0.5)
    }

    pub fn paddle_half_extents(&self) -> Vec2 {
        Vec2::new(self.paddle_width * 0.5, self.paddle_height * 0.5)
    }
}
