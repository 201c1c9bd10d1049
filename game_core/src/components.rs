use glam::Vec2;
use rand::Rng;

use crate::{Aabb, Config, GameRng};

/// Which side a paddle (or a point, or the match) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One, // left
    Two, // right
}

impl Player {
    /// 1 or 2, as shown to the players
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub player: Player,
    pub pos: Vec2, // x fixed at spawn, y clamped to arena
}

impl Paddle {
    pub fn new(player: Player, pos: Vec2) -> Self {
        Self { player, pos }
    }

    pub fn bounds(&self, config: &Config) -> Aabb {
        Aabb::from_center_half_extents(self.pos, config.paddle_half_extents())
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub dir: Vec2, // unit length; speed comes from config
}

impl Ball {
    pub fn new(pos: Vec2, dir: Vec2) -> Self {
        Self { pos, dir }
    }

    /// Box around the ball if it were at `pos`
    pub fn bounds_at(pos: Vec2, config: &Config) -> Aabb {
        Aabb::from_center_half_extents(pos, config.ball_half_extent())
    }

    pub fn bounds(&self, config: &Config) -> Aabb {
        Self::bounds_at(self.pos, config)
    }

    /// Reset ball to `center` with a random direction.
    ///
    /// A coin flip picks left or right, then that unit vector is rotated by
    /// an angle drawn uniformly from [0°, 360°).
    pub fn reset(&mut self, center: Vec2, rng: &mut GameRng) {
        self.pos = center;

        let sign = if rng.0.gen_bool(0.5) { -1.0 } else { 1.0 };
        let angle = rng.0.gen_range(0.0f32..360.0).to_radians();
        self.dir = Vec2::from_angle(angle).rotate(Vec2::new(sign, 0.0));
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_places_ball_at_center_with_unit_direction() {
        let center = Vec2::new(600.0, 400.0);
        for seed in 0..200 {
            let mut rng = GameRng::new(seed);
            let mut ball = Ball::new(Vec2::new(-50.0, 3.0), Vec2::X);
            ball.reset(center, &mut rng);

            assert_eq!(ball.pos, center, "seed {}", seed);
            assert!(
                (ball.dir.length() - 1.0).abs() < 1e-4,
                "seed {} gave |dir| = {}",
                seed,
                ball.dir.length()
            );
        }
    }

    #[test]
    fn test_reset_is_deterministic_for_a_seed() {
        let center = Vec2::new(10.0, 10.0);
        let mut a = Ball::new(Vec2::ZERO, Vec2::X);
        let mut b = Ball::new(Vec2::ZERO, Vec2::X);
        a.reset(center, &mut GameRng::new(42));
        b.reset(center, &mut GameRng::new(42));
        assert_eq!(a.dir, b.dir);
    }

    #[test]
    fn test_reset_directions_vary() {
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(Vec2::ZERO, Vec2::X);
        let mut rightward = 0;
        for _ in 0..200 {
            ball.reset(Vec2::ZERO, &mut rng);
            if ball.dir.x > 0.0 {
                rightward += 1;
            }
        }
        assert!(rightward > 0 && rightward < 200, "Both sides should be served");
    }

    #[test]
    fn test_bounds_use_config_sizes() {
        let config = Config::new();
        let ball = Ball::new(Vec2::new(100.0, 100.0), Vec2::X);
        let b = ball.bounds(&config);
        assert_eq!(b.min, Vec2::new(80.0, 80.0));
        assert_eq!(b.max, Vec2::new(120.0, 120.0));

        let paddle = Paddle::new(Player::One, Vec2::new(60.0, 400.0));
        let p = paddle.bounds(&config);
        assert_eq!(p.min, Vec2::new(40.0, 360.0));
        assert_eq!(p.max, Vec2::new(80.0, 440.0));
    }

    #[test]
    fn test_player_numbers() {
        assert_eq!(Player::One.number(), 1);
        assert_eq!(Player::Two.number(), 2);
        assert_eq!(Player::One.opponent(), Player::Two);
    }
}
