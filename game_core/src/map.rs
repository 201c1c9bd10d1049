use glam::Vec2;

use crate::{Config, Player};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_half_extents(center: Vec2, half: Vec2) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Extents intersect on both axes. Touching edges count as overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let x = self.max.x >= other.min.x && self.min.x <= other.max.x;
        let y = self.max.y >= other.min.y && self.min.y <= other.max.y;
        x && y
    }
}

/// The playing field: a `width` x `height` rectangle anchored at the origin
#[derive(Debug, Clone, Copy)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
}

impl GameMap {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.arena_width, config.arena_height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Where the ball goes after a point
    pub fn ball_spawn(&self) -> Vec2 {
        self.center()
    }

    pub fn paddle_spawn(&self, player: Player, config: &Config) -> Vec2 {
        Vec2::new(config.paddle_x(player), self.height * 0.5)
    }

    pub fn crosses_left(&self, b: &Aabb) -> bool {
        b.min.x < 0.0
    }

    pub fn crosses_right(&self, b: &Aabb) -> bool {
        b.max.x > self.width
    }

    pub fn crosses_top(&self, b: &Aabb) -> bool {
        b.min.y < 0.0
    }

    pub fn crosses_bottom(&self, b: &Aabb) -> bool {
        b.max.y > self.height
    }
}

impl Default for GameMap {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
