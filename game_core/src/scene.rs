//! Frame description handed to the renderer.
//!
//! The simulation decides *what* is on screen; the client only knows how
//! to turn rectangles and text into pixels.

use glam::Vec2;

use crate::{Aabb, Match, Player};

pub type Color = [f32; 4]; // rgba

pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];

pub const SCORE_FONT_SIZE: f32 = 40.0;
pub const BANNER_FONT_SIZE: f32 = 60.0;

/// Horizontal anchoring of text relative to its position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect {
        area: Aabb,
        color: Color,
    },
    /// `pos.y` is the top of the text line
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        align: Align,
        color: Color,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub clear: Color,
    pub commands: Vec<DrawCmd>,
}

impl Scene {
    pub fn new(clear: Color) -> Self {
        Self {
            clear,
            commands: Vec::new(),
        }
    }

    pub fn rect(&mut self, area: Aabb, color: Color) {
        self.commands.push(DrawCmd::Rect { area, color });
    }

    pub fn text(&mut self, text: impl Into<String>, pos: Vec2, size: f32, align: Align, color: Color) {
        self.commands.push(DrawCmd::Text {
            text: text.into(),
            pos,
            size,
            align,
            color,
        });
    }
}

pub fn winner_text(winner: Player) -> String {
    format!("Player {} Wins!", winner.number())
}

/// Build the draw list for the current state of `game`
pub fn build_scene(game: &Match) -> Scene {
    let mut scene = Scene::new(BLACK);
    let (w, h) = (game.map.width, game.map.height);

    match game.state.winner {
        Some(winner) if game.state.over => {
            scene.text(
                winner_text(winner),
                Vec2::new(w * 0.5, h * 0.5),
                BANNER_FONT_SIZE,
                Align::Center,
                WHITE,
            );
        }
        _ => {
            if let Some(ball) = game.ball() {
                scene.rect(ball.bounds(&game.config), WHITE);
            }
            for player in [Player::One, Player::Two] {
                if let Some(paddle) = game.paddle(player) {
                    scene.rect(paddle.bounds(&game.config), WHITE);
                }
            }
            scene.text(
                game.score.left.to_string(),
                Vec2::new(w * 0.25, h * 0.05),
                SCORE_FONT_SIZE,
                Align::Left,
                WHITE,
            );
            scene.text(
                game.score.right.to_string(),
                Vec2::new(w * 0.75, h * 0.05),
                SCORE_FONT_SIZE,
                Align::Left,
                WHITE,
            );
        }
    }

    scene
}

impl Match {
    pub fn scene(&self) -> Scene {
        build_scene(self)
    }
}
