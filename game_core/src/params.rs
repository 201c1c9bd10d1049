/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (screen units, origin top-left, +y down)
    pub const ARENA_WIDTH: f32 = 1200.0;
    pub const ARENA_HEIGHT: f32 = 800.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 40.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_SPEED: f32 = Self::ARENA_HEIGHT * 0.5; // half the arena height per second
    pub const PADDLE_INSET: f32 = 0.05; // fraction of arena width from each side

    // Ball
    pub const BALL_SIZE: f32 = 40.0;
    pub const BALL_SPEED: f32 = Self::ARENA_WIDTH * 0.5; // half the arena width per second

    // Score
    pub const WIN_SCORE: u8 = 5; // First to 5 wins

    // Timing
    pub const TARGET_FPS: u32 = 60;
    pub const MAX_DT: f32 = 0.25; // Clamp to prevent tunnelling after a stall
}
