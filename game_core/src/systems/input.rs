use hecs::World;

use crate::{FrameInput, Paddle, PaddleIntent, Player};

/// Turn this frame's key state into paddle one's movement intent
pub fn ingest_input(world: &mut World, input: &FrameInput) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.player == Player::One {
            intent.dir = input.dir();
        }
    }
}
