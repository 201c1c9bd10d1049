use hecs::World;

use crate::{Aabb, Ball, Config, Events, GameMap, Paddle};

/// Predict where the ball would be after moving `ball_delta` unobstructed
/// and reflect its direction off whatever that box runs into.
///
/// Each rule is checked independently, so a corner hit can flip both
/// components, and an edge plus a paddle in the same frame flips x twice.
/// Only signs change; the direction keeps its length.
///
/// Returns the predicted box (computed before any flip) for scoring.
pub fn resolve_ball(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    ball_delta: f32,
    events: &mut Events,
) -> Option<Aabb> {
    let paddle_boxes: Vec<Aabb> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| paddle.bounds(config))
        .collect();

    let (_entity, ball) = world.query_mut::<&mut Ball>().into_iter().next()?;

    let next = Ball::bounds_at(ball.pos + ball.dir * ball_delta, config);

    if map.crosses_left(&next) || map.crosses_right(&next) {
        ball.dir.x = -ball.dir.x;
    }
    if map.crosses_top(&next) || map.crosses_bottom(&next) {
        ball.dir.y = -ball.dir.y;
        events.ball_hit_wall = true;
        log::debug!("ball hit wall at y={:.1}", ball.pos.y);
    }
    if paddle_boxes.iter().any(|paddle| next.overlaps(paddle)) {
        ball.dir.x = -ball.dir.x;
        events.ball_hit_paddle = true;
        log::debug!("ball hit paddle at {:?}", ball.pos);
    }

    Some(next)
}
