use hecs::World;

use crate::{Aabb, Ball, Config, Events, GameMap, GameRng, MatchState, Player, Score};

/// Award a point if the predicted box left the arena sideways, otherwise
/// move the ball along its (possibly just reflected) direction.
///
/// At most one side scores per frame: the left edge is checked first.
pub fn check_scoring(
    world: &mut World,
    map: &GameMap,
    next: &Aabb,
    ball_delta: f32,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // The side whose edge the ball left concedes
    let conceded = if map.crosses_left(next) {
        Some(Player::One)
    } else if map.crosses_right(next) {
        Some(Player::Two)
    } else {
        None
    };

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        match conceded {
            Some(loser) => {
                let scorer = loser.opponent();
                score.award(scorer);
                events.record_point(scorer);
                log::info!(
                    "Player {} scores, now on {} ({} - {})",
                    scorer.number(),
                    score.get(scorer),
                    score.left,
                    score.right
                );

                ball.reset(map.ball_spawn(), rng);
                log::debug!("ball served towards {:?}", ball.dir);
            }
            None => ball.pos += ball.dir * ball_delta,
        }
    }
}

/// End the match once either score reaches the threshold
pub fn check_winner(score: &Score, config: &Config, state: &mut MatchState, events: &mut Events) {
    if state.over {
        return;
    }
    if let Some(winner) = score.has_winner(config.win_score) {
        state.finish(winner);
        events.game_over = true;
        log::info!(
            "Player {} wins {} - {}",
            winner.number(),
            score.left,
            score.right
        );
    }
}
