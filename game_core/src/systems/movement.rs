use hecs::World;

use crate::control::{ControlView, PaddleController};
use crate::{Ball, Config, Paddle, PaddleIntent, Player, Time};

/// Apply paddle movement based on intents. Bounds are enforced later by
/// `clamp_paddles`, after the controller has had its say.
pub fn move_paddles(world: &mut World, time: &Time, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.dir != 0 {
            paddle.pos.y += intent.dir as f32 * config.paddle_speed * time.dt;
        }
    }
}

/// Let the controller place paddle two
pub fn apply_controller(world: &mut World, controller: &mut dyn PaddleController, time: &Time) {
    let leader_y = world
        .query::<&Paddle>()
        .iter()
        .find(|(_e, p)| p.player == Player::One)
        .map(|(_e, p)| p.pos.y);
    let ball = world.query::<&Ball>().iter().next().map(|(_e, b)| *b);

    let (Some(leader_y), Some(ball)) = (leader_y, ball) else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.player == Player::Two {
            let view = ControlView {
                leader_y,
                own_y: paddle.pos.y,
                ball,
                dt: time.dt,
            };
            paddle.pos.y = controller.target_y(&view);
        }
    }
}

/// Keep every paddle fully inside the arena
pub fn clamp_paddles(world: &mut World, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.pos.y = config.clamp_paddle_y(paddle.pos.y);
    }
}

/// Move ball along its direction by `distance`
pub fn advance_ball(world: &mut World, distance: f32) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.dir * distance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::MirrorController;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    fn paddle_y(world: &World, player: Player) -> f32 {
        world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.player == player)
            .map(|(_e, p)| p.pos.y)
            .unwrap()
    }

    fn setup() -> (World, Config) {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, Player::One, Vec2::new(60.0, 400.0));
        create_paddle(&mut world, Player::Two, Vec2::new(1140.0, 400.0));
        create_ball(&mut world, Vec2::new(600.0, 400.0), Vec2::X);
        (world, config)
    }

    fn set_intent(world: &mut World, dir: i8) {
        for (_e, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
            if paddle.player == Player::One {
                intent.dir = dir;
            }
        }
    }

    #[test]
    fn test_paddle_moves_by_speed_times_dt() {
        let (mut world, config) = setup();
        set_intent(&mut world, 1);
        move_paddles(&mut world, &Time::new(0.1, 0.0), &config);
        assert!((paddle_y(&world, Player::One) - 440.0).abs() < 1e-3);
        assert_eq!(paddle_y(&world, Player::Two), 400.0, "No intent, no motion");
    }

    #[test]
    fn test_mirror_copies_paddle_one() {
        let (mut world, config) = setup();
        set_intent(&mut world, -1);
        let time = Time::new(0.25, 0.0);
        move_paddles(&mut world, &time, &config);
        apply_controller(&mut world, &mut MirrorController, &time);
        assert_eq!(paddle_y(&world, Player::One), paddle_y(&world, Player::Two));
    }

    #[test]
    fn test_clamp_keeps_paddles_inside_arena() {
        let (mut world, config) = setup();
        let half = config.paddle_height / 2.0;
        for (dir, dt) in [(-1, 5.0), (1, 5.0), (-1, 0.3), (1, 0.01)] {
            set_intent(&mut world, dir);
            let time = Time::new(dt, 0.0);
            move_paddles(&mut world, &time, &config);
            apply_controller(&mut world, &mut MirrorController, &time);
            clamp_paddles(&mut world, &config);
            for player in [Player::One, Player::Two] {
                let y = paddle_y(&world, player);
                assert!(
                    y >= half && y <= config.arena_height - half,
                    "{:?} at {} out of bounds",
                    player,
                    y
                );
            }
        }
    }

    #[test]
    fn test_advance_ball() {
        let (mut world, _config) = setup();
        advance_ball(&mut world, 10.0);
        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, Vec2::new(610.0, 400.0));
        }
    }
}
