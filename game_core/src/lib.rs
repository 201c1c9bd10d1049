pub mod components;
pub mod config;
pub mod control;
pub mod map;
pub mod params;
pub mod resources;
pub mod scene;
pub mod systems;

pub use components::*;
pub use config::*;
pub use control::{ControlView, MirrorController, PaddleController};
pub use map::*;
pub use params::*;
pub use resources::*;
pub use scene::*;

use glam::Vec2;
use hecs::{Entity, World};
use systems::*;

/// Run one frame of the Pong simulation
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    state: &mut MatchState,
    events: &mut Events,
    rng: &mut GameRng,
    controller: &mut dyn PaddleController,
    input: &FrameInput,
) {
    // Clear events at start of frame
    events.clear();

    if state.over {
        time.now += time.dt;
        return;
    }

    // 1. Ingest input (apply to paddle intents)
    ingest_input(world, input);

    // 2. Move paddle one, let the controller place paddle two, then clamp both
    move_paddles(world, time, config);
    apply_controller(world, controller, time);
    clamp_paddles(world, config);

    // 3. Reflect the ball off walls and paddles it is about to hit
    let ball_delta = config.ball_speed * time.dt;
    if let Some(next) = resolve_ball(world, map, config, ball_delta, events) {
        // 4. Score or advance
        check_scoring(world, map, &next, ball_delta, score, events, rng);
    }

    // 5. Check for a winner
    check_winner(score, config, state, events);

    if config.double_step {
        advance_ball(world, ball_delta);
    }

    time.now += time.dt;
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, player: Player, pos: Vec2) -> Entity {
    world.spawn((Paddle::new(player, pos), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, dir: Vec2) -> Entity {
    world.spawn((Ball::new(pos, dir),))
}

/// Everything one match of Pong needs, in one place
pub struct Match {
    pub world: World,
    pub time: Time,
    pub map: GameMap,
    pub config: Config,
    pub score: Score,
    pub state: MatchState,
    pub events: Events,
    pub rng: GameRng,
    pub ball_entity: Entity,
    controller: Box<dyn PaddleController>,
}

impl Match {
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, Config::new())
    }

    pub fn with_config(seed: u64, config: Config) -> Self {
        Self::with_controller(seed, config, Box::new(MirrorController))
    }

    pub fn with_controller(
        seed: u64,
        config: Config,
        controller: Box<dyn PaddleController>,
    ) -> Self {
        let map = GameMap::from_config(&config);
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        // Create paddles
        create_paddle(&mut world, Player::One, map.paddle_spawn(Player::One, &config));
        create_paddle(&mut world, Player::Two, map.paddle_spawn(Player::Two, &config));

        // Create ball
        let mut ball = Ball::new(Vec2::ZERO, Vec2::X);
        ball.reset(map.ball_spawn(), &mut rng);
        let ball_entity = create_ball(&mut world, ball.pos, ball.dir);

        Self {
            world,
            time: Time::default(),
            map,
            config,
            score: Score::new(),
            state: MatchState::new(),
            events: Events::new(),
            rng,
            ball_entity,
            controller,
        }
    }

    /// Advance one frame. `dt` is real seconds since the previous frame.
    pub fn step(&mut self, input: FrameInput, dt: f32) {
        let dt = if dt > self.config.max_dt {
            log::warn!(
                "Frame took {:.1}ms, clamping to {:.1}ms",
                dt * 1000.0,
                self.config.max_dt * 1000.0
            );
            self.config.max_dt
        } else {
            dt.max(0.0)
        };
        self.time.dt = dt;

        step(
            &mut self.world,
            &mut self.time,
            &self.map,
            &self.config,
            &mut self.score,
            &mut self.state,
            &mut self.events,
            &mut self.rng,
            self.controller.as_mut(),
            &input,
        );
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball_entity).ok().map(|b| *b)
    }

    pub fn paddle(&self, player: Player) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.player == player)
            .map(|(_e, p)| *p)
    }

    pub fn is_over(&self) -> bool {
        self.state.over
    }

    pub fn winner(&self) -> Option<Player> {
        self.state.winner
    }
}
