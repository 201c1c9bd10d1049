use crate::Player;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 1.0 / 60.0,
            now: 0.0,
        }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,  // Player one
    pub right: u8, // Player two
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// One point to `player`
    pub fn award(&mut self, player: Player) {
        let points = match player {
            Player::One => &mut self.left,
            Player::Two => &mut self.right,
        };
        *points = points.saturating_add(1);
    }

    pub fn get(&self, player: Player) -> u8 {
        match player {
            Player::One => self.left,
            Player::Two => self.right,
        }
    }

    /// Player one is checked first, so a simultaneous threshold goes to them
    pub fn has_winner(&self, win_score: u8) -> Option<Player> {
        if self.left >= win_score {
            Some(Player::One)
        } else if self.right >= win_score {
            Some(Player::Two)
        } else {
            None
        }
    }
}

/// Match progress. `over` only ever goes from false to true.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchState {
    pub over: bool,
    pub winner: Option<Player>,
}

impl MatchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(&mut self, winner: Player) {
        if !self.over {
            self.over = true;
            self.winner = Some(winner);
        }
    }

    /// 0 while playing, otherwise the winner's number
    pub fn winner_id(&self) -> u8 {
        self.winner.map_or(0, Player::number)
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub left_scored: bool,  // player one took a point
    pub right_scored: bool, // player two took a point
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub game_over: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_point(&mut self, scorer: Player) {
        match scorer {
            Player::One => self.left_scored = true,
            Player::Two => self.right_scored = true,
        }
    }

    /// Who took a point this frame. At most one side scores per frame.
    pub fn scorer(&self) -> Option<Player> {
        if self.left_scored {
            Some(Player::One)
        } else if self.right_scored {
            Some(Player::Two)
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
        self.game_over = false;
    }
}

/// Paddle-one controls sampled for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub up: bool,
    pub down: bool,
}

impl FrameInput {
    pub fn new(up: bool, down: bool) -> Self {
        Self { up, down }
    }

    /// -1 = up, 0 = stop (or both held), 1 = down
    pub fn dir(&self) -> i8 {
        self.down as i8 - self.up as i8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_award_player_one() {
        let mut score = Score::new();
        assert_eq!(score.left, 0);
        score.award(Player::One);
        assert_eq!(score.left, 1);
        score.award(Player::One);
        assert_eq!(score.left, 2);
        assert_eq!(score.right, 0);
    }

    #[test]
    fn test_score_award_player_two() {
        let mut score = Score::new();
        assert_eq!(score.right, 0);
        score.award(Player::Two);
        assert_eq!(score.right, 1);
        score.award(Player::Two);
        assert_eq!(score.right, 2);
        assert_eq!(score.get(Player::Two), 2);
    }

    #[test]
    fn test_score_has_winner_left() {
        let mut score = Score::new();
        for _ in 0..5 {
            score.award(Player::One);
        }
        assert_eq!(score.has_winner(5), Some(Player::One));
    }

    #[test]
    fn test_score_has_winner_right() {
        let mut score = Score::new();
        for _ in 0..4 {
            score.award(Player::One);
        }
        for _ in 0..5 {
            score.award(Player::Two);
        }
        assert_eq!(score.has_winner(5), Some(Player::Two));
    }

    #[test]
    fn test_score_no_winner_below_threshold() {
        let score = Score { left: 4, right: 4 };
        assert_eq!(score.has_winner(5), None, "No winner below threshold");
    }

    #[test]
    fn test_match_state_is_one_way() {
        let mut state = MatchState::new();
        assert_eq!(state.winner_id(), 0);

        state.finish(Player::Two);
        assert!(state.over);
        assert_eq!(state.winner_id(), 2);

        state.finish(Player::One);
        assert_eq!(state.winner, Some(Player::Two), "Winner is never replaced");
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.left_scored = true;
        events.right_scored = true;
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;
        events.game_over = true;

        events.clear();

        assert!(!events.left_scored);
        assert!(!events.right_scored);
        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
        assert!(!events.game_over);
    }

    #[test]
    fn test_events_record_scorer() {
        let mut events = Events::new();
        assert_eq!(events.scorer(), None);

        events.record_point(Player::Two);
        assert!(events.right_scored && !events.left_scored);
        assert_eq!(events.scorer(), Some(Player::Two));

        events.clear();
        events.record_point(Player::One);
        assert_eq!(events.scorer(), Some(Player::One));
    }

    #[test]
    fn test_frame_input_dir() {
        assert_eq!(FrameInput::new(false, false).dir(), 0);
        assert_eq!(FrameInput::new(true, false).dir(), -1);
        assert_eq!(FrameInput::new(false, true).dir(), 1);
        assert_eq!(FrameInput::new(true, true).dir(), 0, "Both keys cancel out");
    }
}
