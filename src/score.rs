//! The score module holds the players, the game they play and the rules turning the two point
//! counts into the call that gets announced after every ball.
//!
//! The score is never stored. It is computed from the point counts every time it is asked for.

use std::fmt::{self, Display, Formatter};

/// This enum identifies one of the two players of a game. The order of the players never changes
/// once the game has been created.
#[expect(
    clippy::arbitrary_source_item_ordering,
    reason = "The variants follow the order in which the players are introduced."
)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Side {
    /// The first player, the one whose name gets asked for first.
    One,
    /// The second player.
    Two,
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Self::One => write!(f, "One"),
            Self::Two => write!(f, "Two"),
        }
    }
}

/// This struct holds a single player's name and the amount of points they've won in the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// The name shown in the instructions and in the advantage and win calls.
    name: String,
    /// The number of points won so far.
    points: u32,
}

impl Player {
    /// Creates a player with the given name and no points.
    #[must_use]
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            points: 0,
        }
    }

    /// Creates a player who has already won the given number of points.
    pub(crate) fn with_points<N: Into<String>>(name: N, points: u32) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of points the player has won.
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.points
    }

    /// Adds exactly one point to the player.
    pub fn score_point(&mut self) {
        self.points = self.points.saturating_add(1);
    }
}

/// This struct holds the two players of a single game of tennis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// The first player.
    player1: Player,
    /// The second player.
    player2: Player,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Player::new("Player 1"), Player::new("Player 2"))
    }
}

impl Game {
    /// Creates a game between the two given players.
    #[must_use]
    pub const fn new(player1: Player, player2: Player) -> Self {
        Self { player1, player2 }
    }

    /// Returns the player on the given side.
    #[must_use]
    pub const fn player(&self, side: Side) -> &Player {
        match side {
            Side::One => &self.player1,
            Side::Two => &self.player2,
        }
    }

    /// Returns the first player.
    #[must_use]
    pub const fn player1(&self) -> &Player {
        &self.player1
    }

    /// Returns the second player.
    #[must_use]
    pub const fn player2(&self) -> &Player {
        &self.player2
    }

    /// Awards the ball to the player on the given side.
    pub fn score_point(&mut self, side: Side) {
        match side {
            Side::One => self.player1.score_point(),
            Side::Two => self.player2.score_point(),
        }
    }

    /// Computes the current score of the game from both point counts.
    #[must_use]
    pub fn score(&self) -> Score<'_> {
        let (p1, p2) = (self.player1.points, self.player2.points);

        if p1 == p2 {
            return if p1 < 3 {
                Score::All(Call::from_points(p1))
            } else {
                Score::Deuce
            };
        }

        let leader = if p1 > p2 {
            &self.player1
        } else {
            &self.player2
        };
        let lead = p1.abs_diff(p2);

        // both inside the deuce range: only the lead matters
        if p1.min(p2) >= 3 {
            return if lead == 1 {
                Score::Advantage(leader)
            } else {
                Score::Win(leader)
            };
        }

        // one side below forty and the other past it means a lead of at least two
        if p1.max(p2) >= 4 {
            return Score::Win(leader);
        }

        Score::Running(Call::from_points(p1), Call::from_points(p2))
    }
}

/// The call for a single point count before the deuce range is reached.
#[expect(
    clippy::arbitrary_source_item_ordering,
    reason = "The variants follow the order of the point counts they stand for."
)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Call {
    /// No points.
    Love,
    /// One point.
    Fifteen,
    /// Two points.
    Thirty,
    /// Three points.
    Forty,
}

impl Call {
    /// Maps a point count to its call. Counts past three only appear in the deuce range or in a
    /// won game, where no call is announced, so they all map to forty.
    #[must_use]
    pub const fn from_points(points: u32) -> Self {
        match points {
            0 => Self::Love,
            1 => Self::Fifteen,
            2 => Self::Thirty,
            _ => Self::Forty,
        }
    }
}

impl Display for Call {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let call = match *self {
            Self::Love => "Love",
            Self::Fifteen => "Fifteen",
            Self::Thirty => "Thirty",
            Self::Forty => "Forty",
        };

        write!(f, "{call}")
    }
}

/// This enum holds the score of a game as it gets announced. Displaying it produces the exact
/// text printed after each ball.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Score<'game> {
    /// Both players have the same count below forty. Rendered as e.g. "Fifteen-All".
    All(Call),
    /// One player leads by one point and both have reached forty.
    Advantage(&'game Player),
    /// Both players have the same count of three or more.
    Deuce,
    /// Neither player has reached the deuce range nor won yet. Rendered as "<first>-<second>".
    Running(Call, Call),
    /// The player has won the game.
    Win(&'game Player),
}

impl Score<'_> {
    /// Returns whether this score ends the game.
    #[must_use]
    pub const fn is_win(&self) -> bool {
        matches!(*self, Self::Win(_))
    }
}

impl Display for Score<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Self::All(call) => write!(f, "{call}-All"),
            Self::Advantage(player) => write!(f, "Advantage {}", player.name()),
            Self::Deuce => write!(f, "Deuce"),
            Self::Running(first, second) => write!(f, "{first}-{second}"),
            Self::Win(player) => write!(f, "{} Wins", player.name()),
        }
    }
}

/// This function computes the score for the given point counts in a game between the default
/// "Player 1" and "Player 2".
#[must_use]
pub fn compute_score(p1_points: u32, p2_points: u32) -> String {
    let game = Game::new(
        Player::with_points("Player 1", p1_points),
        Player::with_points("Player 2", p2_points),
    );

    game.score().to_string()
}

#[cfg(test)]
mod tests {
    use super::{compute_score, Call, Game, Player, Side};

    #[test]
    fn new_game_has_default_players_without_points() {
        let game = Game::default();

        assert_eq!(game.player1().name(), "Player 1", "first default name");
        assert_eq!(game.player2().name(), "Player 2", "second default name");
        assert_eq!(game.player1().points(), 0, "first player starts at zero");
        assert_eq!(game.player2().points(), 0, "second player starts at zero");
    }

    #[test]
    fn scoring_a_point_adds_exactly_one() {
        let mut game = Game::default();
        game.score_point(Side::One);
        game.score_point(Side::One);

        assert_eq!(game.player(Side::One).points(), 2, "two points for player one");
        assert_eq!(game.player(Side::Two).points(), 0, "player two untouched");
    }

    #[test]
    fn equal_counts_below_forty_are_all() {
        assert_eq!(compute_score(0, 0), "Love-All", "zero all");
        assert_eq!(compute_score(1, 1), "Fifteen-All", "one all");
        assert_eq!(compute_score(2, 2), "Thirty-All", "two all");
    }

    #[test]
    fn equal_counts_from_forty_are_deuce() {
        for points in [3, 4, 5, 11] {
            assert_eq!(compute_score(points, points), "Deuce", "{points} all");
        }
    }

    #[test]
    fn running_scores_join_both_calls() {
        let cases = [
            (1, 0, "Fifteen-Love"),
            (2, 0, "Thirty-Love"),
            (0, 1, "Love-Fifteen"),
            (0, 2, "Love-Thirty"),
            (1, 2, "Fifteen-Thirty"),
            (2, 1, "Thirty-Fifteen"),
            (3, 0, "Forty-Love"),
            (3, 1, "Forty-Fifteen"),
            (3, 2, "Forty-Thirty"),
            (1, 3, "Fifteen-Forty"),
            (2, 3, "Thirty-Forty"),
        ];

        for (p1, p2, expected) in cases {
            assert_eq!(compute_score(p1, p2), expected, "{p1}-{p2}");
        }
    }

    #[test]
    fn one_point_lead_in_deuce_range_is_advantage() {
        let cases = [
            (6, 5, "Player 1"),
            (5, 6, "Player 2"),
            (9, 10, "Player 2"),
            (4, 3, "Player 1"),
        ];

        for (p1, p2, leader) in cases {
            assert_eq!(compute_score(p1, p2), format!("Advantage {leader}"), "{p1}-{p2}");
        }
    }

    #[test]
    fn two_point_lead_past_forty_wins() {
        let cases = [
            (4, 2, "Player 1"),
            (3, 5, "Player 2"),
            (4, 6, "Player 2"),
            (6, 4, "Player 1"),
            (0, 4, "Player 2"),
            (1, 4, "Player 2"),
            (4, 1, "Player 1"),
            (12, 10, "Player 1"),
        ];

        for (p1, p2, winner) in cases {
            assert_eq!(compute_score(p1, p2), format!("{winner} Wins"), "{p1}-{p2}");
        }
    }

    #[test]
    fn huge_counts_are_scored_directly() {
        assert_eq!(
            compute_score(u32::MAX - 1, u32::MAX),
            "Advantage Player 2",
            "advantage at the top of the range"
        );
        assert_eq!(compute_score(u32::MAX, u32::MAX), "Deuce", "deuce at the top");
        assert_eq!(compute_score(u32::MAX, 0), "Player 1 Wins", "win at the top");
    }

    #[test]
    fn calls_use_the_players_names() {
        let mut game = Game::new(Player::new("Rob"), Player::new("Bob"));
        for _ in 0..3 {
            game.score_point(Side::One);
            game.score_point(Side::Two);
        }
        game.score_point(Side::Two);

        assert_eq!(game.score().to_string(), "Advantage Bob", "advantage call");
        assert!(!game.score().is_win(), "advantage is not a win");

        game.score_point(Side::Two);

        assert_eq!(game.score().to_string(), "Bob Wins", "win call");
        assert!(game.score().is_win(), "game is over");
    }

    #[test]
    fn calls_map_point_counts() {
        assert_eq!(Call::from_points(0), Call::Love, "zero");
        assert_eq!(Call::from_points(3), Call::Forty, "three");
    }
}
