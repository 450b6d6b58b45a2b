use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// How much of a clue has been shown so far. Only ever moves forward.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RevealState {
    #[default]
    Hidden,
    Question,
    Answer,
}

impl RevealState {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Answer)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    question: String,
    answer: String,
    showing: RevealState,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            showing: RevealState::Hidden,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn showing(&self) -> RevealState {
        self.showing
    }

    fn reveal(&mut self) -> Option<Revealed<'_>> {
        let (text, state) = match self.showing {
            RevealState::Hidden => (&self.question, RevealState::Question),
            RevealState::Question => (&self.answer, RevealState::Answer),
            RevealState::Answer => return None,
        };
        self.showing = state;
        Some(Revealed { text, state })
    }
}

impl From<ClueData> for Clue {
    fn from(data: ClueData) -> Self {
        Self::new(data.question, data.answer)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    pub fn new(title: impl Into<String>, clues: impl IntoIterator<Item = Clue>) -> Self {
        Self {
            title: title.into(),
            clues: clues.into_iter().collect(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }
}

/// Text that a reveal put on display, along with the clue's new state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Revealed<'a> {
    pub text: &'a str,
    pub state: RevealState,
}

/// All categories of one game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    config: GameConfig,
    categories: Vec<Category>,
}

impl Board {
    /// Builds a board, checking that it has exactly the configured shape and that nothing has been revealed yet.
    pub fn new(config: GameConfig, categories: Vec<Category>) -> Result<Self> {
        let clues_per_category = usize::from(config.clues_per_category);

        if categories.len() != usize::from(config.categories) {
            return Err(GameError::InvalidBoardShape);
        }
        for category in &categories {
            if category.clues.len() != clues_per_category {
                return Err(GameError::InvalidBoardShape);
            }
            if category.clues.iter().any(|clue| !clue.showing.is_hidden()) {
                return Err(GameError::InvalidBoardShape);
            }
        }

        Ok(Self { config, categories })
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn clues_per_category(&self) -> usize {
        self.config.clues_per_category.into()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn clue_at(&self, coords: Coord2) -> Result<&Clue> {
        let (category, clue) = self.validate_coords(coords)?;
        Ok(&self.categories[usize::from(category)].clues[usize::from(clue)])
    }

    pub fn state_at(&self, coords: Coord2) -> Result<RevealState> {
        self.clue_at(coords).map(Clue::showing)
    }

    /// Advances the clue at `coords` one step and returns the text now showing.
    ///
    /// `Hidden` shows the question, `Question` shows the answer, and an answered clue is left alone with `Ok(None)`.
    pub fn reveal(&mut self, coords: Coord2) -> Result<Option<Revealed<'_>>> {
        let (category, clue) = self.validate_coords(coords)?;
        let clue = &mut self.categories[usize::from(category)].clues[usize::from(clue)];
        Ok(clue.reveal())
    }

    pub fn iter_clues(&self) -> impl Iterator<Item = (Coord2, &Clue)> {
        self.categories
            .iter()
            .zip(0..Coord::MAX)
            .flat_map(|(category, x)| {
                category.clues.iter().zip(0..Coord::MAX).map(move |(clue, y)| ((x, y), clue))
            })
    }

    pub fn revealed_count(&self) -> CellCount {
        self.iter_clues()
            .filter(|(_, clue)| !clue.showing.is_hidden())
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }

    /// Every clue is showing its answer.
    pub fn is_exhausted(&self) -> bool {
        self.iter_clues().all(|(_, clue)| clue.showing.is_terminal())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec;

    pub(crate) fn board(config: GameConfig) -> Board {
        let categories = (0..config.categories)
            .map(|x| {
                let clues = (0..config.clues_per_category)
                    .map(|y| Clue::new(format!("q{x}-{y}"), format!("a{x}-{y}")));
                Category::new(format!("c{x}"), clues)
            })
            .collect();
        Board::new(config, categories).unwrap()
    }

    #[test]
    fn fresh_board_is_all_hidden() {
        let board = board(GameConfig::default());

        assert_eq!(board.category_count(), 5);
        assert!(board.categories().iter().all(|c| c.clues().len() == 5));
        assert!(board.iter_clues().all(|(_, clue)| clue.showing() == RevealState::Hidden));
        assert_eq!(board.revealed_count(), 0);
    }

    #[test]
    fn reveal_walks_question_then_answer_then_stops() {
        let mut board = board(GameConfig::default());

        let first = board.reveal((0, 0)).unwrap().unwrap();
        assert_eq!(first.text, "q0-0");
        assert_eq!(first.state, RevealState::Question);
        assert_eq!(board.state_at((0, 0)).unwrap(), RevealState::Question);

        let second = board.reveal((0, 0)).unwrap().unwrap();
        assert_eq!(second.text, "a0-0");
        assert_eq!(second.state, RevealState::Answer);

        assert_eq!(board.reveal((0, 0)).unwrap(), None);
        assert_eq!(board.state_at((0, 0)).unwrap(), RevealState::Answer);
    }

    #[test]
    fn answered_clue_stays_answered() {
        let mut board = board(GameConfig::default());
        board.reveal((2, 3)).unwrap();
        board.reveal((2, 3)).unwrap();

        for _ in 0..10 {
            assert_eq!(board.reveal((2, 3)).unwrap(), None);
        }
        assert_eq!(board.state_at((2, 3)).unwrap(), RevealState::Answer);
    }

    #[test]
    fn reveal_only_touches_its_own_clue() {
        let mut board = board(GameConfig::default());

        board.reveal((1, 4)).unwrap();

        assert_eq!(board.revealed_count(), 1);
        assert_eq!(board.state_at((1, 3)).unwrap(), RevealState::Hidden);
        assert_eq!(board.state_at((4, 1)).unwrap(), RevealState::Hidden);
    }

    #[test]
    fn states_only_move_forward() {
        let mut board = board(GameConfig::new(2, 2, 2));
        let clicks = [(0, 0), (1, 1), (0, 0), (0, 1), (0, 0), (1, 1), (1, 1), (0, 1)];
        let mut previous = vec![RevealState::Hidden; 4];

        for coords in clicks {
            board.reveal(coords).unwrap();
            for ((x, y), clue) in board.iter_clues() {
                let slot = &mut previous[usize::from(x) * 2 + usize::from(y)];
                assert!(clue.showing() >= *slot);
                *slot = clue.showing();
            }
        }
    }

    #[test]
    fn out_of_range_reveal_is_invalid_coords() {
        let mut board = board(GameConfig::default());

        assert_eq!(board.reveal((5, 0)), Err(GameError::InvalidCoords));
        assert_eq!(board.reveal((0, 5)), Err(GameError::InvalidCoords));
        assert_eq!(board.revealed_count(), 0);
    }

    #[test]
    fn board_rejects_wrong_shape() {
        let config = GameConfig::new(2, 2, 2);
        let short = vec![
            Category::new("a", [Clue::new("q", "a"), Clue::new("q", "a")]),
            Category::new("b", [Clue::new("q", "a")]),
        ];
        assert_eq!(Board::new(config, short), Err(GameError::InvalidBoardShape));

        let missing = vec![Category::new("a", [Clue::new("q", "a"), Clue::new("q", "a")])];
        assert_eq!(Board::new(config, missing), Err(GameError::InvalidBoardShape));
    }

    #[test]
    fn exhausted_after_every_answer() {
        let mut board = board(GameConfig::new(2, 1, 2));
        assert!(!board.is_exhausted());

        for coords in [(0, 0), (0, 0), (1, 0), (1, 0)] {
            board.reveal(coords).unwrap();
        }

        assert!(board.is_exhausted());
    }
}
