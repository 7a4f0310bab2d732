use crate::players::PlayerRecord;
use crate::shuffle::{is_permutation, shuffle};

/// One play-through of a loaded data set: a fixed random order, the current
/// position in it and whether the answer is showing.
#[derive(Debug, Clone)]
pub struct Session {
    data: Vec<PlayerRecord>,
    order: Vec<usize>,
    position: usize,
    revealed: bool,
    clubs_scroll: u16,
}

impl Session {
    pub fn new(data: Vec<PlayerRecord>, order: Vec<usize>) -> Option<Self> {
        if data.is_empty() || !is_permutation(&order, data.len()) {
            return None;
        }
        Some(Self {
            data,
            order,
            position: 0,
            revealed: false,
            clubs_scroll: 0,
        })
    }

    pub fn start(data: Vec<PlayerRecord>) -> Option<Self> {
        let order = shuffle(data.len());
        Self::new(data, order)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn clubs_scroll(&self) -> u16 {
        self.clubs_scroll
    }

    pub fn current(&self) -> &PlayerRecord {
        &self.data[self.order[self.position]]
    }

    pub fn clubs(&self) -> &[String] {
        &self.current().clubs
    }

    /// The player's name, only once revealed.
    pub fn answer(&self) -> Option<&str> {
        self.revealed.then(|| self.current().name.as_str())
    }

    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    /// Moves to the next player, wrapping to the start of the same order.
    pub fn next(&mut self) {
        self.position = (self.position + 1) % self.data.len();
        self.revealed = false;
        self.clubs_scroll = 0;
    }

    pub fn scroll_clubs_down(&mut self, visible: usize) {
        let max_scroll = self.clubs().len().saturating_sub(visible);
        let max_scroll = u16::try_from(max_scroll).unwrap_or(u16::MAX);
        if self.clubs_scroll < max_scroll {
            self.clubs_scroll += 1;
        }
    }

    pub fn scroll_clubs_up(&mut self) {
        self.clubs_scroll = self.clubs_scroll.saturating_sub(1);
    }
}
