//! Score, lives and best score for the running session.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ledger {
    pub score: u32,
    pub lives: u32,
    /// Best score seen across sessions.  Only raised by `commit_high_score`.
    pub high_score: u32,
}

impl Ledger {
    pub fn new(high_score: u32) -> Self {
        Self {
            score: 0,
            lives: 0,
            high_score,
        }
    }

    /// Fresh counters for a new session.  The best score is kept.
    pub fn reset(&mut self, lives: u32) {
        self.score = 0;
        self.lives = lives;
    }

    pub fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    pub fn is_depleted(&self) -> bool {
        self.lives == 0
    }

    /// Raise the best score to the current score if it is higher.
    /// Returns `true` when the best score changed.  Safe to call repeatedly.
    pub fn commit_high_score(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }
}
