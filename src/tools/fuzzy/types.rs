use serde::{Deserialize, Serialize};

/// A maximal run of characters common to both strings.
///
/// `a` and `b` are start offsets (in chars) into the first and second
/// string; `size` is the run length.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MatchBlock {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

impl MatchBlock {
    pub fn a_end(&self) -> usize {
        self.a + self.size
    }

    pub fn b_end(&self) -> usize {
        self.b + self.size
    }
}
