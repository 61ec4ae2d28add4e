use std::collections::HashMap;

/// Tracks how many times each block name has been seen within one container, so blocks sharing
/// a name get distinct, table-ordered occurrence numbers.
#[derive(Debug, Default)]
pub struct BlockNames {
    occurrences: HashMap<String, u32>,
}

impl BlockNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the occurrence number for `name`: 0 the first time, then 1, 2, ...
    pub fn next(&mut self, name: &str) -> u32 {
        match self.occurrences.get_mut(name) {
            Some(last) => {
                *last += 1;
                *last
            }
            None => {
                self.occurrences.insert(name.to_string(), 0);
                0
            }
        }
    }
}
