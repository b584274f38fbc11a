/// Ascending x positions of local maxima met on the current row. Only
/// filled when output must be strictly simple.
#[derive(Debug, Default)]
pub struct Maxima {
    values: Vec<i64>,
}

impl Maxima {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub fn insert(&mut self, x: i64) {
        if let Err(index) = self.values.binary_search(&x) {
            self.values.insert(index, x);
        }
    }

    pub fn get(&self, index: usize) -> i64 {
        self.values[index]
    }

    /// Index of the first maximum right of `x`.
    pub fn first_right_of(&self, x: i64) -> usize {
        self.values.partition_point(|value| *value <= x)
    }

    /// Index of the last maximum at or left of `x`, if any.
    pub fn last_left_of(&self, x: i64) -> Option<usize> {
        self.values.partition_point(|value| *value <= x).checked_sub(1)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clean(&mut self) {
        self.values.clear();
    }
}
