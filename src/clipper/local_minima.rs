/// Bottom vertex of a bound pair. Either bound may be missing when the
/// vertex belongs to an open path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalMinimum {
    pub y: i64,
    pub left_bound: Option<usize>,
    pub right_bound: Option<usize>,
}

/// Local minima sorted by descending y with a cursor over the pending ones.
#[derive(Debug, Default)]
pub struct LocalMinima {
    items: Vec<LocalMinimum>,
    current: usize,
}

impl LocalMinima {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            current: 0,
        }
    }

    /// A new minimum goes before existing ones with the same y.
    pub fn insert(&mut self, y: i64, left_bound: Option<usize>, right_bound: Option<usize>) -> usize {
        let index = self.items.partition_point(|item| item.y > y);

        self.items.insert(
            index,
            LocalMinimum {
                y,
                left_bound,
                right_bound,
            },
        );

        index
    }

    /// y of the next pending minimum.
    pub fn min_y(&self) -> Option<i64> {
        self.items.get(self.current).map(|item| item.y)
    }

    /// Pops the next pending minimum when it sits on row `y`.
    pub fn pop(&mut self, y: i64) -> Option<LocalMinimum> {
        match self.items.get(self.current) {
            Some(item) if item.y == y => {
                self.current += 1;
                Some(*item)
            }
            _ => None,
        }
    }

    pub fn get(&self, index: usize) -> &LocalMinimum {
        &self.items[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocalMinimum> {
        self.items.iter()
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }

    /// No minima left to pop.
    pub fn is_empty(&self) -> bool {
        self.current >= self.items.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn clean(&mut self) {
        self.items.clear();
        self.current = 0;
    }
}
