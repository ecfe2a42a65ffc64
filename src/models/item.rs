//! Item model representing one row of a benchmark table.

use serde::{Deserialize, Serialize};

/// One row of a benchmark table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Item {
    /// Row name (column: "Name")
    #[serde(rename = "Name")]
    pub name: String,

    /// Whether the row is one of the rare flagged rows (column: "IsSpecial")
    #[serde(rename = "IsSpecial")]
    pub is_special: bool,
}

impl Item {
    /// Build the item for a 1-based row index.
    ///
    /// Every `rarity`-th row is special. A rarity of zero never marks a row.
    pub fn at(index: usize, rarity: usize) -> Self {
        Self {
            name: format!("name_{}", index),
            is_special: rarity != 0 && index % rarity == 0,
        }
    }
}

/// Number of special items among `data_size` generated rows.
pub fn expected_special_count(data_size: usize, rarity: usize) -> usize {
    data_size.checked_div(rarity).unwrap_or(0)
}

/// Deterministic generator over rows `1..=data_size`.
#[derive(Debug, Clone)]
pub struct ItemGenerator {
    next: usize,
    data_size: usize,
    rarity: usize,
}

impl ItemGenerator {
    pub fn new(data_size: usize, rarity: usize) -> Self {
        Self {
            next: 1,
            data_size,
            rarity,
        }
    }
}

impl Iterator for ItemGenerator {
    type Item = (usize, Item);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.data_size {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some((index, Item::at(index, self.rarity)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.data_size + 1).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ItemGenerator {}
