//! Vocabulary sets shipped inside the binary.

use vocab_core::Word;

/// A bundled set: identifier, display title and raw JSON word list.
#[derive(Debug, Clone, Copy)]
pub struct ShippedSet {
    pub set_id: &'static str,
    pub title: &'static str,
    json: &'static str,
}

const SHIPPED: &[ShippedSet] = &[
    ShippedSet {
        set_id: "food",
        title: "Thức ăn và Đồ uống",
        json: include_str!("../assets/food.json"),
    },
    ShippedSet {
        set_id: "health",
        title: "Sức khỏe",
        json: include_str!("../assets/health.json"),
    },
    ShippedSet {
        set_id: "sports",
        title: "Thể thao",
        json: include_str!("../assets/sports.json"),
    },
    ShippedSet {
        set_id: "travel",
        title: "Du lịch",
        json: include_str!("../assets/travel.json"),
    },
    ShippedSet {
        set_id: "house",
        title: "Nhà cửa",
        json: include_str!("../assets/house.json"),
    },
];

/// Read-only catalog of shipped sets.
#[derive(Debug, Clone)]
pub struct Catalog {
    sets: Vec<ShippedSet>,
}

impl Catalog {
    /// The catalog compiled into the application.
    pub fn shipped() -> Self {
        Self {
            sets: SHIPPED.to_vec(),
        }
    }

    /// Build a catalog from explicit entries.
    pub fn from_sets(sets: Vec<(&'static str, &'static str, &'static str)>) -> Self {
        Self {
            sets: sets
                .into_iter()
                .map(|(set_id, title, json)| ShippedSet { set_id, title, json })
                .collect(),
        }
    }

    pub fn sets(&self) -> &[ShippedSet] {
        &self.sets
    }

    pub fn get(&self, set_id: &str) -> Option<&ShippedSet> {
        self.sets.iter().find(|s| s.set_id == set_id)
    }

    pub fn contains(&self, set_id: &str) -> bool {
        self.get(set_id).is_some()
    }

    /// Words of a shipped set in file order.
    ///
    /// Unknown ids and unreadable files yield an empty list.
    pub fn words(&self, set_id: &str) -> Vec<Word> {
        let Some(set) = self.get(set_id) else {
            return Vec::new();
        };
        match serde_json::from_str::<Vec<Word>>(set.json) {
            Ok(words) => words,
            Err(e) => {
                tracing::warn!(set_id, "failed to read shipped set: {}", e);
                Vec::new()
            }
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::shipped()
    }
}
