//! The fixed set of spending categories and their display metadata.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// What a transaction was for.
///
/// The set is closed and not user-editable. [Category::ALL] lists every
/// variant in display order, which is also the order of the category breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Food,
    Travel,
    Shopping,
    Bills,
    Entertainment,
    Other,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Travel,
        Category::Shopping,
        Category::Bills,
        Category::Entertainment,
        Category::Other,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Travel => "Travel",
            Category::Shopping => "Shopping",
            Category::Bills => "Bills",
            Category::Entertainment => "Entertainment",
            Category::Other => "Other",
        }
    }

    /// The hex colour used for this category in charts and legends.
    pub fn color(self) -> &'static str {
        match self {
            Category::Food => "#ef4444",
            Category::Travel => "#f59e0b",
            Category::Shopping => "#8b5cf6",
            Category::Bills => "#10b981",
            Category::Entertainment => "#06b6d4",
            Category::Other => "#6b7280",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::Food => "🍽️",
            Category::Travel => "✈️",
            Category::Shopping => "🛒",
            Category::Bills => "📄",
            Category::Entertainment => "🎬",
            Category::Other => "📦",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
