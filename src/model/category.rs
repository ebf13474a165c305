// src/model/category.rs
use std::fmt;

/// The eight stat groupings a team statistics page links to.
/// Declaration order is merge order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Rushing,
    Passing,
    Receiving,
    Sacks,
    Tackles,
    PassesDefended,
    Fumbles,
    Defense,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Rushing,
        Category::Passing,
        Category::Receiving,
        Category::Sacks,
        Category::Tackles,
        Category::PassesDefended,
        Category::Fumbles,
        Category::Defense,
    ];

    /// Link text on the team statistics page.
    pub fn label(self) -> &'static str {
        match self {
            Category::Rushing => "Rushing",
            Category::Passing => "Passing",
            Category::Receiving => "Receiving",
            Category::Sacks => "Sacks",
            Category::Tackles => "Tackles",
            Category::PassesDefended => "Passes Defended",
            Category::Fumbles => "Fumbles",
            Category::Defense => "Defense",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One value per category, indexable by `Category`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PerCategory<T>([T; 8]);

impl<T> PerCategory<T> {
    pub fn get(&self, cat: Category) -> &T {
        &self.0[cat.index()]
    }

    pub fn set(&mut self, cat: Category, value: T) {
        self.0[cat.index()] = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &T)> {
        Category::ALL.into_iter().zip(self.0.iter())
    }

    pub fn into_entries(self) -> impl Iterator<Item = (Category, T)> {
        Category::ALL.into_iter().zip(self.0)
    }
}
