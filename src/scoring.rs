// src/scoring.rs

//! Learning style scoring.
//!
//! Sums each answer into the category of its question and picks the
//! category with the highest total. Answers to unknown questions are
//! skipped, which tolerates questions removed after users answered them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::category::Category;

/// One (question, value) pair of a user's answer set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: i64,
    pub answer: i32,
}

/// Per-category totals, indexed in `Category::ALL` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryTotals([i64; 4]);

impl CategoryTotals {
    pub fn new(activist: i64, reflector: i64, theorist: i64, pragmatist: i64) -> Self {
        Self([activist, reflector, theorist, pragmatist])
    }

    pub fn get(&self, category: Category) -> i64 {
        self.0[category.index()]
    }

    fn add(&mut self, category: Category, value: i64) {
        self.0[category.index()] += value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, i64)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    pub fn sum(&self) -> i64 {
        self.0.iter().sum()
    }

    /// Category with the strictly highest total; ties go to the earliest
    /// category in `Category::ALL`.
    pub fn dominant(&self) -> Category {
        let mut best = Category::ALL[0];
        for (category, total) in self.iter() {
            if total > self.get(best) {
                best = category;
            }
        }
        best
    }
}

/// Outcome of scoring one answer set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreCard {
    pub totals: CategoryTotals,
    pub dominant: Category,
}

/// Scores an answer set against the question → category mapping.
pub fn compute_result(answers: &[Answer], categories: &HashMap<i64, Category>) -> ScoreCard {
    let mut totals = CategoryTotals::default();

    for a in answers {
        match categories.get(&a.question_id) {
            Some(&category) => totals.add(category, i64::from(a.answer)),
            None => tracing::debug!(
                question_id = a.question_id,
                "Skipping answer for unknown question"
            ),
        }
    }

    ScoreCard {
        dominant: totals.dominant(),
        totals,
    }
}
