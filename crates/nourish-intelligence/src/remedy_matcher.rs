// ABOUTME: Fuzzy matcher from free-text symptom descriptions to home-care remedies
// ABOUTME: Scores conditions with an LCS similarity ratio and learns new conditions on request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The nourish developers

//! Remedy Matcher
//!
//! Input is lowercased and trimmed, then compared against every known condition
//! with `2 * LCS / (len(a) + len(b)) * 100`. The best condition is returned only when
//! it reaches the configured minimum similarity (70 by default).

use nourish_core::errors::{AppError, AppResult};
use nourish_core::models::Remedy;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Best remedy for an input together with its similarity score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemedyMatch {
    /// Matched remedy
    pub remedy: Remedy,
    /// Similarity in percent (0-100)
    pub score: f64,
}

/// Normalize free text before matching
#[must_use]
pub fn clean_input(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Similarity of two strings in percent
#[must_use]
#[allow(clippy::cast_precision_loss)] // Safe: short condition names
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    if a == b {
        return 100.0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let lcs = longest_common_subsequence(&a, &b);
    (2.0 * lcs as f64) / (a.len() + b.len()) as f64 * 100.0
}

// Two rolling rows instead of the full table
fn longest_common_subsequence(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for left in a {
        for (j, right) in b.iter().enumerate() {
            curr[j + 1] = if left == right {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
        curr.fill(0);
    }
    prev[b.len()]
}

/// Closest remedy at or above `min_similarity`, first entry winning ties
#[must_use]
pub fn find_best_match(input: &str, remedies: &[Remedy], min_similarity: u8) -> Option<RemedyMatch> {
    let cleaned = clean_input(input);
    if cleaned.is_empty() {
        return None;
    }

    let mut best: Option<(&Remedy, f64)> = None;
    for remedy in remedies {
        let score = similarity_ratio(&cleaned, &clean_input(&remedy.condition));
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((remedy, score)),
        }
    }

    let (remedy, score) = best?;
    debug!(input = %cleaned, condition = %remedy.condition, score, "Best remedy candidate");
    (score >= f64::from(min_similarity)).then(|| RemedyMatch {
        remedy: remedy.clone(),
        score,
    })
}

/// Record a remedy for a condition the matcher did not recognize
///
/// The condition is stored as the cleaned input so later lookups of the same phrase match exactly.
///
/// # Errors
///
/// Returns `InvalidInput` when the input is blank
pub fn teach(remedies: &mut Vec<Remedy>, input: &str, details: Remedy) -> AppResult<Remedy> {
    let condition = clean_input(input);
    if condition.is_empty() {
        return Err(AppError::invalid_input("Condition must not be empty"));
    }
    let remedy = Remedy {
        condition,
        ..details
    };
    remedies.push(remedy.clone());
    Ok(remedy)
}
