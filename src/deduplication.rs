// 🔍 Duplicate Audit - Detect duplicate companies in a whole collection
// Three strategies, strongest first: Exact Match, Application Conflict, Same Company
//
// The store answers "does this candidate clash with anything?" one record at a
// time. The auditor answers the same question for every pair of a collection,
// e.g. right after a persistence layer rebuilt it.

use crate::company::Company;
use serde::{Deserialize, Serialize};

// ============================================================================
// MATCH STRATEGY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStrategy {
    /// Every field equal, tags included
    ExactMatch,

    /// Same name, role and deadline; other fields differ
    ApplicationConflict,

    /// Same name only
    SameCompany,
}

// ============================================================================
// DUPLICATE MATCH RESULT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateMatch {
    /// Position of the earlier record
    pub first_index: usize,

    /// Position of the later record
    pub second_index: usize,

    /// Which strategy detected this match
    pub strategy: MatchStrategy,

    /// Human-readable reason
    pub reason: String,
}

// ============================================================================
// DUPLICATE AUDITOR
// ============================================================================

#[derive(Debug, Clone)]
pub struct DuplicateAuditor {
    /// Also report pairs that only share a name (default: true)
    pub include_same_company: bool,
}

impl DuplicateAuditor {
    pub fn new() -> Self {
        DuplicateAuditor {
            include_same_company: true,
        }
    }

    /// Only exact matches and application conflicts
    pub fn conflicts_only() -> Self {
        DuplicateAuditor {
            include_same_company: false,
        }
    }

    /// Find all duplicate pairs, each reported once under its strongest strategy
    pub fn find_duplicates(&self, companies: &[Company]) -> Vec<DuplicateMatch> {
        let mut matches = Vec::new();

        for i in 0..companies.len() {
            for j in (i + 1)..companies.len() {
                let first = &companies[i];
                let second = &companies[j];

                if let Some(m) = self.check_exact_match(i, j, first, second) {
                    matches.push(m);
                    continue;
                }

                if let Some(m) = self.check_application_conflict(i, j, first, second) {
                    matches.push(m);
                    continue;
                }

                if self.include_same_company {
                    if let Some(m) = self.check_same_company(i, j, first, second) {
                        matches.push(m);
                    }
                }
            }
        }

        matches
    }

    /// True if any pair conflicts on name, role and deadline (or matches exactly)
    pub fn has_conflicts(&self, companies: &[Company]) -> bool {
        companies.iter().enumerate().any(|(i, first)| {
            companies[i + 1..].iter().any(|second| {
                first.name() == second.name()
                    && first.role() == second.role()
                    && first.deadline() == second.deadline()
            })
        })
    }

    fn check_exact_match(
        &self,
        i: usize,
        j: usize,
        first: &Company,
        second: &Company,
    ) -> Option<DuplicateMatch> {
        if first != second {
            return None;
        }

        Some(DuplicateMatch {
            first_index: i,
            second_index: j,
            strategy: MatchStrategy::ExactMatch,
            reason: format!("Exact match: {}", first.name()),
        })
    }

    fn check_application_conflict(
        &self,
        i: usize,
        j: usize,
        first: &Company,
        second: &Company,
    ) -> Option<DuplicateMatch> {
        if first.name() != second.name()
            || first.role() != second.role()
            || first.deadline() != second.deadline()
        {
            return None;
        }

        Some(DuplicateMatch {
            first_index: i,
            second_index: j,
            strategy: MatchStrategy::ApplicationConflict,
            reason: format!(
                "Application conflict: {} | {} | {}",
                first.name(),
                first.role(),
                first.deadline()
            ),
        })
    }

    fn check_same_company(
        &self,
        i: usize,
        j: usize,
        first: &Company,
        second: &Company,
    ) -> Option<DuplicateMatch> {
        if !first.is_same_company(second) {
            return None;
        }

        Some(DuplicateMatch {
            first_index: i,
            second_index: j,
            strategy: MatchStrategy::SameCompany,
            reason: format!(
                "Same company: {} | {} ≠ {}",
                first.name(),
                first.role(),
                second.role()
            ),
        })
    }
}

impl Default for DuplicateAuditor {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
