// 🗂️ Company Store - Full collection + filtered view
//
// The store owns two sequences:
// - the full collection, in insertion order (the source of truth)
// - the filtered view, re-derived from the full collection after every
//   mutation using the last-applied predicate and ordering
//
// Because the filtered view is only ever rebuilt from the full collection,
// every filtered record is always present in the full collection.
//
// Single-threaded by construction: all mutation goes through `&mut self`.
// `has_company`/`get_duplicate_company` followed by `add_company` is a
// check-then-act sequence; an embedding that shares the store across threads
// must hold one lock around the whole sequence.

use crate::company::Company;
use crate::error::{RecordError, Result};
use std::cmp::Ordering;
use std::fmt;
use tracing::{debug, warn};

pub type CompanyPredicate = Box<dyn Fn(&Company) -> bool>;
pub type CompanyComparator = Box<dyn Fn(&Company, &Company) -> Ordering>;

// ============================================================================
// MODEL CONTRACT
// ============================================================================

/// Operations a command layer relies on for duplicate handling.
///
/// Uniqueness is never enforced by `add_company`; callers pick a policy by
/// consulting `has_company` (same name) or `get_duplicate_company`
/// (same name, role and deadline) first.
pub trait CompanyModel {
    /// True if any record in the full collection names the same company
    fn has_company(&self, candidate: &Company) -> bool;

    /// First record that conflicts with `candidate` on name, role and deadline.
    ///
    /// A candidate borrowed from the store itself is returned as-is.
    fn get_duplicate_company<'a>(&'a self, candidate: &'a Company) -> Option<&'a Company>;

    /// Append to the full collection without any uniqueness check
    fn add_company(&mut self, company: Company);

    /// Mark a record of the full collection as the one currently on display
    fn set_current_viewed_company(&mut self, company: &Company) -> Result<()>;

    /// Position of a fully-equal record in the full collection
    fn get_duplicate_index_from_original_addressbook(&self, company: &Company) -> Option<usize>;

    /// Position of a fully-equal record in the filtered view
    fn get_duplicate_index_from_filtered_addressbook(&self, company: &Company) -> Option<usize>;
}

// ============================================================================
// COMPANY STORE
// ============================================================================

pub struct CompanyStore {
    /// Full collection, insertion order
    companies: Vec<Company>,

    /// Derived view; never mutated except by `refresh_filtered`
    filtered: Vec<Company>,

    /// Last-applied filter (None = show everything)
    predicate: Option<CompanyPredicate>,

    /// Last-applied ordering for the filtered view (None = collection order)
    comparator: Option<CompanyComparator>,

    /// Index into `companies`; cleared when that record is removed
    current_viewed: Option<usize>,
}

impl CompanyStore {
    /// Create an empty store
    pub fn new() -> Self {
        CompanyStore {
            companies: Vec::new(),
            filtered: Vec::new(),
            predicate: None,
            comparator: None,
            current_viewed: None,
        }
    }

    /// Rebuild a store from a previously persisted collection, order preserved
    pub fn with_companies<I>(companies: I) -> Self
    where
        I: IntoIterator<Item = Company>,
    {
        let mut store = CompanyStore::new();
        store.companies = companies.into_iter().collect();
        store.refresh_filtered();
        debug!(total = store.companies.len(), "company store reconstructed");
        store
    }

    /// Full collection in insertion order
    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    /// Filtered view as of the last mutation
    pub fn filtered_companies(&self) -> &[Company] {
        &self.filtered
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    pub fn current_viewed_company(&self) -> Option<&Company> {
        self.current_viewed.and_then(|index| self.companies.get(index))
    }

    pub fn clear_current_viewed_company(&mut self) {
        self.current_viewed = None;
    }

    /// Remove the first record fully equal to `target`
    pub fn delete_company(&mut self, target: &Company) -> Result<Company> {
        let index = self.position_of(target, "delete")?;
        let removed = self.companies.remove(index);

        self.current_viewed = match self.current_viewed {
            Some(current) if current == index => None,
            Some(current) if current > index => Some(current - 1),
            other => other,
        };

        self.refresh_filtered();
        debug!(name = %removed.name(), total = self.companies.len(), "company deleted");
        Ok(removed)
    }

    /// Replace `target` with `edited` at the same position.
    ///
    /// No uniqueness check; callers decide whether `edited` may collide.
    pub fn set_company(&mut self, target: &Company, edited: Company) -> Result<()> {
        let index = self.position_of(target, "replace")?;
        debug!(from = %target.name(), to = %edited.name(), index, "company replaced");
        self.companies[index] = edited;
        self.refresh_filtered();
        Ok(())
    }

    /// Apply a new filter; the view is re-derived immediately and after every later mutation
    pub fn update_filtered_company_list<F>(&mut self, predicate: F)
    where
        F: Fn(&Company) -> bool + 'static,
    {
        self.predicate = Some(Box::new(predicate));
        self.refresh_filtered();
        debug!(shown = self.filtered.len(), total = self.companies.len(), "filter applied");
    }

    /// Reorder the filtered view; the ordering sticks until `show_all_companies`
    pub fn sort_filtered_company_list<F>(&mut self, comparator: F)
    where
        F: Fn(&Company, &Company) -> Ordering + 'static,
    {
        self.comparator = Some(Box::new(comparator));
        self.refresh_filtered();
    }

    /// Drop filter and ordering so the view mirrors the full collection
    pub fn show_all_companies(&mut self) {
        self.predicate = None;
        self.comparator = None;
        self.refresh_filtered();
    }

    /// Every filtered record is present, fully equal, in the full collection
    pub fn filtered_view_is_contained(&self) -> bool {
        self.filtered
            .iter()
            .all(|shown| self.companies.contains(shown))
    }

    fn refresh_filtered(&mut self) {
        let mut filtered: Vec<Company> = match &self.predicate {
            Some(predicate) => self
                .companies
                .iter()
                .filter(|company| predicate(*company))
                .cloned()
                .collect(),
            None => self.companies.clone(),
        };

        if let Some(comparator) = &self.comparator {
            filtered.sort_by(|a, b| comparator(a, b));
        }

        self.filtered = filtered;
    }

    fn position_of(&self, target: &Company, operation: &str) -> Result<usize> {
        self.companies
            .iter()
            .position(|company| company == target)
            .ok_or_else(|| {
                warn!(name = %target.name(), operation, "company not in store");
                RecordError::PreconditionViolation(format!(
                    "cannot {operation} {}: not in the full collection",
                    target.name()
                ))
            })
    }

    fn holds(&self, candidate: &Company) -> bool {
        self.companies
            .iter()
            .chain(self.filtered.iter())
            .any(|stored| std::ptr::eq(stored, candidate))
    }
}

impl CompanyModel for CompanyStore {
    fn has_company(&self, candidate: &Company) -> bool {
        self.companies
            .iter()
            .any(|company| company.is_same_company(candidate))
    }

    fn get_duplicate_company<'a>(&'a self, candidate: &'a Company) -> Option<&'a Company> {
        if self.holds(candidate) {
            return Some(candidate);
        }

        self.companies.iter().find(|company| {
            company.name() == candidate.name()
                && company.role() == candidate.role()
                && company.deadline() == candidate.deadline()
        })
    }

    fn add_company(&mut self, company: Company) {
        debug!(name = %company.name(), "company added");
        self.companies.push(company);
        self.refresh_filtered();
    }

    fn set_current_viewed_company(&mut self, company: &Company) -> Result<()> {
        let index = self.position_of(company, "view")?;
        self.current_viewed = Some(index);
        Ok(())
    }

    fn get_duplicate_index_from_original_addressbook(&self, company: &Company) -> Option<usize> {
        self.companies.iter().position(|stored| stored == company)
    }

    fn get_duplicate_index_from_filtered_addressbook(&self, company: &Company) -> Option<usize> {
        self.filtered.iter().position(|shown| shown == company)
    }
}

impl Default for CompanyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CompanyStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompanyStore")
            .field("companies", &self.companies)
            .field("filtered", &self.filtered)
            .field("filtered_by_predicate", &self.predicate.is_some())
            .field("sorted", &self.comparator.is_some())
            .field("current_viewed", &self.current_viewed)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
