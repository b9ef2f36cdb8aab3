//! Bounded depth-first enumeration of site orderings.
//!
//! The search walks orderings of the capped catalog prefix as a tree: each
//! node appends one unused site to its parent's ordering. Budget, horizon and
//! opening-hour constraints only ever get harder as an ordering grows, so a
//! node that breaks one is dropped together with its whole subtree.
//!
//! Orderings are ranked by [`Best::outranks`]: more interest matches, then
//! more visits, then the lexicographically smallest index sequence. The
//! ranking is a total order, so the winner does not depend on the order in
//! which branches are explored or merged.

use std::cmp::Ordering;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::time::Instant;

use sojourn_core::{InterestSet, PlanningRequest, Site};

/// Evaluations between deadline checks.
const CLOCK_CHECK_INTERVAL: u32 = 1024;

/// Per-site figures the search needs, precomputed once.
#[derive(Debug, Clone, Copy)]
pub(super) struct Candidate {
    fee: f64,
    visit_hours: f64,
    span_hours: f64,
    open: f64,
    close: f64,
    matches: usize,
}

impl Candidate {
    #[expect(
        clippy::float_arithmetic,
        reason = "span adds the travel buffer to the visit duration"
    )]
    pub(super) fn new(site: &Site, interests: &InterestSet, travel_buffer_hours: f64) -> Self {
        let opening = site.opening();
        Self {
            fee: site.fee(),
            visit_hours: site.visit_hours(),
            span_hours: site.visit_hours() + travel_buffer_hours,
            open: opening.open(),
            close: opening.close(),
            matches: interests.match_count(site),
        }
    }
}

/// Limits every ordering must respect.
#[derive(Debug, Clone, Copy)]
pub(super) struct Limits {
    pub(super) budget: f64,
    pub(super) total_hours: f64,
    pub(super) start_hour: f64,
}

impl From<&PlanningRequest> for Limits {
    fn from(request: &PlanningRequest) -> Self {
        Self {
            budget: request.budget,
            total_hours: request.total_hours,
            start_hour: request.start_hour,
        }
    }
}

/// The highest-ranked ordering seen so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct Best {
    pub(super) interest: usize,
    pub(super) order: Vec<usize>,
}

impl Best {
    /// Compare two candidates; `Greater` means `self` ranks higher.
    fn rank(&self, other: &Self) -> Ordering {
        self.interest
            .cmp(&other.interest)
            .then_with(|| self.order.len().cmp(&other.order.len()))
            .then_with(|| other.order.cmp(&self.order))
    }

    /// Report whether `self` should replace `other`.
    pub(super) fn outranks(&self, other: &Self) -> bool {
        self.rank(other) == Ordering::Greater
    }

    /// Keep whichever of the two ranks higher.
    pub(super) fn merge(self, other: Self) -> Self {
        if other.outranks(&self) { other } else { self }
    }
}

/// Result of searching one or more branches.
#[derive(Debug, Clone, Default)]
pub(super) struct BranchResult {
    pub(super) best: Best,
    pub(super) evaluated: u64,
}

impl BranchResult {
    pub(super) fn merge(self, other: Self) -> Self {
        Self {
            best: self.best.merge(other.best),
            evaluated: self.evaluated.saturating_add(other.evaluated),
        }
    }
}

/// Shared cancellation state for a single search.
#[derive(Debug)]
pub(super) struct Deadline {
    at: Option<Instant>,
    expired: AtomicBool,
}

impl Deadline {
    pub(super) const fn new(at: Option<Instant>) -> Self {
        Self {
            at,
            expired: AtomicBool::new(false),
        }
    }

    /// Report whether the deadline has passed, consulting the clock.
    fn check(&self) -> bool {
        if self.has_expired() {
            return true;
        }
        let passed = self.at.is_some_and(|at| Instant::now() >= at);
        if passed {
            self.expired.store(true, AtomicOrdering::Relaxed);
        }
        passed
    }

    /// Report whether any branch has observed the deadline passing.
    pub(super) fn has_expired(&self) -> bool {
        self.expired.load(AtomicOrdering::Relaxed)
    }
}

/// Running totals for the ordering on the stack.
#[derive(Debug, Clone, Copy)]
struct Totals {
    fee: f64,
    elapsed_hours: f64,
    clock_hour: f64,
    interest: usize,
}

struct Searcher<'a> {
    candidates: &'a [Candidate],
    limits: Limits,
    deadline: &'a Deadline,
    used: Vec<bool>,
    order: Vec<usize>,
    best: Best,
    evaluated: u64,
    until_clock_check: u32,
}

impl<'a> Searcher<'a> {
    fn new(candidates: &'a [Candidate], limits: Limits, deadline: &'a Deadline) -> Self {
        Self {
            candidates,
            limits,
            deadline,
            used: vec![false; candidates.len()],
            order: Vec::with_capacity(candidates.len()),
            best: Best::default(),
            evaluated: 0,
            until_clock_check: 0,
        }
    }

    /// Totals after appending `candidate`, or `None` when that breaks a
    /// constraint.
    #[expect(
        clippy::float_arithmetic,
        reason = "constraint checks accumulate fees and hours"
    )]
    fn append(&self, totals: Totals, candidate: &Candidate) -> Option<Totals> {
        let fee = totals.fee + candidate.fee;
        if fee > self.limits.budget {
            return None;
        }
        let elapsed_hours = totals.elapsed_hours + candidate.span_hours;
        if elapsed_hours > self.limits.total_hours {
            return None;
        }
        let clock = totals.clock_hour;
        if clock < candidate.open || clock + candidate.visit_hours > candidate.close {
            return None;
        }
        Some(Totals {
            fee,
            elapsed_hours,
            clock_hour: clock + candidate.span_hours,
            interest: totals.interest + candidate.matches,
        })
    }

    fn should_stop(&mut self) -> bool {
        if self.until_clock_check == 0 {
            self.until_clock_check = CLOCK_CHECK_INTERVAL;
            return self.deadline.check();
        }
        self.until_clock_check -= 1;
        self.deadline.has_expired()
    }

    /// Push `index`, record the ordering and explore its extensions.
    fn visit(&mut self, index: usize, totals: Totals) {
        let Some(candidate) = self.candidates.get(index) else {
            return;
        };
        let Some(next) = self.append(totals, candidate) else {
            return;
        };
        self.evaluated = self.evaluated.saturating_add(1);
        self.order.push(index);
        if let Some(flag) = self.used.get_mut(index) {
            *flag = true;
        }

        let contender = Best {
            interest: next.interest,
            order: self.order.clone(),
        };
        if contender.outranks(&self.best) {
            self.best = contender;
        }

        if !self.should_stop() {
            for child in 0..self.candidates.len() {
                if self.used.get(child).copied().unwrap_or(true) {
                    continue;
                }
                self.visit(child, next);
                if self.deadline.has_expired() {
                    break;
                }
            }
        }

        self.order.pop();
        if let Some(flag) = self.used.get_mut(index) {
            *flag = false;
        }
    }
}

/// Search every ordering whose first site is `first`.
pub(super) fn search_branch(
    candidates: &[Candidate],
    limits: Limits,
    deadline: &Deadline,
    first: usize,
) -> BranchResult {
    let mut searcher = Searcher::new(candidates, limits, deadline);
    let totals = Totals {
        fee: 0.0,
        elapsed_hours: 0.0,
        clock_hour: limits.start_hour,
        interest: 0,
    };
    searcher.visit(first, totals);
    BranchResult {
        best: searcher.best,
        evaluated: searcher.evaluated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn best(interest: usize, order: &[usize]) -> Best {
        Best {
            interest,
            order: order.to_vec(),
        }
    }

    #[rstest]
    #[case::more_interest(best(3, &[4]), best(2, &[0, 1]))]
    #[case::longer(best(2, &[2, 3]), best(2, &[0]))]
    #[case::lexicographically_smaller(best(2, &[0, 3]), best(2, &[1, 0]))]
    #[case::anything_beats_nothing(best(0, &[5]), Best::default())]
    fn ranking_orders_interest_then_length_then_indices(
        #[case] winner: Best,
        #[case] loser: Best,
    ) {
        assert!(winner.outranks(&loser));
        assert!(!loser.outranks(&winner));
        assert_eq!(loser.clone().merge(winner.clone()), winner);
        assert_eq!(winner.clone().merge(loser), winner);
    }

    #[rstest]
    fn identical_candidates_do_not_outrank_each_other() {
        let a = best(1, &[0, 2]);
        assert!(!a.outranks(&a.clone()));
    }

    #[rstest]
    fn deadline_without_instant_never_expires() {
        let deadline = Deadline::new(None);
        assert!(!deadline.check());
        assert!(!deadline.has_expired());
    }

    #[rstest]
    fn past_deadline_expires_on_check() {
        let deadline = Deadline::new(Some(Instant::now()));
        assert!(deadline.check());
        assert!(deadline.has_expired());
    }
}
