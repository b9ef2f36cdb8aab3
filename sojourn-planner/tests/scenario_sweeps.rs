//! Budget and horizon sweeps over the reference scenario.
//!
//! The tables pin the greedy planner's choices as the request loosens and
//! check the exhaustive planner stays feasible across the same grid.

use rstest::rstest;
use sojourn_core::test_support::{greedy_trap_catalog, request, scenario_catalog};
use sojourn_core::{Planner, verify_itinerary};
use sojourn_planner::{ExhaustivePlanner, GreedyPlanner, plan_trip};

#[rstest]
#[case::nothing_to_spend(0.0, &[3], 0)]
#[case::temple_only(100.0, &[1, 3], 1)]
#[case::stupa_out_of_reach(200.0, &[1, 3], 1)]
#[case::both_culture_sites(300.0, &[1, 2], 2)]
#[case::generous(1000.0, &[1, 2], 2)]
fn greedy_budget_sweep(#[case] budget: f64, #[case] expected: &[u64], #[case] interest: usize) {
    let catalog = scenario_catalog();
    let sweep_request = request(budget, 5.0, 9.0, &["culture"]);
    let itinerary = GreedyPlanner::new().plan(&catalog, &sweep_request);

    assert_eq!(itinerary.site_ids(), expected);
    assert_eq!(itinerary.interest_match(&sweep_request.interests), interest);
    assert_eq!(verify_itinerary(&itinerary, &sweep_request), Ok(()));
}

#[rstest]
#[case::too_short(1.0, &[], 0)]
#[case::one_visit(2.0, &[1], 1)]
#[case::two_visits(3.5, &[1, 2], 2)]
#[case::whole_day(8.0, &[1, 2, 3], 2)]
fn greedy_hours_sweep(#[case] hours: f64, #[case] expected: &[u64], #[case] interest: usize) {
    let catalog = scenario_catalog();
    let sweep_request = request(300.0, hours, 9.0, &["culture"]);
    let itinerary = GreedyPlanner::new().plan(&catalog, &sweep_request);

    assert_eq!(itinerary.site_ids(), expected);
    assert_eq!(itinerary.interest_match(&sweep_request.interests), interest);
}

#[rstest]
fn exhaustive_keeps_up_across_the_sweep(
    #[values(0.0, 100.0, 200.0, 300.0, 1000.0)] budget: f64,
    #[values(1.0, 2.0, 3.5, 5.0, 8.0)] hours: f64,
) {
    let catalog = scenario_catalog();
    let sweep_request = request(budget, hours, 9.0, &["culture"]);
    let plan = plan_trip(&catalog, &sweep_request);

    assert_eq!(verify_itinerary(&plan.exhaustive, &sweep_request), Ok(()));
    assert!(plan.comparison.exhaustive.time_used_hours <= hours);
}

#[rstest]
fn greedy_horizon_ignores_the_final_buffer() {
    // Two 1.5 hour visits with one buffer between them take 3.3 hours; the
    // exhaustive planner also charges the trailing buffer and needs 3.6.
    let catalog = scenario_catalog();
    let plan = plan_trip(&catalog, &request(300.0, 3.5, 9.0, &["culture"]));

    assert_eq!(plan.greedy.site_ids(), vec![1, 2]);
    assert_eq!(plan.exhaustive.site_ids(), vec![1]);
    assert_eq!(plan.comparison.interest_gap(), -1);
}

#[rstest]
fn exhaustive_best_interest_grows_with_budget() {
    let catalog = scenario_catalog();
    let planner = ExhaustivePlanner::new();
    let totals: Vec<usize> = [0.0, 100.0, 200.0, 300.0, 1000.0]
        .into_iter()
        .map(|budget| {
            let sweep_request = request(budget, 5.0, 9.0, &["culture"]);
            planner
                .plan(&catalog, &sweep_request)
                .interest_match(&sweep_request.interests)
        })
        .collect();

    assert_eq!(totals, vec![0, 1, 1, 2, 2]);
}

#[rstest]
fn greedy_can_lose_interest_when_the_budget_grows() {
    // With Rs. 600 the Palace outscores both shrines and uses up the day.
    let catalog = greedy_trap_catalog();
    let planner = GreedyPlanner::new();
    let tight = request(400.0, 5.0, 9.0, &["culture"]);
    let loose = request(600.0, 5.0, 9.0, &["culture"]);

    let tight_plan = planner.plan(&catalog, &tight);
    let loose_plan = planner.plan(&catalog, &loose);

    assert_eq!(tight_plan.site_ids(), vec![2, 3]);
    assert_eq!(loose_plan.site_ids(), vec![1]);
    assert!(
        loose_plan.interest_match(&loose.interests) < tight_plan.interest_match(&tight.interests)
    );
}
