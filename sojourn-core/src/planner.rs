use crate::{Catalog, Itinerary, PlanningRequest};

/// Produce an itinerary from a catalog for a request.
///
/// Planners are infallible: when nothing is feasible they return an empty
/// itinerary. Implementations must be `Send` + `Sync` so a single planner can
/// serve concurrent requests, and must be deterministic for identical input.
///
/// # Examples
/// ```rust
/// use sojourn_core::{Catalog, InterestSet, Itinerary, Planner, PlanningRequest};
///
/// struct StayHome;
///
/// impl Planner for StayHome {
///     fn plan<'c>(&self, _catalog: &'c Catalog, request: &PlanningRequest) -> Itinerary<'c> {
///         Itinerary::empty(request.start_hour, 0.0)
///     }
/// }
///
/// let request = PlanningRequest {
///     budget: 0.0,
///     total_hours: 1.0,
///     start_hour: 9.0,
///     interests: InterestSet::new().with_tag("art"),
/// };
/// assert!(StayHome.plan(&Catalog::kathmandu(), &request).is_empty());
/// ```
pub trait Planner: Send + Sync {
    /// Plan an itinerary for `request` using sites from `catalog`.
    fn plan<'c>(&self, catalog: &'c Catalog, request: &PlanningRequest) -> Itinerary<'c>;
}
