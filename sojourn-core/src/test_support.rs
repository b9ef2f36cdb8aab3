//! Fixtures shared by unit, behaviour and property tests.
//!
//! Only compiled for tests or with the `test-support` feature.

use geo::Coord;

use crate::{CITY_CENTRE, Catalog, InterestSet, KM_PER_DEGREE, PlanningRequest, Site};

/// A free, all-day, one hour site at `(lat, lon)` with the given tags.
///
/// # Panics
/// Panics if `tags` is empty or the coordinate is not finite.
#[expect(clippy::expect_used, reason = "fixtures fail loudly on bad input")]
#[must_use]
pub fn site(id: u64, lat: f64, lon: f64, tags: &[&str]) -> Site {
    Site::builder(id, format!("Site {id}"), Coord { x: lon, y: lat })
        .tags(tags.iter().copied())
        .build()
        .expect("fixture site must be valid")
}

/// A request starting at `start_hour` for the given interests.
#[must_use]
pub fn request(budget: f64, total_hours: f64, start_hour: f64, interests: &[&str]) -> PlanningRequest {
    PlanningRequest {
        budget,
        total_hours,
        start_hour,
        interests: interests.iter().collect(),
    }
}

/// The three-site reference scenario.
///
/// | id | site | fee | hours open | visit | tags |
/// |----|------|-----|------------|-------|------|
/// | 1 | Pashupatinath Temple (city centre) | 100 | 6–18 | 1.5 h | culture, religious |
/// | 2 | Swayambhunath Stupa | 200 | 7–17 | 1.5 h | culture, heritage |
/// | 3 | Phewa Lake Pokhara | 0 | 6–18 | 2.0 h | nature, relaxation |
///
/// # Panics
/// Never in practice; the fixture data is valid.
#[expect(clippy::expect_used, reason = "fixture data is known to be valid")]
#[must_use]
pub fn scenario_catalog() -> Catalog {
    let sites = [
        Site::builder(1, "Pashupatinath Temple", CITY_CENTRE)
            .fee(100.0)
            .opening_hours(6.0, 18.0)
            .visit_hours(1.5)
            .tags(["culture", "religious"])
            .build(),
        Site::builder(2, "Swayambhunath Stupa", Coord { x: 85.2906, y: 27.7149 })
            .fee(200.0)
            .opening_hours(7.0, 17.0)
            .visit_hours(1.5)
            .tags(["culture", "heritage"])
            .build(),
        Site::builder(3, "Phewa Lake Pokhara", Coord { x: 83.9856, y: 28.2096 })
            .fee(0.0)
            .opening_hours(6.0, 18.0)
            .visit_hours(2.0)
            .tags(["nature", "relaxation"])
            .build(),
    ]
    .into_iter()
    .collect::<Result<Vec<_>, _>>()
    .expect("scenario sites are valid");
    Catalog::new(sites).expect("scenario ids are unique")
}

/// The reference scenario request: budget 300, 5 hours from 9:00, culture.
#[must_use]
pub fn scenario_request() -> PlanningRequest {
    request(300.0, 5.0, 9.0, &["culture"])
}

/// A catalog where the locally best first choice blocks a better plan.
///
/// Site 1 sits at the city centre, costs 500 and takes 4 hours. Sites 2 and 3
/// lie 2 km north, are free and take 1.5 hours each. All three match
/// `culture` once. With [`trap_request`] greedy selection takes site 1
/// (score 15 against 14) and runs out of time, while visiting sites 2 and 3
/// matches twice.
///
/// # Panics
/// Never in practice; the fixture data is valid.
#[expect(clippy::expect_used, reason = "fixture data is known to be valid")]
#[expect(clippy::float_arithmetic, reason = "offsets sites by two kilometres")]
#[must_use]
pub fn greedy_trap_catalog() -> Catalog {
    let north = Coord {
        x: CITY_CENTRE.x,
        y: CITY_CENTRE.y + 2.0 / KM_PER_DEGREE,
    };
    let sites = [
        Site::builder(1, "Palace", CITY_CENTRE)
            .fee(500.0)
            .visit_hours(4.0)
            .tag("culture")
            .build(),
        Site::builder(2, "North Shrine", north)
            .visit_hours(1.5)
            .tag("culture")
            .build(),
        Site::builder(3, "North Museum", north)
            .visit_hours(1.5)
            .tag("culture")
            .build(),
    ]
    .into_iter()
    .collect::<Result<Vec<_>, _>>()
    .expect("trap sites are valid");
    Catalog::new(sites).expect("trap ids are unique")
}

/// Request paired with [`greedy_trap_catalog`]: budget 600, 5 hours from 9:00.
#[must_use]
pub fn trap_request() -> PlanningRequest {
    request(600.0, 5.0, 9.0, &["culture"])
}

/// Convenience for building an interest set from literals.
#[must_use]
pub fn interests(tags: &[&str]) -> InterestSet {
    tags.iter().collect()
}
