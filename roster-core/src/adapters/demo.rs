//! Demo user source
//!
//! Generates randomuser.me-shaped records offline so the directory can be
//! explored (and tested) without network access. Output is deterministic
//! for a given seed.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::domain::result::Result;
use crate::domain::{RawDob, RawLocation, RawName, RawPicture, RawStreet, RawUser};
use crate::ports::{FetchRequest, UserSource};

/// Seed used when demo mode is enabled from settings
pub const DEFAULT_DEMO_SEED: u64 = 1_234;

const FEMALE_NAMES: &[&str] = &[
    "Anna", "Beatrice", "Carmen", "Dolores", "Emma", "Flora", "Grace", "Hazel", "Irene",
    "Judith", "Kelly", "Laura", "Megan", "Nora", "Olivia", "Paula",
];

const MALE_NAMES: &[&str] = &[
    "Aaron", "Ben", "Carl", "Dennis", "Eric", "Frank", "Gary", "Harold", "Ivan", "Jesse",
    "Kyle", "Leon", "Marvin", "Nathan", "Oscar", "Philip",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Stone", "Young", "Hughes", "Reyes", "Carter", "Fowler", "Graham", "Holmes",
    "Jensen", "Kim", "Lawson", "Morales", "Nguyen", "Owens", "Perkins", "Ramos", "Wagner",
];

const PLACES: &[(&str, &str, i64)] = &[
    ("Austin", "Texas", 73301),
    ("Boise", "Idaho", 83702),
    ("Columbus", "Ohio", 43004),
    ("Denver", "Colorado", 80014),
    ("Eugene", "Oregon", 97401),
    ("Fresno", "California", 93650),
    ("Madison", "Wisconsin", 53703),
    ("Raleigh", "North Carolina", 27601),
    ("Savannah", "Georgia", 31401),
    ("Tulsa", "Oklahoma", 74103),
];

const STREETS: &[&str] = &[
    "Oak Lawn Ave", "Pecan Acres Ln", "Hillcrest Rd", "W Sherman Dr", "Lakeshore Rd",
    "Country Club Rd", "Mockingbird Ln", "Valwood Pkwy", "Spring St", "E Little York Rd",
];

/// Generate `count` raw users from `seed`
pub fn generate_demo_users(count: usize, seed: u64) -> Vec<RawUser> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut taken = HashSet::new();
    let mut users = Vec::with_capacity(count);

    while users.len() < count {
        let female = rng.gen_bool(0.5);
        let pool = if female { FEMALE_NAMES } else { MALE_NAMES };
        let first = pool[rng.gen_range(0..pool.len())];
        let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];

        // Name pools hold 576 distinct pairs; past that, fall back to numbered emails.
        let mut email = format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase());
        if !taken.insert(email.clone()) {
            if taken.len() < (FEMALE_NAMES.len() + MALE_NAMES.len()) * LAST_NAMES.len() {
                continue;
            }
            email = format!(
                "{}.{}{}@example.com",
                first.to_lowercase(),
                last.to_lowercase(),
                users.len()
            );
            taken.insert(email.clone());
        }

        let (city, state, postcode) = *PLACES.choose(&mut rng).unwrap_or(&PLACES[0]);
        let street = STREETS[rng.gen_range(0..STREETS.len())];

        users.push(RawUser {
            name: RawName {
                first: first.to_string(),
                last: last.to_string(),
            },
            dob: RawDob {
                date: random_dob(&mut rng),
            },
            phone: format!(
                "({:03})-{:03}-{:04}",
                rng.gen_range(200..1000),
                rng.gen_range(200..1000),
                rng.gen_range(0..10_000)
            ),
            email,
            picture: RawPicture {
                large: format!(
                    "https://randomuser.me/api/portraits/{}/{}.jpg",
                    if female { "women" } else { "men" },
                    rng.gen_range(0..100)
                ),
            },
            location: RawLocation {
                city: city.to_string(),
                state: state.to_string(),
                street: RawStreet {
                    number: rng.gen_range(100..10_000),
                    name: street.to_string(),
                },
                postcode: (postcode + rng.gen_range(0..50)).to_string(),
            },
        });
    }

    users
}

/// Birth timestamp between 1950 and 2001, formatted like the API does
fn random_dob(rng: &mut StdRng) -> String {
    let date = NaiveDate::from_ymd_opt(
        rng.gen_range(1950..2002),
        rng.gen_range(1..=12),
        rng.gen_range(1..=28),
    )
    .unwrap_or_default();
    let time = NaiveTime::from_hms_milli_opt(
        rng.gen_range(0..24),
        rng.gen_range(0..60),
        rng.gen_range(0..60),
        0,
    )
    .unwrap_or_default();
    date.and_time(time).format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// Offline source backed by [`generate_demo_users`]
#[derive(Debug, Clone)]
pub struct DemoUserSource {
    seed: u64,
}

impl DemoUserSource {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl Default for DemoUserSource {
    fn default() -> Self {
        Self::new(DEFAULT_DEMO_SEED)
    }
}

#[async_trait]
impl UserSource for DemoUserSource {
    fn name(&self) -> &str {
        "demo"
    }

    async fn fetch_users(&self, request: &FetchRequest) -> Result<Vec<RawUser>> {
        Ok(generate_demo_users(request.results, self.seed))
    }
}
