//! `/users` record generator
//!
//! Each field picks from a table with its own fixed `(multiplier, modulus)`
//! pair, so neighbouring ids look unrelated while staying reproducible.

use indexmap::IndexMap;
use rust_decimal::Decimal;

use super::calendar;
use super::tables::{
    CITIES, COMPANIES, DEPARTMENTS, FIRST_NAMES, LAST_NAMES, POSITIONS, STATES, STREETS, TAGS,
};
use crate::models::{Address, Company, User, UserPreferences};

/// Records returned per call
pub const USER_COUNT: usize = 10_000;

#[inline]
fn pick(table: &'static [&'static str], i: usize, multiplier: usize) -> &'static str {
    table[(i * multiplier) % table.len()]
}

/// Generate the full, ordered user list (ids `1..=USER_COUNT`).
pub fn generate_users() -> Vec<User> {
    (1..=USER_COUNT).map(build_user).collect()
}

/// Build the record for id `i`. Every field is a pure function of `i`.
pub fn build_user(i: usize) -> User {
    let first_name = pick(&FIRST_NAMES, i, 7);
    let last_name = pick(&LAST_NAMES, i, 11);

    let email = format!(
        "{}.{}{}@example.com",
        first_name.to_lowercase(),
        last_name.to_lowercase(),
        i
    );
    let phone_number = format!(
        "+1-{:03}-{:03}-{:04}",
        200 + (i % 800),
        100 + (i % 900),
        1000 + (i % 9000)
    );

    let day_of_year = (i % 365) as u64;
    let age = 25 + (i % 50) as u32;
    let years_at_company = 1 + (i % 15) as u32;

    User {
        id: i as i32,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email,
        phone_number,
        date_of_birth: calendar::years_before(age, day_of_year),
        address: Address {
            street: format!("{} {}", 100 + (i % 9900), pick(&STREETS, i, 17)),
            city: pick(&CITIES, i, 13).to_string(),
            state: pick(&STATES, i, 19).to_string(),
            zip_code: format!("{:05}", 10000 + (i % 89999)),
            country: "USA".to_string(),
        },
        company: Company {
            name: pick(&COMPANIES, i, 23).to_string(),
            department: pick(&DEPARTMENTS, i, 29).to_string(),
            position: pick(&POSITIONS, i, 31).to_string(),
            salary: Decimal::from(40000 + (i % 160000) as u64),
            start_date: calendar::years_after(years_at_company, day_of_year),
        },
        preferences: build_preferences(i),
        metadata: build_metadata(i),
        tags: build_tags(i),
        is_active: i % 10 != 0,
        created_at: calendar::days_after((i % 1825) as u64),
        updated_at: calendar::days_after((1825 + i % 365) as u64),
    }
}

fn build_preferences(i: usize) -> UserPreferences {
    let theme = if i % 2 == 0 { "Dark" } else { "Light" };
    let language = match i % 3 {
        0 => "en",
        1 => "es",
        _ => "fr",
    };
    UserPreferences {
        theme: theme.to_string(),
        language: language.to_string(),
        notifications_enabled: i % 3 != 0,
        newsletter: i % 4 != 0,
        two_factor_enabled: i % 5 == 0,
    }
}

fn build_metadata(i: usize) -> IndexMap<String, String> {
    let account_status = if i % 10 == 0 { "Inactive" } else { "Active" };

    let mut metadata = IndexMap::with_capacity(5);
    metadata.insert(
        "LastLogin".to_string(),
        calendar::round_trip_string(calendar::days_after((i % 730) as u64)),
    );
    metadata.insert("AccountStatus".to_string(), account_status.to_string());
    metadata.insert("VerificationLevel".to_string(), ((i % 3) + 1).to_string());
    metadata.insert("ReferralCode".to_string(), format!("REF{:06}", i));
    metadata.insert(
        "CustomerSince".to_string(),
        calendar::round_trip_string(calendar::months_before((i % 60) as u32)),
    );
    metadata
}

/// `3 + i % 6` consecutive picks from the tag table, first occurrence wins.
fn build_tags(i: usize) -> Vec<String> {
    let picks = 3 + (i % 6);
    let mut tags: Vec<String> = Vec::with_capacity(picks);
    for j in 0..picks {
        let tag = TAGS[(i + j) % TAGS.len()];
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}
