//! Synthetic data seeding
//!
//! Generates a reproducible employee population from a fixed RNG seed and
//! loads it together with one default preset. Seeding is a no-op once any
//! employee exists.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use utoipa::ToSchema;

use crate::data::filters::{Filter, FilterLogic};
use crate::data::types::{EmployeeRow, PresetInput};
use crate::data::{DataError, DirectoryRepository};
use crate::utils::time::SECS_PER_DAY;

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Priya", "Wei", "Fatima", "Carlos", "Aisha", "Kenji", "Olga", "Mateo",
    "Noor", "Lars",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Wilson", "Anderson", "Thomas", "Taylor", "Moore", "Jackson",
    "Martin", "Lee", "Patel", "Chen", "Khan", "Silva", "Okafor", "Tanaka", "Ivanova", "Nguyen",
    "Haddad", "Larsen",
];

/// (department, positions, salary floor, salary ceiling)
const DEPARTMENTS: &[(&str, &[&str], u32, u32)] = &[
    (
        "Engineering",
        &["Software Engineer", "Senior Engineer", "Staff Engineer", "Engineering Manager"],
        70_000,
        190_000,
    ),
    (
        "Sales",
        &["Account Executive", "Sales Representative", "Sales Manager"],
        45_000,
        140_000,
    ),
    (
        "Marketing",
        &["Marketing Specialist", "Content Strategist", "Marketing Manager"],
        50_000,
        130_000,
    ),
    ("HR", &["HR Generalist", "Recruiter", "HR Manager"], 45_000, 115_000),
    (
        "Finance",
        &["Accountant", "Financial Analyst", "Finance Manager"],
        55_000,
        150_000,
    ),
    (
        "Operations",
        &["Operations Analyst", "Logistics Coordinator", "Operations Manager"],
        40_000,
        120_000,
    ),
    (
        "Support",
        &["Support Specialist", "Support Engineer", "Support Lead"],
        35_000,
        90_000,
    ),
];

const LOCATIONS: &[&str] = &[
    "New York",
    "San Francisco",
    "Austin",
    "Chicago",
    "London",
    "Berlin",
    "Toronto",
    "Remote",
];

/// Fixed RNG seed so every fresh database gets the same population
pub const SEED_RNG: u64 = 0x5EED_D1AE;

/// Earliest generated hire date (2010-01-01T00:00:00Z)
const HIRE_DATE_START: i64 = 1_262_304_000;

/// Share of the population that can be referenced as a manager
const MANAGER_POOL_DIVISOR: usize = 10;

/// Result of a seed request
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SeedReport {
    pub message: String,
    /// Employees in the database after the request
    pub employees: u64,
    /// Presets in the database after the request
    pub presets: u64,
}

fn status(rng: &mut StdRng) -> &'static str {
    match rng.gen_range(0..100) {
        0..80 => "Active",
        80..90 => "On Leave",
        _ => "Inactive",
    }
}

/// Generate `count` employees with business ids `EMP0001`, `EMP0002`, ...
pub fn generate_employees(count: usize, rng_seed: u64, now: i64) -> Vec<EmployeeRow> {
    let mut rng = StdRng::seed_from_u64(rng_seed);
    let manager_pool = (count / MANAGER_POOL_DIVISOR).max(1);
    let hire_date_end = now.max(HIRE_DATE_START + SECS_PER_DAY);

    let mut employees = Vec::with_capacity(count);
    for n in 1..=count {
        let first_name = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
        let last_name = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
        let (department, positions, floor, ceiling) =
            DEPARTMENTS[rng.gen_range(0..DEPARTMENTS.len())];
        let position = positions.choose(&mut rng).copied().unwrap_or("Associate");
        let location = LOCATIONS.choose(&mut rng).copied().unwrap_or("Remote");

        // Salaries rounded to the nearest hundred
        let salary = f64::from(rng.gen_range(floor / 100..=ceiling / 100) * 100);
        let hire_date = rng.gen_range(HIRE_DATE_START..hire_date_end);
        let hire_date = hire_date - hire_date.rem_euclid(SECS_PER_DAY);

        // The first tenth report to nobody; everyone else may report to one of them
        let manager = if n > manager_pool && rng.gen_bool(0.9) {
            Some(format!("EMP{:04}", rng.gen_range(1..=manager_pool)))
        } else {
            None
        };

        employees.push(EmployeeRow {
            id: cuid2::create_id(),
            employee_id: format!("EMP{:04}", n),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: format!(
                "{}.{}{}@company.com",
                first_name.to_lowercase(),
                last_name.to_lowercase(),
                n
            ),
            department: department.to_string(),
            position: position.to_string(),
            salary,
            hire_date,
            status: status(&mut rng).to_string(),
            location: location.to_string(),
            age: rng.gen_range(22..=64),
            phone: format!(
                "555-{:03}-{:04}",
                rng.gen_range(100..1000),
                rng.gen_range(0..10_000)
            ),
            manager,
            created_at: now,
            updated_at: now,
        });
    }
    employees
}

/// The preset loaded alongside the seeded employees
pub fn starter_preset() -> PresetInput {
    PresetInput {
        name: "Active Engineering".to_string(),
        filters: vec![
            Filter::new("department", "equals", "Engineering"),
            Filter::new("status", "equals", "Active"),
        ],
        logic: FilterLogic::And,
        is_default: true,
    }
}

/// Seed the directory unless it already holds employees
pub async fn seed_directory(
    repo: &dyn DirectoryRepository,
    count: usize,
) -> Result<SeedReport, DataError> {
    let now = chrono::Utc::now().timestamp();
    let employees = generate_employees(count, SEED_RNG, now);

    let seeded = repo.seed_directory(&employees, &starter_preset()).await?;
    let message = if seeded {
        tracing::info!(employees = count, "Database seeded");
        "Database seeded successfully"
    } else {
        tracing::debug!("Seed skipped, employees already exist");
        "Database already seeded"
    };

    Ok(SeedReport {
        message: message.to_string(),
        employees: repo.count_employees().await?,
        presets: repo.count_presets().await?,
    })
}
