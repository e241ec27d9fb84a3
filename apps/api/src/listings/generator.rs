//! Mock job generation.
//!
//! Produces 3–7 listings per search by cyclic indexing over the locale
//! profile's lookup tables. Only the count, the posted date and the salary
//! figures are random.
//!
//! NOTE: values are presentation filler drawn from a non-cryptographic
//! `SmallRng`. Never swap in a cryptographic generator here.

use std::sync::Arc;

use anyhow::anyhow;
use chrono::{DateTime, Duration, Utc};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::errors::AppError;
use crate::listings::locale::LocaleProfile;
use crate::listings::models::JobListing;

pub const MIN_LISTINGS: usize = 3;
pub const MAX_LISTINGS: usize = 7;

const POSTED_WINDOW_MS: f64 = 7.0 * 24.0 * 60.0 * 60.0 * 1000.0;

#[derive(Debug, Clone)]
pub struct MockJobGenerator {
    profile: Arc<LocaleProfile>,
}

impl MockJobGenerator {
    pub fn new(profile: Arc<LocaleProfile>) -> Self {
        Self { profile }
    }

    /// Generates listings using a fresh entropy-seeded `SmallRng` and the
    /// current wall clock.
    pub fn generate(
        &self,
        query: &str,
        location: Option<&str>,
    ) -> Result<Vec<JobListing>, AppError> {
        let mut rng = SmallRng::from_entropy();
        self.generate_with(query, location, &mut rng, Utc::now())
    }

    /// Deterministic core: the RNG and clock are injected.
    pub fn generate_with<R: Rng>(
        &self,
        query: &str,
        location: Option<&str>,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Result<Vec<JobListing>, AppError> {
        if query.is_empty() {
            return Err(AppError::Validation("Search query is required".to_string()));
        }
        self.check_tables()?;

        let profile = self.profile.as_ref();
        let count = rng.gen_range(MIN_LISTINGS..=MAX_LISTINGS);
        let stamp = now.timestamp_millis();
        let description = profile.describe(query);

        let listings = (0..count)
            .map(|i| {
                let category = profile.categories[i % profile.categories.len()];
                let location = match location {
                    Some(loc) => loc.to_string(),
                    None => profile.locations[i % profile.locations.len()].to_string(),
                };

                let offset_ms = (rng.gen::<f64>() * POSTED_WINDOW_MS) as i64;
                let (low, high) = draw_salary(profile, rng);

                let mut listing = JobListing {
                    id: format!("job-{stamp}-{i}"),
                    title: profile.title_style.compose(category, query),
                    company: profile.companies[i % profile.companies.len()].to_string(),
                    location,
                    description: description.clone(),
                    posted_date: now - Duration::milliseconds(offset_ms),
                    salary_range: profile.format_salary(low, high),
                    eligibility: None,
                    application_deadline: None,
                    exam_date: None,
                    vacancies: None,
                };

                if let Some(extra) = &profile.enhanced {
                    let deadline = now
                        + Duration::days(rng.gen_range(extra.deadline_days.0..=extra.deadline_days.1));
                    let exam = deadline
                        + Duration::days(rng.gen_range(extra.exam_gap_days.0..=extra.exam_gap_days.1));
                    listing.eligibility =
                        Some(extra.eligibility[i % extra.eligibility.len()].to_string());
                    listing.application_deadline = Some(deadline);
                    listing.exam_date = Some(exam);
                    listing.vacancies = Some(rng.gen_range(extra.vacancies.0..=extra.vacancies.1));
                }

                listing
            })
            .collect();

        Ok(listings)
    }

    fn check_tables(&self) -> Result<(), AppError> {
        let profile = self.profile.as_ref();
        let tables = [
            ("categories", profile.categories.len()),
            ("companies", profile.companies.len()),
            ("locations", profile.locations.len()),
            (
                "eligibility",
                profile.enhanced.as_ref().map_or(1, |e| e.eligibility.len()),
            ),
        ];
        if let Some((name, _)) = tables.iter().find(|(_, len)| *len == 0) {
            return Err(AppError::Internal(anyhow!(
                "locale profile '{}' has an empty {name} table",
                profile.kind
            )));
        }
        if profile.salary.spread == 0 {
            return Err(AppError::Internal(anyhow!(
                "locale profile '{}' has a zero salary spread",
                profile.kind
            )));
        }
        Ok(())
    }
}

/// Two independent draws, ordered so the range always reads low to high.
fn draw_salary<R: Rng>(profile: &LocaleProfile, rng: &mut R) -> (u64, u64) {
    let bands = profile.salary;
    let low = (bands.low_base + rng.gen_range(0..bands.spread)) * bands.unit;
    let high = (bands.high_base + rng.gen_range(0..bands.spread)) * bands.unit;
    if low <= high {
        (low, high)
    } else {
        (high, low)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::listings::locale::LocaleProfile;

    fn western() -> MockJobGenerator {
        MockJobGenerator::new(Arc::new(LocaleProfile::western()))
    }

    fn indian() -> MockJobGenerator {
        MockJobGenerator::new(Arc::new(LocaleProfile::indian()))
    }

    #[test]
    fn test_count_covers_inclusive_bounds() {
        let generator = western();
        let now = Utc::now();
        let mut seen = BTreeSet::new();
        for seed in 0..200 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let jobs = generator
                .generate_with("Engineer", None, &mut rng, now)
                .unwrap();
            assert!(
                (MIN_LISTINGS..=MAX_LISTINGS).contains(&jobs.len()),
                "seed {seed} produced {} listings",
                jobs.len()
            );
            seen.insert(jobs.len());
        }
        let expected: BTreeSet<usize> = (MIN_LISTINGS..=MAX_LISTINGS).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_every_title_contains_query() {
        for generator in [western(), indian()] {
            let jobs = generator.generate("Data Scientist", None).unwrap();
            assert!(jobs.iter().all(|j| j.title.contains("Data Scientist")));
        }
    }

    #[test]
    fn test_supplied_location_used_verbatim() {
        let jobs = western().generate("Developer", Some("Lisbon, PT")).unwrap();
        assert!(jobs.iter().all(|j| j.location == "Lisbon, PT"));
    }

    #[test]
    fn test_cyclic_indexing_over_tables() {
        let profile = LocaleProfile::western();
        let mut rng = SmallRng::seed_from_u64(7);
        let jobs = western()
            .generate_with("Developer", None, &mut rng, Utc::now())
            .unwrap();

        for (i, job) in jobs.iter().enumerate() {
            assert_eq!(job.company, profile.companies[i % profile.companies.len()]);
            assert_eq!(job.location, profile.locations[i % profile.locations.len()]);
            let expected = format!(
                "{} Developer",
                profile.categories[i % profile.categories.len()]
            );
            assert_eq!(job.title, expected);
        }
    }

    #[test]
    fn test_posted_date_within_last_week() {
        let now = Utc::now();
        let mut rng = SmallRng::seed_from_u64(42);
        let jobs = western()
            .generate_with("Designer", None, &mut rng, now)
            .unwrap();
        for job in &jobs {
            assert!(job.posted_date <= now);
            assert!(job.posted_date >= now - Duration::days(7));
        }
    }

    #[test]
    fn test_ids_carry_timestamp_and_index() {
        let now = Utc::now();
        let mut rng = SmallRng::seed_from_u64(1);
        let jobs = western()
            .generate_with("Designer", None, &mut rng, now)
            .unwrap();
        for (i, job) in jobs.iter().enumerate() {
            assert_eq!(job.id, format!("job-{}-{i}", now.timestamp_millis()));
        }
    }

    #[test]
    fn test_same_seed_is_reproducible() {
        let now = Utc::now();
        let a = western()
            .generate_with("Developer", None, &mut SmallRng::seed_from_u64(9), now)
            .unwrap();
        let b = western()
            .generate_with("Developer", None, &mut SmallRng::seed_from_u64(9), now)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_western_salary_format() {
        let jobs = western().generate("Developer", None).unwrap();
        for job in &jobs {
            assert!(job.salary_range.starts_with('$'), "{}", job.salary_range);
            assert!(job.salary_range.contains(" - $"));
            assert!(job.eligibility.is_none());
        }
    }

    #[test]
    fn test_indian_profile_fills_enhanced_fields() {
        let jobs = indian().generate("Clerk", None).unwrap();
        for job in &jobs {
            assert!(job.salary_range.starts_with('₹'), "{}", job.salary_range);
            assert!(job.eligibility.is_some());
            let deadline = job.application_deadline.unwrap();
            let exam = job.exam_date.unwrap();
            assert!(exam > deadline);
            assert!(job.vacancies.unwrap() >= 10);
        }
    }

    #[test]
    fn test_empty_query_rejected() {
        assert!(matches!(
            western().generate("", None),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_empty_table_is_internal_error() {
        let mut profile = LocaleProfile::western();
        profile.companies.clear();
        let generator = MockJobGenerator::new(Arc::new(profile));
        assert!(matches!(
            generator.generate("Developer", None),
            Err(AppError::Internal(_))
        ));
    }
}
