//! Locale profiles: the configuration bundle that selects lookup tables,
//! title phrasing, currency symbol and numeral grouping for generation.
//!
//! Two built-in profiles exist. `Western` mirrors a US tech job board;
//! `Indian` mirrors a government recruitment board and turns on the
//! enhanced notice fields (eligibility, deadline, exam date, vacancies).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    Western,
    Indian,
}

#[derive(Debug, Error)]
#[error("unknown locale profile '{0}' (expected 'western' or 'indian')")]
pub struct UnknownProfile(String);

impl FromStr for ProfileKind {
    type Err = UnknownProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "western" | "us" => Ok(ProfileKind::Western),
            "indian" | "in" => Ok(ProfileKind::Indian),
            other => Err(UnknownProfile(other.to_string())),
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileKind::Western => write!(f, "western"),
            ProfileKind::Indian => write!(f, "indian"),
        }
    }
}

/// Where the category label goes relative to the caller's query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleStyle {
    /// "Senior Developer"
    Prefix,
    /// "Developer - Civil Services"
    Suffix,
}

impl TitleStyle {
    pub fn compose(&self, category: &str, query: &str) -> String {
        match self {
            TitleStyle::Prefix => format!("{category} {query}"),
            TitleStyle::Suffix => format!("{query} - {category}"),
        }
    }
}

/// Digit grouping convention for salary figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberingSystem {
    /// 1,234,567
    Western,
    /// 12,34,567 (lakh / crore)
    Indian,
}

impl NumberingSystem {
    pub fn group(&self, value: u64) -> String {
        let digits = value.to_string();
        if digits.len() <= 3 {
            return digits;
        }

        let (head, tail) = digits.split_at(digits.len() - 3);
        let step = match self {
            NumberingSystem::Western => 3,
            NumberingSystem::Indian => 2,
        };

        // Group the head from the right, `step` digits at a time.
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(step);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();

        format!("{},{}", groups.join(","), tail)
    }
}

/// Salary figure = (base + uniform[0, spread)) * unit, drawn independently
/// for the low and the high end.
#[derive(Debug, Clone, Copy)]
pub struct SalaryBands {
    pub low_base: u64,
    pub high_base: u64,
    pub spread: u64,
    pub unit: u64,
}

/// Optional notice fields emitted by enhanced profiles.
#[derive(Debug, Clone)]
pub struct EnhancedFields {
    pub eligibility: Vec<&'static str>,
    /// Deadline is `now + uniform[min, max]` days.
    pub deadline_days: (i64, i64),
    /// Exam date is `deadline + uniform[min, max]` days.
    pub exam_gap_days: (i64, i64),
    pub vacancies: (u32, u32),
}

#[derive(Debug, Clone)]
pub struct LocaleProfile {
    pub kind: ProfileKind,
    pub categories: Vec<&'static str>,
    pub companies: Vec<&'static str>,
    pub locations: Vec<&'static str>,
    pub title_style: TitleStyle,
    /// `{query}` is replaced with the lowercased query.
    pub description_template: &'static str,
    pub currency_symbol: &'static str,
    pub numbering: NumberingSystem,
    pub salary: SalaryBands,
    pub enhanced: Option<EnhancedFields>,
}

impl LocaleProfile {
    pub fn from_kind(kind: ProfileKind) -> Self {
        match kind {
            ProfileKind::Western => Self::western(),
            ProfileKind::Indian => Self::indian(),
        }
    }

    pub fn western() -> Self {
        LocaleProfile {
            kind: ProfileKind::Western,
            categories: vec!["Senior", "Junior", "Lead", "Principal", "Staff"],
            companies: vec![
                "Tech Innovations Inc.",
                "Global Solutions Corp",
                "StartUp Ventures",
                "Enterprise Systems Ltd",
                "Remote Work Hub",
                "Digital Dynamics",
                "Future Tech Labs",
                "Cloud Computing Co.",
            ],
            locations: vec![
                "Remote",
                "San Francisco, CA",
                "New York, NY",
                "Austin, TX",
                "Seattle, WA",
                "Boston, MA",
            ],
            title_style: TitleStyle::Prefix,
            description_template: "Exciting opportunity for {query} role. Join our team and work \
                on innovative projects with cutting-edge technology.",
            currency_symbol: "$",
            numbering: NumberingSystem::Western,
            salary: SalaryBands {
                low_base: 60,
                high_base: 100,
                spread: 100,
                unit: 1_000,
            },
            enhanced: None,
        }
    }

    pub fn indian() -> Self {
        LocaleProfile {
            kind: ProfileKind::Indian,
            categories: vec![
                "Civil Services",
                "Clerical Cadre",
                "Technical Posts",
                "Officer Grade",
                "Group A/B/C/D",
            ],
            companies: vec![
                "Union Public Service Commission (UPSC)",
                "Staff Selection Commission (SSC)",
                "Railway Recruitment Board (RRB)",
                "Institute of Banking Personnel Selection (IBPS)",
                "State Public Service Commission",
                "Defence Recruitment",
                "Central Government Ministry",
                "State Government Department",
            ],
            locations: vec![
                "All India",
                "Delhi",
                "Mumbai",
                "Bangalore",
                "Kolkata",
                "Chennai",
                "Hyderabad",
                "Multiple Locations",
            ],
            title_style: TitleStyle::Suffix,
            description_template: "Applications invited for {query} positions. Government \
                opportunity with excellent career growth and benefits. Educational \
                qualifications and age criteria apply.",
            currency_symbol: "₹",
            numbering: NumberingSystem::Indian,
            salary: SalaryBands {
                low_base: 3,
                high_base: 6,
                spread: 10,
                unit: 100_000,
            },
            enhanced: Some(EnhancedFields {
                eligibility: vec![
                    "Graduate in any discipline",
                    "12th pass from a recognised board",
                    "Engineering degree or diploma",
                    "Post-graduate degree",
                    "10th pass with ITI certificate",
                ],
                deadline_days: (7, 45),
                exam_gap_days: (30, 90),
                vacancies: (10, 2_500),
            }),
        }
    }

    /// Formats a salary pair as `{sym}{low} - {sym}{high}` in this profile's
    /// numbering system.
    pub fn format_salary(&self, low: u64, high: u64) -> String {
        format!(
            "{sym}{} - {sym}{}",
            self.numbering.group(low),
            self.numbering.group(high),
            sym = self.currency_symbol
        )
    }

    pub fn describe(&self, query: &str) -> String {
        self.description_template
            .replace("{query}", &query.to_lowercase())
    }
}

impl Default for LocaleProfile {
    fn default() -> Self {
        Self::western()
    }
}
