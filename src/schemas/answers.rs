//! Answer types - the values a user picks in each pipeline step

use serde::{Deserialize, Serialize};

/// Top-level listing category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Real estate listing
    Property,
    /// Employment listing
    Job,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Property => write!(f, "property"),
            Category::Job => write!(f, "job"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "property" => Ok(Category::Property),
            "job" => Ok(Category::Job),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

/// Whether the user is offering or looking for something
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Offer,
    Search,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::Offer => write!(f, "offer"),
            Intent::Search => write!(f, "search"),
        }
    }
}

impl std::str::FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "offer" => Ok(Intent::Offer),
            "search" => Ok(Intent::Search),
            _ => Err(format!("Unknown intent: {}", s)),
        }
    }
}

/// Property transaction type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Sale,
    Rent,
}

/// Job employment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Freelance,
    Seasonal,
}

/// When the listing becomes available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Now,
    Future,
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Availability::Now => write!(f, "now"),
            Availability::Future => write!(f, "future"),
        }
    }
}

impl std::str::FromStr for Availability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "now" => Ok(Availability::Now),
            "future" => Ok(Availability::Future),
            _ => Err(format!("Unknown availability: {}", s)),
        }
    }
}

/// Unit for an availability duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Months,
    Years,
}

/// Start date and duration for a listing that becomes available later
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityDetails {
    /// Start date as `YYYY-MM-DD`
    pub date: String,

    /// How long the listing stays available, in `unit`s
    pub duration: u32,

    pub unit: DurationUnit,
}

impl AvailabilityDetails {
    /// Create availability details
    pub fn new(date: impl Into<String>, duration: u32, unit: DurationUnit) -> Self {
        AvailabilityDetails {
            date: date.into(),
            duration,
            unit,
        }
    }
}
