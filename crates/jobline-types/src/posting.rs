//! The inbound posting shape consumed by bulk backfill.

use serde::{Deserialize, Serialize};

/// A job or event posting handed over by the rest of the application.
///
/// Postings are the only input the directory accepts from outside; they are
/// read by the bulk-backfill path and never persisted by this subsystem.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub company_name: String,
    pub location: String,
    pub salary_min: i64,
    pub salary_max: i64,
    /// `true` for event postings (career fairs, open days); these carry no
    /// salary information worth aggregating.
    #[serde(default)]
    pub is_event: bool,
}

impl JobPosting {
    /// Midpoint of the advertised salary band, rounded.
    pub fn salary_midpoint(&self) -> i64 {
        ((self.salary_min + self.salary_max) as f64 / 2.0).round() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting(min: i64, max: i64) -> JobPosting {
        JobPosting {
            id: "p1".into(),
            company_name: "Acme".into(),
            location: "Berlin".into(),
            salary_min: min,
            salary_max: max,
            is_event: false,
        }
    }

    #[test]
    fn midpoint_of_even_band() {
        assert_eq!(posting(40_000, 60_000).salary_midpoint(), 50_000);
    }

    #[test]
    fn midpoint_rounds_half_up() {
        assert_eq!(posting(1, 2).salary_midpoint(), 2);
    }

    #[test]
    fn is_event_defaults_to_false() {
        let json = r#"{"id":"p","company_name":"A","location":"B","salary_min":1,"salary_max":2}"#;
        let parsed: JobPosting = serde_json::from_str(json).unwrap();
        assert!(!parsed.is_event);
    }
}
