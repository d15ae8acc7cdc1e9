//! In-progress input of the job creation form.

use job_core::JobDescription;

/// Rate the form starts with.
pub const DEFAULT_HOURLY: u32 = 50;

/// Raw field values as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDraft {
    pub title: String,
    pub client: String,
    pub hourly: String,
}

impl Default for JobDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            client: String::new(),
            hourly: DEFAULT_HOURLY.to_string(),
        }
    }
}

impl JobDraft {
    /// Submission is allowed once title and client are filled in.
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty() && !self.client.trim().is_empty()
    }

    /// The hourly field as a whole rate of at least 1.
    ///
    /// Unparseable input falls back to [`DEFAULT_HOURLY`]; fractions round.
    pub fn hourly_rate(&self) -> u32 {
        match self.hourly.trim().parse::<f64>() {
            Ok(rate) if rate.is_finite() => rate.round().clamp(1.0, f64::from(u32::MAX)) as u32,
            _ => DEFAULT_HOURLY,
        }
    }

    pub fn to_description(&self) -> Option<JobDescription> {
        if !self.is_valid() {
            return None;
        }
        Some(JobDescription::new(
            self.title.trim(),
            self.client.trim(),
            self.hourly_rate(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, client: &str, hourly: &str) -> JobDraft {
        JobDraft {
            title: title.to_string(),
            client: client.to_string(),
            hourly: hourly.to_string(),
        }
    }

    #[test]
    fn starts_empty_at_default_rate() {
        let empty = JobDraft::default();
        assert!(!empty.is_valid());
        assert_eq!(empty.hourly_rate(), 50);
        assert_eq!(empty.to_description(), None);
    }

    #[test]
    fn needs_both_title_and_client() {
        assert!(!draft("Landing page", "", "50").is_valid());
        assert!(!draft("", "Radish", "50").is_valid());
        assert!(!draft("  ", "Radish", "50").is_valid());
        assert!(draft("Landing page", "Radish", "50").is_valid());
    }

    #[test]
    fn builds_trimmed_description() {
        let description = draft(" Landing page ", "Radish\n", "75").to_description();
        assert_eq!(
            description,
            Some(JobDescription::new("Landing page", "Radish", 75))
        );
    }

    #[test]
    fn hourly_is_at_least_one() {
        assert_eq!(draft("a", "b", "0").hourly_rate(), 1);
        assert_eq!(draft("a", "b", "-20").hourly_rate(), 1);
        assert_eq!(draft("a", "b", "42.6").hourly_rate(), 43);
        assert_eq!(draft("a", "b", "").hourly_rate(), DEFAULT_HOURLY);
        assert_eq!(draft("a", "b", "lots").hourly_rate(), DEFAULT_HOURLY);
    }
}
