//! Column sorting for the job table.

use std::cmp::Ordering;

use job_core::Job;

/// A sortable table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Id,
    Title,
    Client,
    Hourly,
    Status,
    CreatedAt,
    UpdatedAt,
}

impl SortColumn {
    /// Data columns in display order.
    pub const ALL: [SortColumn; 7] = [
        SortColumn::Id,
        SortColumn::Title,
        SortColumn::Client,
        SortColumn::Hourly,
        SortColumn::Status,
        SortColumn::CreatedAt,
        SortColumn::UpdatedAt,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortColumn::Id => "ID",
            SortColumn::Title => "Title",
            SortColumn::Client => "Client",
            SortColumn::Hourly => "Hourly",
            SortColumn::Status => "Status",
            SortColumn::CreatedAt => "Created At",
            SortColumn::UpdatedAt => "Updated At",
        }
    }

    /// Ascending comparison of two jobs on this column.
    ///
    /// Status compares by its display text.
    pub fn compare(&self, a: &Job, b: &Job) -> Ordering {
        match self {
            SortColumn::Id => a.id.cmp(&b.id),
            SortColumn::Title => a.title.cmp(&b.title),
            SortColumn::Client => a.client.cmp(&b.client),
            SortColumn::Hourly => a.hourly.cmp(&b.hourly),
            SortColumn::Status => a.status.as_str().cmp(b.status.as_str()),
            SortColumn::CreatedAt => a.created_at.cmp(&b.created_at),
            SortColumn::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortOrder::Asc => "▲",
            SortOrder::Desc => "▼",
        }
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: SortColumn,
    pub order: SortOrder,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: SortColumn::Id,
            order: SortOrder::Desc,
        }
    }
}

impl SortState {
    /// State after a click on `column`'s header.
    ///
    /// Clicking the active descending column flips it to ascending; any
    /// other click sorts that column descending.
    pub fn toggle(self, column: SortColumn) -> Self {
        let order = if self.column == column && self.order == SortOrder::Desc {
            SortOrder::Asc
        } else {
            SortOrder::Desc
        };
        Self { column, order }
    }

    /// Sort in place. Stable: equal values keep their relative order.
    pub fn apply(&self, jobs: &mut [Job]) {
        let column = self.column;
        match self.order {
            SortOrder::Asc => jobs.sort_by(|a, b| column.compare(a, b)),
            SortOrder::Desc => jobs.sort_by(|a, b| column.compare(b, a)),
        }
    }

    pub fn sorted(&self, jobs: &[Job]) -> Vec<Job> {
        let mut jobs = jobs.to_vec();
        self.apply(&mut jobs);
        jobs
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use chrono::{TimeZone, Utc};
    use job_core::{JobDescription, JobId, JobStatus};

    use super::*;

    fn job(id: u64, title: &str, client: &str, hourly: u32, status: JobStatus) -> Job {
        let at = Utc.timestamp_opt(1_700_000_000 + id as i64 * 60, 0).unwrap();
        let mut job = Job::new(JobId(id), JobDescription::new(title, client, hourly), at);
        job.status = status;
        job
    }

    fn sample() -> Vec<Job> {
        vec![
            job(0, "Landing page", "Radish", 50, JobStatus::Finished),
            job(1, "Checkout", "Acme", 80, JobStatus::NotStarted),
            job(2, "Branding", "Radish", 65, JobStatus::InProgress),
            job(3, "Copywriting", "Acme", 35, JobStatus::NotStarted),
        ]
    }

    fn ids(jobs: &[Job]) -> Vec<u64> {
        jobs.iter().map(|job| job.id.0).collect()
    }

    #[test]
    fn defaults_to_newest_first() {
        assert_eq!(ids(&SortState::default().sorted(&sample())), vec![3, 2, 1, 0]);
    }

    #[test]
    fn toggle_flips_same_column_and_resets_new_one() {
        let state = SortState::default();
        let asc = state.toggle(SortColumn::Id);
        assert_eq!(asc.order, SortOrder::Asc);
        assert_eq!(asc.toggle(SortColumn::Id).order, SortOrder::Desc);

        let by_title = asc.toggle(SortColumn::Title);
        assert_eq!(by_title.column, SortColumn::Title);
        assert_eq!(by_title.order, SortOrder::Desc);
    }

    #[test]
    fn numbers_compare_numerically_and_text_lexically() {
        let by_hourly = SortState {
            column: SortColumn::Hourly,
            order: SortOrder::Asc,
        };
        assert_eq!(ids(&by_hourly.sorted(&sample())), vec![3, 0, 2, 1]);

        let by_title = SortState {
            column: SortColumn::Title,
            order: SortOrder::Asc,
        };
        assert_eq!(ids(&by_title.sorted(&sample())), vec![2, 1, 3, 0]);

        let by_status = SortState {
            column: SortColumn::Status,
            order: SortOrder::Asc,
        };
        assert_eq!(ids(&by_status.sorted(&sample())), vec![0, 2, 1, 3]);
    }

    #[test]
    fn ties_keep_list_order_in_both_directions() {
        let asc = SortState {
            column: SortColumn::Client,
            order: SortOrder::Asc,
        };
        assert_eq!(ids(&asc.sorted(&sample())), vec![1, 3, 0, 2]);

        let desc = SortState {
            column: SortColumn::Client,
            order: SortOrder::Desc,
        };
        assert_eq!(ids(&desc.sorted(&sample())), vec![0, 2, 1, 3]);
    }

    #[test]
    fn resorting_is_idempotent() {
        for column in SortColumn::ALL {
            for order in [SortOrder::Asc, SortOrder::Desc] {
                let state = SortState { column, order };
                let once = state.sorted(&sample());
                assert_eq!(state.sorted(&once), once);
            }
        }
    }

    #[test]
    fn descending_reverses_ascending_on_unique_values() {
        for column in [SortColumn::Id, SortColumn::Title, SortColumn::Hourly, SortColumn::CreatedAt] {
            let asc = SortState {
                column,
                order: SortOrder::Asc,
            }
            .sorted(&sample());
            let mut desc = SortState {
                column,
                order: SortOrder::Desc,
            }
            .sorted(&sample());
            desc.reverse();
            assert_eq!(asc, desc);
        }
    }
}
