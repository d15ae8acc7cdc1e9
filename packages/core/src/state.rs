//! The job list, its id counter and the reducer over them.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::{Job, JobCommand, JobEvent, JobId, JobStatus};

/// Everything the store owns: the jobs in display order and the next id to hand out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobState {
    jobs: Vec<Job>,
    next_id: JobId,
}

impl JobState {
    /// Create an empty state whose first job gets id 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// The jobs in insertion order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// The id the next created job receives.
    pub fn next_id(&self) -> JobId {
        self.next_id
    }

    /// Look up a job by id.
    pub fn get(&self, id: JobId) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Apply a command in place.
    ///
    /// Returns the resulting event, or `None` when the command changed
    /// nothing. Unknown ids, out-of-order transitions and blank descriptions
    /// are ignored. Creates are refused once the id counter is exhausted,
    /// and a restore whose highest id leaves no successor is rejected.
    pub fn apply(&mut self, command: JobCommand, now: DateTime<Utc>) -> Option<JobEvent> {
        match command {
            JobCommand::Create { description } => {
                if !description.is_valid() {
                    return None;
                }
                let following = self.next_id.next()?;
                let job = Job::new(self.next_id, description, now);
                self.next_id = following;
                self.jobs.push(job.clone());
                Some(JobEvent::Created { job })
            }
            JobCommand::Start { id } => self
                .transition(id, JobStatus::InProgress, now)
                .map(|at| JobEvent::Started { id, at }),
            JobCommand::Finish { id } => self
                .transition(id, JobStatus::Finished, now)
                .map(|at| JobEvent::Finished { id, at }),
            JobCommand::Remove { id } => {
                let index = self.jobs.iter().position(|job| job.id == id)?;
                self.jobs.remove(index);
                Some(JobEvent::Removed { id })
            }
            JobCommand::ReplaceAll { jobs, next_id } => {
                let mut seen = HashSet::new();
                let jobs: Vec<Job> = jobs
                    .into_iter()
                    .filter(|job| seen.insert(job.id))
                    .map(|mut job| {
                        job.updated_at = job.updated_at.max(job.created_at);
                        job
                    })
                    .collect();

                let after_max = match jobs.iter().map(|job| job.id).max() {
                    Some(max) => max.next()?,
                    None => JobId::default(),
                };
                self.next_id = after_max.max(next_id.unwrap_or_default());
                self.jobs = jobs;

                Some(JobEvent::Restored {
                    count: self.jobs.len(),
                    next_id: self.next_id,
                })
            }
        }
    }

    fn transition(
        &mut self,
        id: JobId,
        status: JobStatus,
        now: DateTime<Utc>,
    ) -> Option<DateTime<Utc>> {
        let job = self.jobs.iter_mut().find(|job| job.id == id)?;
        job.advance_to(status, now).then_some(job.updated_at)
    }
}

/// Pure reducer: the state that results from applying `command` at `now`.
pub fn reduce(mut state: JobState, command: JobCommand, now: DateTime<Utc>) -> JobState {
    state.apply(command, now);
    state
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use chrono::TimeZone;

    use super::*;
    use crate::JobDescription;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn create(title: &str) -> JobCommand {
        JobCommand::Create {
            description: JobDescription::new(title, "Radish", 50),
        }
    }

    #[test]
    fn ids_are_distinct_and_increasing() {
        let mut state = JobState::new();
        for n in 0..5 {
            state = reduce(state, create(&format!("job {n}")), at(n));
        }
        let ids: Vec<u64> = state.jobs().iter().map(|job| job.id.0).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
        assert_eq!(state.next_id(), JobId(5));
    }

    #[test]
    fn lifecycle_scenario() {
        let mut state = JobState::new();
        state.apply(create("Landing page"), at(0));
        state.apply(create("Checkout"), at(1));

        let first = state.get(JobId(0)).unwrap();
        assert_eq!(first.status, JobStatus::NotStarted);
        assert_eq!(first.title, "Landing page");

        let started = state.apply(JobCommand::Start { id: JobId(0) }, at(2));
        assert_eq!(started, Some(JobEvent::Started { id: JobId(0), at: at(2) }));
        assert_eq!(state.get(JobId(0)).unwrap().status, JobStatus::InProgress);
        assert_eq!(state.get(JobId(1)).unwrap().status, JobStatus::NotStarted);

        state.apply(JobCommand::Finish { id: JobId(0) }, at(3));
        let finished = state.get(JobId(0)).unwrap();
        assert_eq!(finished.status, JobStatus::Finished);
        assert_eq!(finished.updated_at, at(3));
        assert_eq!(finished.created_at, at(0));

        state.apply(JobCommand::Remove { id: JobId(1) }, at(4));
        assert_eq!(state.len(), 1);
        assert_eq!(state.jobs()[0].id, JobId(0));
        assert_eq!(state.next_id(), JobId(2));
    }

    #[test]
    fn removed_job_ignores_further_commands() {
        let mut state = JobState::new();
        state.apply(create("Landing page"), at(0));
        state.apply(create("Checkout"), at(0));
        state.apply(JobCommand::Remove { id: JobId(0) }, at(1));
        let before = state.clone();

        assert_eq!(state.apply(JobCommand::Start { id: JobId(0) }, at(2)), None);
        assert_eq!(state.apply(JobCommand::Finish { id: JobId(0) }, at(2)), None);
        assert_eq!(state.apply(JobCommand::Remove { id: JobId(0) }, at(2)), None);
        assert_eq!(state, before);
    }

    #[test]
    fn out_of_order_transitions_are_ignored() {
        let mut state = JobState::new();
        state.apply(create("Landing page"), at(0));

        assert_eq!(state.apply(JobCommand::Finish { id: JobId(0) }, at(1)), None);
        assert_eq!(state.get(JobId(0)).unwrap().status, JobStatus::NotStarted);

        state.apply(JobCommand::Start { id: JobId(0) }, at(2));
        state.apply(JobCommand::Finish { id: JobId(0) }, at(3));
        assert_eq!(state.apply(JobCommand::Start { id: JobId(0) }, at(4)), None);
        assert_eq!(state.apply(JobCommand::Finish { id: JobId(0) }, at(5)), None);

        let job = state.get(JobId(0)).unwrap();
        assert_eq!(job.status, JobStatus::Finished);
        assert_eq!(job.updated_at, at(3));
    }

    #[test]
    fn blank_description_does_not_consume_an_id() {
        let mut state = JobState::new();
        let blank = JobCommand::Create {
            description: JobDescription::new(" ", "Radish", 50),
        };
        assert_eq!(state.apply(blank, at(0)), None);
        assert!(state.is_empty());
        assert_eq!(state.next_id(), JobId(0));
    }

    #[test]
    fn replace_all_resets_counter_from_list_and_floor() {
        let mut source = JobState::new();
        for n in 0..3 {
            source.apply(create(&format!("job {n}")), at(n));
        }
        let jobs = source.jobs().to_vec();

        let restored = reduce(
            JobState::new(),
            JobCommand::ReplaceAll {
                jobs: jobs.clone(),
                next_id: None,
            },
            at(10),
        );
        assert_eq!(restored.jobs(), jobs.as_slice());
        assert_eq!(restored.next_id(), JobId(3));

        let with_floor = reduce(
            JobState::new(),
            JobCommand::ReplaceAll {
                jobs: jobs[..1].to_vec(),
                next_id: Some(JobId(3)),
            },
            at(10),
        );
        assert_eq!(with_floor.next_id(), JobId(3));

        let empty = reduce(
            with_floor,
            JobCommand::ReplaceAll {
                jobs: Vec::new(),
                next_id: None,
            },
            at(11),
        );
        assert!(empty.is_empty());
        assert_eq!(empty.next_id(), JobId(0));
    }

    #[test]
    fn replace_all_drops_duplicate_ids() {
        let mut source = JobState::new();
        source.apply(create("first"), at(0));
        let mut jobs = source.jobs().to_vec();
        let mut twin = jobs[0].clone();
        twin.title = "twin".to_string();
        jobs.push(twin);

        let restored = reduce(
            JobState::new(),
            JobCommand::ReplaceAll { jobs, next_id: None },
            at(1),
        );
        assert_eq!(restored.len(), 1);
        assert_eq!(restored.jobs()[0].title, "first");
    }

    #[test]
    fn create_is_refused_once_ids_run_out() {
        let mut state = reduce(
            JobState::new(),
            JobCommand::ReplaceAll {
                jobs: Vec::new(),
                next_id: Some(JobId(u64::MAX)),
            },
            at(0),
        );
        assert_eq!(state.next_id(), JobId(u64::MAX));

        assert_eq!(state.apply(create("one too many"), at(1)), None);
        assert!(state.is_empty());
        assert_eq!(state.next_id(), JobId(u64::MAX));
    }

    #[test]
    fn replace_all_rejects_a_list_holding_the_last_id() {
        let mut source = JobState::new();
        source.apply(create("kept"), at(0));
        let mut last = source.jobs()[0].clone();
        last.id = JobId(u64::MAX);

        let before = source.clone();
        let event = source.apply(
            JobCommand::ReplaceAll {
                jobs: vec![last],
                next_id: None,
            },
            at(1),
        );
        assert_eq!(event, None);
        assert_eq!(source, before);
    }

    #[test]
    fn replace_all_lifts_updated_at_to_created_at() {
        let mut source = JobState::new();
        source.apply(create("skewed"), at(100));
        let mut skewed = source.jobs()[0].clone();
        skewed.updated_at = at(40);

        let mut restored = reduce(
            JobState::new(),
            JobCommand::ReplaceAll {
                jobs: vec![skewed],
                next_id: None,
            },
            at(200),
        );
        let job = &restored.jobs()[0];
        assert_eq!(job.updated_at, job.created_at);

        restored.apply(JobCommand::Start { id: JobId(0) }, at(50));
        let job = &restored.jobs()[0];
        assert!(job.updated_at >= job.created_at);
    }
}
