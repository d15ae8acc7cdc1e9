//! Injects the job store into the component tree.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use job_core::{Job, JobDescription, JobId};
use job_store::{JobStore, PersistenceBridge};
use storage::Storage;

use super::actions::{PendingAction, RowAction};

/// Store handle shared through context.
///
/// Components read `jobs`, a signal mirrored from the store by a
/// subscription, and mutate only through the store operations below.
#[derive(Clone)]
pub struct JobsContext {
    store: Rc<RefCell<JobStore>>,
    jobs: Signal<Vec<Job>>,
}

impl JobsContext {
    /// Current job list. Reading subscribes the calling component.
    pub fn jobs(&self) -> Vec<Job> {
        self.jobs.read().clone()
    }

    pub fn create_job(&self, description: JobDescription) {
        self.store.borrow_mut().create_job(description);
    }

    pub fn start_job(&self, id: JobId) {
        self.store.borrow_mut().start_job(id);
    }

    pub fn finish_job(&self, id: JobId) {
        self.store.borrow_mut().finish_job(id);
    }

    pub fn remove_job(&self, id: JobId) {
        self.store.borrow_mut().remove_job(id);
    }

    /// Run a confirmed row action.
    pub fn perform(&self, pending: PendingAction) {
        match pending.action {
            RowAction::Start => self.start_job(pending.id),
            RowAction::Finish => self.finish_job(pending.id),
            RowAction::Remove => self.remove_job(pending.id),
        }
    }
}

/// Get the job store from context. Must be rendered under [`JobStoreProvider`].
pub fn use_jobs() -> JobsContext {
    use_context::<JobsContext>()
}

/// Creates the store once, restores it from the platform storage, and
/// provides it to `children`.
#[component]
pub fn JobStoreProvider(children: Element) -> Element {
    let store = use_hook(|| {
        let mut store = JobStore::new();
        let bridge = PersistenceBridge::new(Storage::open_default());
        let kind = bridge.storage().kind();
        let outcome = bridge.attach(&mut store);
        tracing::info!("Job store opened on {} storage: {:?}", kind, outcome);
        Rc::new(RefCell::new(store))
    });

    let jobs = use_signal(|| store.borrow().snapshot());

    let subscription = use_hook({
        let store = Rc::clone(&store);
        move || {
            let mut jobs = jobs;
            store
                .borrow_mut()
                .subscribe(move |state, _event| jobs.set(state.jobs().to_vec()))
        }
    });

    use_drop({
        let store = Rc::clone(&store);
        move || {
            store.borrow_mut().unsubscribe(subscription);
        }
    });

    use_context_provider(|| JobsContext {
        store: Rc::clone(&store),
        jobs,
    });

    rsx! {
        {children}
    }
}
