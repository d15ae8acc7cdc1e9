//! Page components for route-based navigation.

mod job_man_page;

pub use job_man_page::JobManPage;
