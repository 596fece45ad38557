mod detector;
mod outcome;
mod parallel;
mod prober;

pub use detector::{is_absent, strip_tags};
pub use outcome::{ProbeOutcome, ProbeStatus, USERNAME_NOT_ALLOWED};
pub use parallel::Engine;
pub use prober::{HttpResponse, Prober, Transport};
