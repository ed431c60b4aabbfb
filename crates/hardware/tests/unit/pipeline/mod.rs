/// Branches, wrong-path squashing, and redirect behavior.
pub mod control;
/// Run-time faults and their surfaced errors.
pub mod faults;
/// End-to-end program scenarios.
pub mod scenarios;
