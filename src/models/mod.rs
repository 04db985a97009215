pub mod day_cell;
pub mod event;
pub mod event_kind;
pub(crate) mod lenient;
pub mod machine;
pub mod maintenance;
pub mod severity;
pub mod user;
