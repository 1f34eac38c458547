//! Circulation engine for a small lending catalog.

pub mod catalog;
pub mod circulation;
pub mod core;
pub mod engine;
pub mod hold;
pub mod notify;
pub mod patrons;
pub mod utils;

pub use crate::circulation::dto::LoanDto;
pub use crate::core::domain::Configuration;
pub use crate::core::events::{Notice, NoticeKind};
pub use crate::core::library::{CirculationError, CirculationResult, ReservationOutcome};
pub use crate::engine::Library;
pub use crate::notify::log::LogNoticePublisher;
pub use crate::notify::memory::MemoryNoticePublisher;
pub use crate::notify::NoticePublisher;
pub use crate::patrons::domain::model::Patron;
pub use crate::utils::clock::{Clock, FixedClock, SharedClock, SystemClock};
pub use crate::utils::logs::setup_tracing;
