//! Lunar event search engine: aspects, sign ingresses, phases, and
//! void-of-course windows.
//!
//! This crate provides:
//! - Upcoming-aspect search between a reference body and tracked bodies
//! - Sign-ingress search (next / previous / in-range)
//! - Moon phase at an instant plus new/full moon event search
//! - Void-of-course window derivation and range scanning
//! - Daily almanac rows with a scoped-thread parallel driver
//!
//! Every entry point takes the ephemeris oracle as an injected
//! [`selene_ephem::Ephemeris`] reference and is a pure function of its
//! arguments.

pub mod almanac;
pub mod almanac_types;
pub mod aspect;
pub mod aspect_types;
pub mod error;
pub mod ingress;
pub mod ingress_types;
pub mod phase;
pub mod phase_types;
pub(crate) mod search_util;
pub mod void_course;
pub mod void_types;

pub use almanac::{daily_snapshot, daily_snapshots, par_daily_snapshots};
pub use almanac_types::DailySnapshot;
pub use aspect::find_upcoming_aspects;
pub use aspect_types::{AspectEvent, AspectSearchConfig};
pub use error::SearchError;
pub use ingress::{find_next_ingress, find_prev_ingress, search_ingresses};
pub use ingress_types::{IngressEvent, IngressSearchConfig};
pub use phase::{
    moon_phase, next_full_moon, next_new_moon, prev_full_moon, prev_new_moon, search_phase_events,
};
pub use phase_types::{MoonPhase, PhaseEvent, PhaseEventKind, PhaseSearchConfig};
pub use search_util::SearchDirection;
pub use void_course::{compute_void_period, is_void_of_course, next_void_period, scan_void_periods};
pub use void_types::{LastAspect, VoidOfCourseConfig, VoidPeriod};
