//! # weekline
//!
//! Fixed-context calendar arithmetic and the small text helpers that
//! grew up around it.
//!
//! The core is the [`calendar`] module: pure functions over instants
//! (`DateTime<Utc>`) against an immutable [`CalendarContext`] pinned to
//! a single timezone (GMT by default) — fixed 19-character date-string
//! parsing and formatting, day boundaries, calendar-aware day offsets,
//! and week-ending-Sunday computation. Every operation takes explicit
//! inputs and returns a new instant; nothing reads the system clock.
//!
//! ## Modules
//!
//! - [`calendar`] — day/week boundaries, fixed-format date strings, day offsets
//! - [`text`] — containment, numeric detection, percent/Base64 encoding, truncation
//! - [`query`] — URL query-string assembly
//! - [`color`] — RGB construction and hex parsing
//! - [`numeric`] — compact float formatting, numeric field parsing
//! - [`error`] — error types

pub mod calendar;
pub mod color;
pub mod error;
pub mod numeric;
pub mod query;
pub mod text;

pub use calendar::{is_after, CalendarContext, DayBounds, FULL_DATE_FORMAT, FULL_DATE_LEN};
pub use color::Rgba;
pub use error::WeeklineError;
pub use numeric::{field_value, format_compact, is_integral};
pub use query::to_query_string;
pub use text::{
    base64_encode, contains, is_number, is_positive_number, truncate, truncate_with, url_encoded,
};
