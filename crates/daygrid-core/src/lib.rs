//! # Daygrid Core Library
//!
//! This library provides the layout engine for the Daygrid day view: it
//! positions one day's calendar events as non-overlapping rectangles on a
//! vertical time axis. Events that overlap in time are partitioned into
//! side-by-side columns, and each event shares the lane width equally with
//! every column it conflicts with.
//!
//! ## Architecture
//!
//! - **Events**: host-supplied descriptors with a half-open
//!   `[start, end)` interval; all-day events belong to a separate lane
//!   managed by the host and are skipped here
//! - **Style**: an immutable snapshot of the visual parameters, validated
//!   before any pass runs
//! - **Layout**: sort, greedy column assignment, intersection tracking,
//!   coordinate mapping -- recomputed in full on every reload or style
//!   change
//!
//! ## Key Components
//!
//! - [`DayLayoutEngine`]: stateful engine retaining the last pass
//! - [`layout_day`]: single-pass free function
//! - [`TimeMapper`]: time <-> vertical position conversion

pub mod error;
pub mod event;
pub mod layout;
pub mod style;

pub use error::{ConfigError, CoreError, ValidationError};
pub use event::EventDescriptor;
pub use layout::{layout_day, DayLayoutEngine, Frame, LayoutAttributes, TimeMapper};
pub use style::DayViewStyle;
