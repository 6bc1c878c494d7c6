//! Domain types for the subway line manager.
//!
//! This module contains the line topology model: stations, the sections
//! that connect them, and the lines that own those sections. All types
//! enforce their invariants at construction time, and line mutations either
//! succeed completely or leave the line untouched. Nothing here performs I/O.

mod error;
mod line;
mod path;
mod section;
mod station;

pub use error::LineError;
pub use line::{Line, LineId, NewLine};
pub use path::Path;
pub use section::{Distance, Section, Sections};
pub use station::{InvalidStationName, Station, StationId, StationName};
