//! Electric fan harp blade tools
//!
//! A fan harp blade is a disc cut into concentric rings, each ring punched
//! with a repeating pattern of slots. Spin it past a fixed pickup and each
//! ring chops the pickup's view into a tone. This crate takes the small text
//! file that describes such a blade and turns it into either outlines to cut,
//! or the square wave the pickup would see.
//!
//! ```text
//! # comment line
//! inner_circle_diameter,10
//! outer_circle_diameter,20
//! sector,5,10,4.5,0.2  // inner radius, outer radius, repeats, open ratio
//! ```
//!
//! The pipeline is [`config::parse`] into [`layout::layout`] per slot group,
//! then either [`geometry::project_blade`] or [`sim::simulate`]. Writing
//! DXF, SVG or WAV files is left to the caller.
//!
//! ```rust
//! use fan_harp_blade::prelude::*;
//!
//! let config = parse("outer_circle_diameter,20\nsector,5,10,4.5,0.2\n");
//! let drawing = project_blade(&config, &ProjectionOptions::default());
//! assert_eq!(drawing.wedges().count(), 4);
//!
//! let signal = simulate(&config, &RotationModel::default());
//! assert_eq!(signal.samples.len(), 22000);
//! ```

/// Error and diagnostic types. Nothing in here ever stops a run.
pub mod errors;

/// Blade configuration model and its line grammar.
pub mod config;

/// Slot groups to angular intervals.
pub mod layout;

/// Angular intervals to outlines.
pub mod geometry;

/// Angular intervals to a sampled presence signal.
pub mod sim;

/// RON persistence for the knob structs.
pub mod util;

/// Everything you need for the common path in one import.
pub mod prelude {
    pub use crate::config::{parse, parse_with_diagnostics, Configuration, SlotGroup};
    pub use crate::errors::{GroupDiagnostic, LineParseError};
    pub use crate::geometry::{
        project, project_blade, BladeDrawing, BoundaryStyle, Canvas, ClosedPath,
        ProjectionOptions,
    };
    pub use crate::layout::{layout, AngularInterval};
    pub use crate::sim::{sample, simulate, PresenceSignal, RotationModel};
    pub use crate::util::RonFile;
}
