//! Mean ± standard deviation "normal bands" for numeric series.
//!
//! The [`analysis`] module turns a series into plain data a renderer can use
//! directly: summary statistics, the position of the band edges within the
//! series range, an in/out status for every point and the six color stops of
//! a two-color band gradient. [`series`] loads named series from JSON records.

pub mod analysis;
pub mod series;
