//! Size-bounded rotating file sink.
//!
//! [`RotatingSink`] writes a stream of appended records across a sequence of
//! uniquely named files, rolling to a new file once a configured number of
//! write calls or bytes has been reached, without the producer ever knowing
//! about file boundaries.

pub mod dir;
pub mod error;
pub mod sink;

pub use dir::check_dir;
pub use error::{Error, Result};
pub use sink::RotatingSink;
