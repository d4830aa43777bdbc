mod canvas;
pub use canvas::*;

mod colour;
pub use colour::*;

mod config;
pub use config::*;

mod document;
pub use document::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod info;
pub use info::*;

mod numbers;
pub use numbers::*;

mod page;
pub use page::*;

/// Pre-defined page sizes for common paper formats
pub mod pagesize;

mod problem;
pub use problem::*;

mod rect;
pub use rect::*;

pub(crate) mod refs;

/// The decorative shape templates problems are drawn inside
pub mod shapes;

mod transform;
pub use transform::*;

mod units;
pub use units::*;

/// The worksheet generation driver
pub mod worksheet;

/// Re-export pdf-writer, mostly for custom [pdf_writer::Content] generation
pub use pdf_writer;
