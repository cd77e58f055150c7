//! # Devices Crate
//!
//! A device hierarchy built from segregated capability traits.
//!
//! ## Main Components
//!
//! - **document**: The Document type devices operate on
//! - **capabilities**: Printer, Scanner and Fax traits, one per capability
//! - **machines**: Concrete devices composing the capabilities they have
//! - **error**: Error types for device operations
//!
//! ## Example Usage
//!
//! ```ignore
//! use devices::{Document, LaserPrinter, Photocopier, Printer};
//!
//! let doc = Document::from_text("memo", "hello\nworld");
//!
//! let mut printer = LaserPrinter::new();
//! printer.print(&doc)?;
//!
//! let mut copier = Photocopier::new();
//! copier.copy(&doc)?;
//! ```
//!
//! The point of the layout: a restricted device like [`LaserPrinter`]
//! implements only [`Printer`], and consumers name the narrowest
//! capability they need, so nobody carries methods they can't honor.

pub mod capabilities;
pub mod document;
pub mod error;
pub mod machines;

// Re-export commonly used types for convenience
pub use capabilities::{print_all, Fax, MultiFunctionDevice, Printer, Scanner};
pub use document::Document;
pub use error::{DeviceError, Result};
pub use machines::{LaserPrinter, OfficeStation, Photocopier};
