//! Device capability traits.
//!
//! Each trait names one capability, so a consumer depends only on what it
//! actually uses: code that prints takes `&mut dyn Printer` and compiles
//! against a bare laser printer and a full office station alike. No device
//! is ever forced to stub out a capability it doesn't have.

use crate::document::Document;
use crate::error::Result;

/// Can put documents on paper.
pub trait Printer {
    /// Render every page of `doc` into the device's output.
    ///
    /// Printing an empty document is an error.
    fn print(&mut self, doc: &Document) -> Result<()>;
}

/// Can digitize documents.
pub trait Scanner {
    /// Produce a scanned copy of `source`.
    fn scan(&mut self, source: &Document) -> Result<Document>;
}

/// Can transmit documents to a remote destination.
pub trait Fax {
    /// Send `doc` to `destination` (which must be non-empty).
    fn fax(&mut self, doc: &Document, destination: &str) -> Result<()>;
}

/// A device that both prints and scans.
///
/// Rust concept: a supertrait bundles capabilities without adding any
/// methods of its own, and the blanket impl below makes every qualifying
/// device a MultiFunctionDevice automatically.
pub trait MultiFunctionDevice: Printer + Scanner {}

impl<D: Printer + Scanner> MultiFunctionDevice for D {}

/// Print a batch of documents on any printer.
///
/// Takes the narrowest capability that does the job: callers can hand in
/// a plain printer, a photocopier, or an office station.
pub fn print_all(printer: &mut dyn Printer, docs: &[Document]) -> Result<()> {
    for doc in docs {
        printer.print(doc)?;
    }
    Ok(())
}
