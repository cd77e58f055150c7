//! Concrete devices, each composing only the capabilities it has.

use crate::capabilities::{Fax, Printer, Scanner};
use crate::document::Document;
use crate::error::{DeviceError, Result};
use tracing::debug;

fn render_pages(tray: &mut Vec<String>, doc: &Document) -> Result<()> {
    if doc.is_empty() {
        return Err(DeviceError::EmptyDocument {
            name: doc.name.clone(),
        });
    }
    for page in &doc.pages {
        tray.push(format!("[{}] {}", doc.name, page));
    }
    debug!("Printed {} pages of '{}'", doc.pages.len(), doc.name);
    Ok(())
}

/// A printer and nothing else.
#[derive(Debug, Default)]
pub struct LaserPrinter {
    tray: Vec<String>,
}

impl LaserPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pages printed so far, oldest first
    pub fn tray(&self) -> &[String] {
        &self.tray
    }
}

impl Printer for LaserPrinter {
    fn print(&mut self, doc: &Document) -> Result<()> {
        render_pages(&mut self.tray, doc)
    }
}

/// Prints and scans; the classic two-capability device.
#[derive(Debug, Default)]
pub struct Photocopier {
    tray: Vec<String>,
    scans_performed: u32,
}

impl Photocopier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tray(&self) -> &[String] {
        &self.tray
    }

    pub fn scans_performed(&self) -> u32 {
        self.scans_performed
    }

    /// Scan `doc` and print the scanned copy.
    pub fn copy(&mut self, doc: &Document) -> Result<()> {
        let scanned = self.scan(doc)?;
        self.print(&scanned)
    }
}

impl Printer for Photocopier {
    fn print(&mut self, doc: &Document) -> Result<()> {
        render_pages(&mut self.tray, doc)
    }
}

impl Scanner for Photocopier {
    fn scan(&mut self, source: &Document) -> Result<Document> {
        if source.is_empty() {
            return Err(DeviceError::EmptyDocument {
                name: source.name.clone(),
            });
        }
        self.scans_performed += 1;
        Ok(Document::new(
            format!("{} (scan)", source.name),
            source.pages.clone(),
        ))
    }
}

/// The full machine: prints, scans and faxes.
#[derive(Debug, Default)]
pub struct OfficeStation {
    tray: Vec<String>,
    outbox: Vec<(String, String)>,
}

impl OfficeStation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tray(&self) -> &[String] {
        &self.tray
    }

    /// Transmissions sent so far, as (destination, document name) pairs
    pub fn outbox(&self) -> &[(String, String)] {
        &self.outbox
    }
}

impl Printer for OfficeStation {
    fn print(&mut self, doc: &Document) -> Result<()> {
        render_pages(&mut self.tray, doc)
    }
}

impl Scanner for OfficeStation {
    fn scan(&mut self, source: &Document) -> Result<Document> {
        if source.is_empty() {
            return Err(DeviceError::EmptyDocument {
                name: source.name.clone(),
            });
        }
        Ok(Document::new(
            format!("{} (scan)", source.name),
            source.pages.clone(),
        ))
    }
}

impl Fax for OfficeStation {
    fn fax(&mut self, doc: &Document, destination: &str) -> Result<()> {
        if destination.trim().is_empty() {
            return Err(DeviceError::InvalidDestination {
                destination: destination.to_string(),
            });
        }
        if doc.is_empty() {
            return Err(DeviceError::EmptyDocument {
                name: doc.name.clone(),
            });
        }
        debug!("Faxing '{}' to {}", doc.name, destination);
        self.outbox
            .push((destination.to_string(), doc.name.clone()));
        Ok(())
    }
}
