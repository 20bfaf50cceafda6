pub mod json;
pub mod menubar;
pub mod table;

pub use json::{BillingReport, JsonExporter};
pub use menubar::{MenuBarExporter, MenuBarOptions};
pub use table::TableExporter;
