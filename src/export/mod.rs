//! Export renderers for risk lists (CSV, HTML, PDF)

pub mod csv;
pub mod html;
pub mod labels;
pub mod pdf;

pub use csv::risks_to_csv;
pub use html::{render_risks_html, risks_to_html};
pub use pdf::risks_to_pdf_bytes;
