//! Report export, batch summaries and currency display for projection results

pub mod batch;
pub mod currency;
pub mod export;

pub use batch::{write_batch_summary, BatchTotals};
pub use currency::{format_currency, CurrencyFormat, SymbolPosition};
pub use export::{render_report, report_file_name, save_report, write_report};
