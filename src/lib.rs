pub mod cli;
pub mod config;
pub mod cookie;
pub mod session;
pub mod ui;
pub mod util;

pub use config::Config;
pub use cookie::{
    export, filter, parse, to_display_row, CookieError, CookieRecord, DisplayRow, DomainPattern,
    ErrorKind, ExportFormat,
};
pub use session::{ExtractionSession, Source};
pub use ui::App;
