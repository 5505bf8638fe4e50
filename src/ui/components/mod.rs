mod cookie_table;
mod dialog;
mod footer;
mod notice_dialog;
mod path_dialog;
mod source_pane;
mod text_input;
pub mod theme;

pub use cookie_table::{truncate, CookieTable, CookieTableState};
pub use dialog::{DialogFrame, InstructionBar, StatusLine};
pub use footer::{Footer, FooterContext};
pub use notice_dialog::{NoticeDialog, NoticeDialogState, NoticeLevel};
pub use path_dialog::{PathDialog, PathDialogState, PathPurpose};
pub use source_pane::SourcePane;
pub use text_input::TextInputState;
