pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{file_entry, header, info, section, success, summary_row, warn};
pub use table::{resolution_table, ResolutionRow};
pub use theme::{theme, Theme};
