pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{dim, empty, header, info, starred, status, success, warn};
pub use table::{sentence_table, stats_table, study_table, TableBuilder};
pub use theme::{theme, Theme};
