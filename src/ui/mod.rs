pub mod chart;
pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use chart::{category_chart, monthly_chart};
pub use icons::Icons;
pub use output::{error, header, info, money, section, success, warn};
pub use table::{category_table, expense_table, monthly_table, stats_table, TableBuilder};
pub use theme::{theme, Theme};
