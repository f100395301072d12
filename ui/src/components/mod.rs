mod alert;
pub use alert::AlertBanner;

mod stat_card;
pub use stat_card::{CardTone, StatCard};

mod progress_card;
pub use progress_card::ProgressCard;

mod charts;
pub use charts::{BarChart, ChartEntry, PieChart};
