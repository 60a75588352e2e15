pub mod decision_display;
pub mod history_chart;
pub mod history_table;
pub mod input_form;
pub mod login_form;
pub mod map_picker;
pub mod status;

pub use decision_display::DecisionDisplay;
pub use history_chart::HistoryChart;
pub use history_table::HistoryTable;
pub use input_form::InputForm;
pub use login_form::LoginForm;
pub use status::{ErrorBanner, Spinner};
