pub mod budget_summary;
pub mod expense_list;
pub mod flash;
pub mod forms;
pub mod report_chart;

pub use budget_summary::BudgetSummaryCard;
pub use expense_list::ExpenseList;
pub use flash::{DismissGuard, Flash, FlashLevel, FlashMessage};
pub use report_chart::ReportChart;
