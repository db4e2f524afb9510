pub mod budget_form;
pub mod category_form;
pub mod expense_form;

pub use budget_form::BudgetForm;
pub use category_form::CategoryForm;
pub use expense_form::ExpenseForm;
