pub mod department_select;
pub mod form;
pub mod header;
pub mod layout;
pub mod page;
pub mod row_actions;

pub use department_select::DepartmentSelect;
pub use form::{DeleteNoticeAlert, FieldMessage, ValidationSummary};
pub use header::Header;
pub use layout::Layout;
pub use page::Page;
pub use row_actions::RowActions;
