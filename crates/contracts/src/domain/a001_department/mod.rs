pub mod aggregate;
pub mod table;

pub use aggregate::DepartmentRecord;
pub use table::{normalized_candidate, DepartmentTable, TableError};
