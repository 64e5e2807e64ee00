pub mod keyboard;
pub mod state;
pub mod view;
pub mod view_model;

pub use view::DepartmentKeypadPage;
