pub mod a001_department;
