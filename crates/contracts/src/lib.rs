//! Shared domain types for the department keypad: the department records,
//! the bundled lookup table and the code matching rules.

pub mod domain;
