//! Evaluates arithmetic expressions by converting them into Reverse Polish Notation.

pub mod interpreter;
