//! Four-Function Calculator
//!
//! This crate provides basic arithmetic operations over `f64` operands:
//! - Addition, subtraction, and multiplication (total functions)
//! - Division, guarded against a zero divisor
//!
//! Every operation is pure and stateless: the result depends only on the
//! operands, and concurrent callers need no coordination.

pub mod arithmetic;
