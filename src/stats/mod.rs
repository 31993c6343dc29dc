//! Statistical routines used by tree induction.
//!
//! - Normal and chi-square distribution approximations
//! - Critical chi-square values with a shareable memo table
//!
//! # Examples
//!
//! ```
//! use arbol::stats::{chi_square_tail_probability, ChiSquareTable};
//!
//! let table = ChiSquareTable::new();
//! let critical = table.critical_value(0.01, 2);
//! assert!(chi_square_tail_probability(critical + 1.0, 2) < 0.01);
//! ```

pub mod chi_square;

pub use chi_square::{
    chi_square_tail_probability, critical_value_uncached, normal_cdf, normal_two_sided,
    ChiSquareTable,
};
