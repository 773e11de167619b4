//! Local search for improving constructed tours.
//!
//! - [`two_opt`] — 2-opt edge reversal on a closed tour

mod two_opt;

pub use two_opt::two_opt_improve;
