//! The three report rules. Each takes the loaded people by reference and
//! returns a fresh value; none of them can fail.

pub mod counter;
pub mod expiration;
pub mod fiscal;

pub use counter::count_completions;
pub use expiration::find_expiring;
pub use fiscal::filter_by_fiscal_year;
