//! Plain function utilities.
//!
//! - [`pipe!`](crate::pipe) and [`flow!`](crate::flow): left-to-right
//!   application and composition
//! - [`dual`] and [`dual3`]: one implementation, data-first and data-last
//!   call styles
//! - [`identity`], [`constant`], [`flip`], [`tupled`], [`untupled`],
//!   [`absurd`]

mod dual;
mod flow_macro;
mod pipe_macro;
mod utils;

pub use dual::{Dual, Dual3, dual, dual3};
pub use utils::{absurd, constant, flip, identity, tupled, untupled};
