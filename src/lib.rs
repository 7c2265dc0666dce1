#![doc = include_str!("../README.md")]
#![no_std]
#![deny(
    unsafe_code,
    unused_imports,
    unused_variables,
    unused_must_use,
    missing_docs,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented
)]
#![allow(clippy::len_without_is_empty)]

extern crate alloc;

mod utils;
pub(crate) use utils::helper;

mod traits;
pub use traits::Statistic;

mod minimum;
pub use minimum::Minimum;

mod maximum;
pub use maximum::{Maximum, MaximumSentinel};

mod mean;
pub use mean::Mean;

mod std_dev;
pub use std_dev::StdDev;

mod online_std_dev;
pub use online_std_dev::OnlineStdDev;

mod report;
pub use report::Report;
