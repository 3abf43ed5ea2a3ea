pub use crate::instructions::create::*;

pub mod create;
