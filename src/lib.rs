//! Temperature conversion with absolute-zero validation, an interactive
//! session loop, and a few small console exercises built on the same
//! parse, validate, compute, report pattern.

mod convert;
mod data;
mod error;
mod session;

pub mod calculator;
pub mod greeting;
pub mod registration;

pub use convert::{convert, convert_selector, validate_celsius};
pub use data::*;
pub use error::{CalcError, ConversionError, GreetingError, RegistrationError};
pub use session::{
    format_outcome, read_line, run_self_check, History, MenuAction, Session, SessionState,
    SELF_CHECK,
};
