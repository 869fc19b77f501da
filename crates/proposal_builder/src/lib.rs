pub mod config;
pub mod constants;
pub mod form;
pub mod governance;
pub mod internal;
pub mod session;
pub mod simulation;
pub mod solidity;
pub mod state;
pub mod wallet;

#[cfg(test)]
mod test_utils;

pub use config::*;
pub use form::*;
pub use internal::{encode, EncodeContext, EncodingError, Erc20Token};
pub use session::*;
pub use simulation::*;
pub use state::*;
pub use wallet::*;
