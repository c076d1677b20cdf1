//! Authentication adapters

mod reqwest_exchange;

pub use reqwest_exchange::ReqwestTokenExchange;
