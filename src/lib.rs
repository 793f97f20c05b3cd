mod config;
mod convert;
mod error;
mod format;
mod natural;
mod pool;

pub use config::{PoolConfig, PoolsConfig};
pub use convert::{decode, encode};
pub use error::Error;
pub use format::{abbreviate, group, parse_float, parse_integer};
pub use natural::Natural;
pub use pool::{DEFAULT_POOL, Pool};
