//! # Domain Entities
//!
//! - **ChannelInfo** / **ChannelRegistry**: invite metadata for managed channels

mod channel;

pub use channel::*;
