//! Bedrock Edition wire types and the clientbound packets used to drive
//! fake container windows.

pub mod codec;
pub mod error;
pub mod item_stack;
pub mod packets;
pub mod types;
