//! Cache layer - Redis client shim

pub mod client;

pub use client::RedisStore;
