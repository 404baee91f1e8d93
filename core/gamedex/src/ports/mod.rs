//! Ports: usecaseが外界とやり取りするためのtrait群

pub mod inbound;
pub mod outbound;
