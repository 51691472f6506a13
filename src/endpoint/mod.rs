//! Outbound HTTP: the contact form endpoint and offline worker registration

mod client;
mod traits;
mod worker;

pub use client::HttpFormEndpoint;
pub use traits::FormEndpoint;
pub use worker::register_offline_worker;

#[cfg(test)]
pub use traits::MockFormEndpoint;
