// Providers layer - Injectable capabilities used by stores

pub mod clock_provider;

pub use clock_provider::{ClockProvider, SystemClock};

#[cfg(test)]
pub use clock_provider::ManualClock;
