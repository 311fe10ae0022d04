//! Streaming Anomaly Detection Core
//!
//! Implementations for point and interval forecasting, outlier
//! classification, breakout detection, and detector construction.

mod breakout;
mod buffer;
mod builder;
mod classify;
mod forecast;
mod outlier;

pub use breakout::*;
pub use buffer::*;
pub use builder::*;
pub use classify::*;
pub use forecast::*;
pub use outlier::*;
