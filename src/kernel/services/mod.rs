//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types used across the kernel.
//! - `adapters`: storage/OS specific implementations.
//! - `bus`: notification fan-out to UI surfaces.

pub mod adapters;
pub mod bus;
pub mod ports;

pub use bus::{Broadcaster, Notification, SurfaceReceiver};
