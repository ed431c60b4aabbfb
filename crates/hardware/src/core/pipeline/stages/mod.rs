//! Stage thread bodies.
//!
//! Each stage is a loop over a receiving channel (fetch over the program
//! counter instead), doing its work and forwarding a latch to the next stage.
//! The channels are zero-capacity rendezvous channels, so a send completes
//! only when the downstream stage is ready: the handoff itself is the clock.
//!
//! Shutdown is cooperative. Writeback flags the machine halted on a committed
//! halt or fault; fetch observes the flag at the top of its loop and closes
//! its sender; every downstream stage drains what is still in flight and
//! exits when its receiver closes. No stage exits early — an early exit would
//! strand hazard locks and deadlock decode.

mod decode;
mod execute;
mod fetch;
mod memory;
mod writeback;

pub use decode::run_decode;
pub use execute::run_execute;
pub use fetch::run_fetch;
pub use memory::run_memory;
pub use writeback::run_writeback;
