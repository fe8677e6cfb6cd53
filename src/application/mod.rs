//! Application layer orchestrating the order-entry session.
//!
//! This module defines the `OrderDesk`, the primary entry point that
//! applies session events to the pending order and forwards placed
//! orders through the outbound message port.

pub mod desk;
