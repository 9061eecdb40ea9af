// Toolvana state managers
// Managers own persisted, mutable state: the recently used tools list.

pub mod recent_tools;
