//! One module per additive score component.

pub mod activity;
pub mod consistency;
pub mod cross_source;
pub mod evidence;
pub mod longevity;
