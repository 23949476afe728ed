//! End-to-end domain scenarios run across the full service layer.

mod alliance;
mod membership;
