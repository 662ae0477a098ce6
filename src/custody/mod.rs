//! Custody backends implementing [`Custody`](crate::traits::Custody).

mod in_memory;

pub use in_memory::InMemoryCustody;
