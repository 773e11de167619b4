//! Tour length evaluation and structural validation.

mod length;

pub use length::{is_hamiltonian_cycle, tour_length};
