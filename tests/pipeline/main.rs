//! End-to-end pipeline tests.
//!
//! Each module drives several stages through real files in a temporary
//! directory, the way the `ppinet` binary chains them.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test pipeline
//! ```

mod test_utils;

mod biogrid_metadata;
mod clustering;
mod sequences;
mod string_network;
