//! Chrome DevTools target types.
//!
//! The values mirror the `type` strings chromedriver recognises in a DevTools
//! `/json/list` response. `target_type.rs` is regenerated with:
//!
//! ```sh
//! cargo run --bin targetgen -- --out crates/target-type/src/target_type.rs
//! ```

mod target_type;

pub use target_type::TargetType;
