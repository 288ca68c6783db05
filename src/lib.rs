//! Class-timetable core for the U-Engine ecosystem.
//!
//! Provides the deterministic algorithms behind a weekly class calendar:
//! slot conversions, class-number ordering and search, section locking,
//! conflict-minimizing auto assignment, collision-aware colors, and a
//! URL-safe state codec. Rendering, fetching, and storage belong to the
//! host application.
//!
//! # Modules
//!
//! - **`time`**: Slot ⇄ date and day/time string conversions
//! - **`class_number`**: Class-number parsing, ordering, and search matching
//! - **`models`**: Domain types: `Timeslot`, `Section`, `Sections`,
//!   `Activity`, `Class`, `NonClass`, `ClassRecord`, `Catalog`
//! - **`scheduler`**: Auto section assignment and conflict metrics
//! - **`color`**: Color schemes, palettes, and deterministic color assignment
//! - **`codec`**: MessagePack + base64url encoding of shareable state
//! - **`validation`**: Catalog integrity checks
//! - **`config`**: User preferences
//! - **`util`**: Summation, number formatting, class links in free text
//!
//! # Execution Model
//!
//! Every operation is synchronous and bounded. Mutating operations take
//! `&mut` access to the activity list, so one mutation is in flight at a
//! time and readers never observe a partial update.

pub mod class_number;
pub mod codec;
pub mod color;
pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod time;
pub mod util;
pub mod validation;

pub use class_number::{class_number_compare, class_number_matches};
pub use codec::{decode_state, encode_state};
pub use color::{assign_colors, text_color, ColorScheme};
pub use error::{Error, Result};
pub use time::{
    date_to_slot, day_time_to_slot, slot_to_date, slot_to_day_string, slot_to_time_string, Slot,
};
