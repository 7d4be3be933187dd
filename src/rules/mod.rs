//! Game rules (spec §4.2, §4.5, §4.1): captures, the double-free-three
//! forbidden move, and win detection — all pure functions over an
//! immutable [`crate::board::Board`].

pub mod capture;
pub mod forbidden;
pub mod win;

pub use capture::{find_captures, has_capture};
pub use forbidden::{is_double_free_three, is_legal_move};
pub use win::check_winner;
