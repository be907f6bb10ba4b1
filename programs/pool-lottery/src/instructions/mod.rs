pub mod enter;
pub mod initialize;
pub mod pick_winner;
pub mod views;

pub use enter::*;
pub use initialize::*;
pub use pick_winner::*;
pub use views::*;
