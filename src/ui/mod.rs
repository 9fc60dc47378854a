//! Screen-space geometry and pointer input
//!
//! Plain data types shared by the simulation and the macroquad front end.
//! Nothing here touches the window except `MouseState::poll`.

mod rect;
mod input;

pub use rect::*;
pub use input::*;
