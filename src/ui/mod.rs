//! Terminal UI: the presentation adapter that drives the game engine from
//! keyboard input and renders its state.

mod app;
mod game_view;
mod profile;

pub use app::App;
pub use profile::PlayerProfile;
