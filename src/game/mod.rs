pub mod bot;
pub mod constants;
pub mod game_loop;
pub mod input_buffer;
pub mod round;
pub mod snapshot;
pub mod state;
pub mod systems;
