#[macro_use]
mod util;

mod render;
mod tex;
