pub mod pipeline;
pub mod reply;

pub use pipeline::{Interpreter, Outcome};
pub use reply::render;
