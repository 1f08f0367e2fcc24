pub use engine::*;

mod engine;
