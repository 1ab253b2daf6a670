pub mod compiler;
pub mod decode;
pub mod dialect;
pub mod literal;
pub mod registry;
pub mod renderer;
pub mod resolver;
