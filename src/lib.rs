mod error;
mod frame;
mod stack;

pub use error::StackError;
pub use stack::Stack;
