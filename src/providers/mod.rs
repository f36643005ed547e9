pub mod artifact;
pub mod invocation;
pub mod tool;
pub mod wcag;
