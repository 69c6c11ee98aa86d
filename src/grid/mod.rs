pub mod animate;
pub mod broadcast;
pub mod matrix;
pub mod wrapped;
