//! Named expression parts and the grouped view built over them.

pub mod grouping;
pub mod parts;
pub mod view;
