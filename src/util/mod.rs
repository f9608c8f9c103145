pub mod assert;
pub mod linalg;
