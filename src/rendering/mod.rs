pub mod compose;
pub mod png_io;

pub use compose::side_by_side;
pub use png_io::{decode_png, encode_png, read_png, write_png};
