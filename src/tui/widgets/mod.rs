pub mod carousel;
pub mod input_buffer;
