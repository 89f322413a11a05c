pub mod synthetic_stream;
