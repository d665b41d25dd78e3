pub mod city_reader;
pub use city_reader::*;
pub mod city_writer;
pub use city_writer::CityWriter;
