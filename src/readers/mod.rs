pub mod timeline_reader;

pub use timeline_reader::TimelineReader;
