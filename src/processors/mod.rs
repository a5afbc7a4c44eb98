pub mod batch_processor;
pub mod inspector;
pub mod timeline_converter;

pub use batch_processor::{list_input_files, BatchProcessor, BatchReport, ConvertedFile, FailedFile};
pub use inspector::{inspect_record, TimelineSummary};
pub use timeline_converter::TimelineConverter;
