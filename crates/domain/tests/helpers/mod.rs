mod record_builders;

pub use record_builders::ResourceRecordBuilder;
