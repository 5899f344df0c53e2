/// Filesystem adapters: component snapshots in, reports out
mod file_writer;
mod snapshot_repository;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use snapshot_repository::JsonSnapshotRepository;
