mod persist;
mod provider;
mod serializer;
mod store;

pub use persist::Persist;
pub use provider::{ContentProvider, FileContentProvider};
pub use serializer::{RecordSerializer, YamlSerializer};
pub use store::SaveStore;
