use serde::{Deserialize, Serialize};

use super::{ContentProvider, FileContentProvider, Persist, RecordSerializer, YamlSerializer};

/// Durable home of one record type. Reading an absent backing file yields the
/// record's defaults; reading garbage is an error; writing always validates
/// first. The game saves through this on every exit path.
pub struct SaveStore<TProvider, TRecord, TSerializer = YamlSerializer>
where
    TProvider: ContentProvider,
    TRecord: Clone + for<'de> Deserialize<'de> + Serialize + Persist + Default,
    TSerializer: RecordSerializer<TRecord>,
{
    provider: TProvider,
    serializer: TSerializer,
    _record: std::marker::PhantomData<TRecord>,
}

impl<TRecord> SaveStore<FileContentProvider, TRecord, YamlSerializer>
where
    TRecord: Clone + for<'de> Deserialize<'de> + Serialize + Persist + Default,
{
    pub fn yaml_file(file_path: &str) -> Self {
        Self {
            provider: FileContentProvider::new(file_path.to_string()),
            serializer: YamlSerializer::new(),
            _record: std::marker::PhantomData,
        }
    }
}

impl<TProvider, TRecord, TSerializer> SaveStore<TProvider, TRecord, TSerializer>
where
    TProvider: ContentProvider,
    TRecord: Clone + for<'de> Deserialize<'de> + Serialize + Persist + Default,
    TSerializer: RecordSerializer<TRecord>,
{
    pub fn new(provider: TProvider, serializer: TSerializer) -> Self {
        Self {
            provider,
            serializer,
            _record: std::marker::PhantomData,
        }
    }

    pub fn load(&self) -> Result<TRecord, String> {
        let Some(content) = self.provider.read()? else {
            return Ok(TRecord::default());
        };

        let record = self.serializer.deserialize(&content)?;
        record
            .validate()
            .map_err(|e| format!("Save file validation error: {}", e))?;
        Ok(record)
    }

    pub fn save(&self, record: &TRecord) -> Result<(), String> {
        record
            .validate()
            .map_err(|e| format!("Save file validation error: {}", e))?;
        let content = self.serializer.serialize(record)?;
        self.provider.write(&content)
    }
}
