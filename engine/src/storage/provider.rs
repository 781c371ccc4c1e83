use std::io::ErrorKind;

pub trait ContentProvider {
    /// `Ok(None)` means no record exists yet; that is not an error.
    fn read(&self) -> Result<Option<String>, String>;
    fn write(&self, content: &str) -> Result<(), String>;
}

pub struct FileContentProvider {
    file_path: String,
}

impl FileContentProvider {
    pub fn new(file_path: String) -> Self {
        Self { file_path }
    }
}

impl ContentProvider for FileContentProvider {
    fn read(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(self.file_path.as_str()) {
            Ok(content) => Ok(Some(content)),
            Err(err) => match err.kind() {
                ErrorKind::NotFound => Ok(None),
                _ => Err(format!("Failed to read save file: {}", err)),
            },
        }
    }

    fn write(&self, content: &str) -> Result<(), String> {
        std::fs::write(self.file_path.as_str(), content)
            .map_err(|e| format!("Failed to write save file: {}", e))
    }
}
