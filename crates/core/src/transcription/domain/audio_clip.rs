/// Encoded audio handed to a transcriber as-is (wav, mp3, m4a, ...).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AudioClip {
    file_name: String,
    bytes: Vec<u8>,
}

impl AudioClip {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
