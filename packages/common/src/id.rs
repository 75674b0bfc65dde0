use crate::{CommonError, CommonResult};
use crc32fast::Hasher;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque, stable identity of a page component
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(String);

impl ComponentId {
    /// Wrap a raw id, rejecting empty or whitespace-containing values
    pub fn new(raw: impl Into<String>) -> CommonResult<Self> {
        let raw = raw.into();
        if raw.is_empty() || raw.chars().any(char::is_whitespace) {
            return Err(CommonError::InvalidId(raw));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ComponentId {
    type Err = CommonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ComponentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Generate a page seed from its page id using CRC32
pub fn get_page_seed(page_id: &str) -> String {
    let mut buff = String::from(page_id);
    if !page_id.starts_with("page://") {
        buff = format!("page://{}", buff);
    }

    let mut hasher = Hasher::new();
    hasher.update(buff.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential id generator for the components of one page
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String, // Page seed (CRC32)
    count: u64,   // Sequential counter
}

impl IdGenerator {
    pub fn new(page_id: &str) -> Self {
        Self {
            seed: get_page_seed(page_id),
            count: 0,
        }
    }

    /// Generate the next sequential id
    pub fn new_id(&mut self) -> ComponentId {
        self.count += 1;
        ComponentId(format!("{}-{}", self.seed, self.count))
    }

    /// Advance the counter past every id this generator could have produced,
    /// so ids loaded from a stored layout are never handed out again.
    pub fn resume_after<'a>(&mut self, existing: impl IntoIterator<Item = &'a ComponentId>) {
        let prefix = format!("{}-", self.seed);
        for id in existing {
            let counter = id
                .as_str()
                .strip_prefix(&prefix)
                .and_then(|suffix| suffix.parse::<u64>().ok());
            if let Some(counter) = counter {
                self.count = self.count.max(counter);
            }
        }
    }

    /// Get page seed
    pub fn seed(&self) -> &str {
        &self.seed
    }
}
