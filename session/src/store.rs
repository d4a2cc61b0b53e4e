use std::collections::HashMap;
use std::sync::Mutex;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "maraude_token";
/// Storage key for the serialized current-user record.
pub const USER_KEY: &str = "maraude_user";

/// Key/value persistence for the session, the shape browser local storage
/// gives a web client. Implementations must tolerate concurrent access
/// from the session and the authorized request path.
pub trait SessionStore: Send + Sync {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Process-local store; the default for library use and tests.
#[derive(Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}
