use crate::api::Session;

const SESSION_KEY: &str = "agency-admin.session";

#[cfg(target_arch = "wasm32")]
mod browser {
    use web_sys::{Storage, Window};

    pub fn window() -> Result<Window, String> {
        web_sys::window().ok_or_else(|| "No window object".to_string())
    }

    pub fn local_storage() -> Result<Storage, String> {
        window()?
            .local_storage()
            .map_err(|_| "No localStorage".to_string())?
            .ok_or_else(|| "No localStorage".to_string())
    }
}

/// Session persisted by a previous page load, if any.
#[cfg(target_arch = "wasm32")]
pub fn load_session() -> Option<Session> {
    let raw = browser::local_storage()
        .ok()?
        .get_item(SESSION_KEY)
        .ok()
        .flatten()?;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(err) => {
            log::warn!("Discarding unreadable stored session: {}", err);
            clear_session();
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn save_session(session: &Session) {
    let result = browser::local_storage().and_then(|storage| {
        let raw = serde_json::to_string(session).map_err(|e| e.to_string())?;
        storage
            .set_item(SESSION_KEY, &raw)
            .map_err(|_| "Failed to write session".to_string())
    });
    if let Err(err) = result {
        log::warn!("Session not persisted: {}", err);
    }
}

#[cfg(target_arch = "wasm32")]
pub fn clear_session() {
    if let Ok(storage) = browser::local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}

// Host builds (tests, SSR) keep the session in memory only.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_session() -> Option<Session> {
    let _ = SESSION_KEY;
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_session(_session: &Session) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn clear_session() {}
