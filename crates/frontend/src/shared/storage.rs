use web_sys::window;

const PRESET_KEY: &str = "cb_category_name";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Remember the category picked from a core range button
pub fn save_preset(selector: &str) {
    if let Some(storage) = get_local_storage() {
        // private browsing may refuse writes
        let _ = storage.set_item(PRESET_KEY, selector);
    }
}

/// Pending category selector left by a previous visit
pub fn load_preset() -> Option<String> {
    get_local_storage()?
        .get_item(PRESET_KEY)
        .ok()?
        .filter(|s| !s.trim().is_empty())
}

pub fn clear_preset() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(PRESET_KEY);
    }
}
