/// Full-page navigation to `path`.
#[cfg(target_arch = "wasm32")]
pub fn redirect(path: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(err) = window.location().set_href(path) {
                log::error!("Redirect to {} failed: {:?}", path, err);
            }
        }
        None => log::error!("Redirect to {} failed: no window", path),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn redirect(path: &str) {
    log::debug!("redirect requested: {}", path);
}

/// Origin the admin is served from, used to locate bundled assets.
#[cfg(target_arch = "wasm32")]
pub fn current_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_origin() -> Option<String> {
    None
}

/// Which sidebar entry a path belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminSection {
    Overview,
    Projects,
    Blog,
}

pub fn section_for_path(path: &str) -> Option<AdminSection> {
    let path = path.trim_end_matches('/');
    if path == "/admin/dashboard" || path == "/admin" {
        Some(AdminSection::Overview)
    } else if path.starts_with("/admin/projects") {
        Some(AdminSection::Projects)
    } else if path.starts_with("/admin/blog") {
        Some(AdminSection::Blog)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_editor_paths_highlight_their_section() {
        assert_eq!(section_for_path("/admin/dashboard"), Some(AdminSection::Overview));
        assert_eq!(section_for_path("/admin/projects/new"), Some(AdminSection::Projects));
        assert_eq!(section_for_path("/admin/blog/42/"), Some(AdminSection::Blog));
        assert_eq!(section_for_path("/admin/login"), None);
    }
}
