use dioxus::prelude::*;

pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    // Anything other than the dark literal falls back to light.
    pub fn from_stored(value: &str) -> Theme {
        match value {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "☀️",
            Theme::Light => "🌙",
        }
    }
}

pub fn load_theme() -> Theme {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(value) = local_storage_get(THEME_STORAGE_KEY) {
            return Theme::from_stored(&value);
        }
    }
    Theme::default()
}

pub fn store_theme(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    local_storage_set(THEME_STORAGE_KEY, theme.as_str());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = theme;
}

pub fn apply_theme(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = theme;
}

#[cfg(target_arch = "wasm32")]
fn local_storage_get(key: &str) -> Option<String> {
    let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten())?;
    storage.get_item(key).ok().flatten()
}

#[cfg(target_arch = "wasm32")]
fn local_storage_set(key: &str, value: &str) {
    if let Some(storage) =
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    {
        let _ = storage.set_item(key, value);
    }
}

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_signal(Theme::default);
    #[cfg(target_arch = "wasm32")]
    let mut restored = use_signal(|| false);
    #[cfg(not(target_arch = "wasm32"))]
    let _restored = ();

    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        if restored() {
            return;
        }
        restored.set(true);
        let stored = load_theme();
        apply_theme(stored);
        theme.set(stored);
    });

    rsx! {
        button {
            id: "theme-toggle",
            class: "theme-toggle",
            r#type: "button",
            aria_label: "Toggle color theme",
            onclick: move |_| {
                let next = theme().toggled();
                store_theme(next);
                apply_theme(next);
                theme.set(next);
            },
            "{theme().toggle_icon()}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn toggle_is_involutive() {
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn stored_literals_round_trip() {
        assert_eq!(Theme::from_stored("light"), Theme::Light);
        assert_eq!(Theme::from_stored("dark"), Theme::Dark);
        assert_eq!(Theme::Light.as_str(), "light");
        assert_eq!(Theme::Dark.as_str(), "dark");
    }

    #[test]
    fn unknown_stored_value_defaults_light() {
        assert_eq!(Theme::from_stored(""), Theme::Light);
        assert_eq!(Theme::from_stored("solarized"), Theme::Light);
    }

    #[test]
    fn icon_shows_the_way_out_of_the_current_mode() {
        assert_eq!(Theme::Dark.toggle_icon(), "☀️");
        assert_eq!(Theme::Light.toggle_icon(), "🌙");
    }
}
