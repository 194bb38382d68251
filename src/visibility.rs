// src/visibility.rs

//! The "I am over 18" switch.
//!
//! The preference lives in the `nsfw` cookie and is applied as the
//! `show-nsfw` class on the page body. Marked content is only drawn while
//! the body carries that class.

use crate::constants::{NSFW_CLASS, NSFW_COOKIE};
use crate::cookies::{Cookie, CookieStore};
use log::info;
use std::collections::BTreeSet;

pub trait ClassList {
    fn add_class(&mut self, class: &str);
    fn remove_class(&mut self, class: &str);
    fn has_class(&self, class: &str) -> bool;
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Body {
    classes: BTreeSet<String>,
}

impl Body {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClassList for Body {
    fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

/// The checkbox the visitor flips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleControl {
    pub id: &'static str,
    pub value: String,
    wired: bool,
}

impl ToggleControl {
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            value: String::new(),
            wired: false,
        }
    }

    pub fn is_wired(&self) -> bool {
        self.wired
    }

    pub fn is_checked(&self) -> bool {
        self.value == "1"
    }
}

/// A piece of page content, optionally marked as NSFW.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlock {
    pub text: String,
    pub marked: bool,
}

impl ContentBlock {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marked: false,
        }
    }

    pub fn marked(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marked: true,
        }
    }
}

/// Blocks that should be drawn given the current body classes.
pub fn visible_blocks<'a>(
    blocks: &'a [ContentBlock],
    body: &'a impl ClassList,
) -> impl Iterator<Item = &'a ContentBlock> + 'a {
    let shown = body.has_class(NSFW_CLASS);
    blocks.iter().filter(move |block| shown || !block.marked)
}

#[derive(Debug)]
pub struct NsfwToggle<S: CookieStore> {
    cookies: S,
}

impl<S: CookieStore> NsfwToggle<S> {
    pub fn new(cookies: S) -> Self {
        Self { cookies }
    }

    pub fn cookies(&self) -> &S {
        &self.cookies
    }

    /// Whether NSFW content is to be shown. Anything but `"1"` means no.
    pub fn read(&self) -> bool {
        self.cookies.get(NSFW_COOKIE).as_deref() == Some("1")
    }

    /// Records and applies the preference.
    pub fn write(
        &mut self,
        shown: bool,
        body: &mut impl ClassList,
        control: Option<&mut ToggleControl>,
    ) {
        info!("horny mode {}", if shown { "on" } else { "off" });
        self.cookies
            .set(Cookie::new(NSFW_COOKIE, if shown { "1" } else { "0" }));
        apply(shown, body);

        if let Some(control) = control {
            control.value = if shown { "1" } else { "0" }.to_string();
        }
    }

    /// Loads the persisted preference, wires the switch and applies it.
    pub fn initialize(&mut self, body: &mut impl ClassList, mut control: Option<&mut ToggleControl>) {
        let initial = self.read();
        if let Some(control) = control.as_deref_mut() {
            control.wired = true;
        }
        self.write(initial, body, control);
    }

    /// The switch's input handler: flips whatever is persisted.
    pub fn on_control_input(&mut self, body: &mut impl ClassList, control: Option<&mut ToggleControl>) {
        let Some(control) = control else {
            return;
        };
        if !control.wired {
            return;
        }
        let flipped = !self.read();
        self.write(flipped, body, Some(control));
    }
}

fn apply(shown: bool, body: &mut impl ClassList) {
    if shown {
        body.add_class(NSFW_CLASS);
    } else {
        body.remove_class(NSFW_CLASS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::NSFW_SWITCH_ID;
    use crate::cookies::{MemoryCookieStore, SameSite};

    fn store_with(value: Option<&str>) -> MemoryCookieStore {
        let mut store = MemoryCookieStore::new();
        if let Some(value) = value {
            store.set(Cookie::new(NSFW_COOKIE, value));
        }
        store
    }

    #[test]
    fn test_read_defaults_to_false() {
        assert!(!NsfwToggle::new(store_with(None)).read());
        assert!(!NsfwToggle::new(store_with(Some("yes"))).read());
        assert!(!NsfwToggle::new(store_with(Some("0"))).read());
        assert!(NsfwToggle::new(store_with(Some("1"))).read());
    }

    #[test]
    fn test_write_persists_and_applies() {
        let mut toggle = NsfwToggle::new(MemoryCookieStore::new());
        let mut body = Body::new();
        let mut control = ToggleControl::new(NSFW_SWITCH_ID);

        toggle.write(true, &mut body, Some(&mut control));
        assert!(body.has_class(NSFW_CLASS));
        assert_eq!(control.value, "1");
        let cookie = toggle.cookies().cookie(NSFW_COOKIE).unwrap();
        assert_eq!(cookie.value, "1");
        assert_eq!(cookie.path, "/");
        assert_eq!(cookie.same_site, SameSite::Lax);

        toggle.write(false, &mut body, None);
        assert!(!body.has_class(NSFW_CLASS));
        assert_eq!(toggle.cookies().get(NSFW_COOKIE).as_deref(), Some("0"));
    }

    #[test]
    fn test_initialize_applies_persisted_value() {
        let mut toggle = NsfwToggle::new(store_with(Some("1")));
        let mut body = Body::new();
        let mut control = ToggleControl::new(NSFW_SWITCH_ID);

        toggle.initialize(&mut body, Some(&mut control));
        assert!(control.is_wired());
        assert!(control.is_checked());
        assert!(body.has_class(NSFW_CLASS));
    }

    #[test]
    fn test_initialize_without_control_still_applies() {
        let mut toggle = NsfwToggle::new(store_with(Some("garbage")));
        let mut body = Body::new();
        body.add_class(NSFW_CLASS);

        toggle.initialize(&mut body, None);
        assert!(!body.has_class(NSFW_CLASS));
        assert_eq!(toggle.cookies().get(NSFW_COOKIE).as_deref(), Some("0"));
    }

    #[test]
    fn test_toggling_twice_restores_state() {
        for initial in [None, Some("0"), Some("1")] {
            let mut toggle = NsfwToggle::new(store_with(initial));
            let mut body = Body::new();
            let mut control = ToggleControl::new(NSFW_SWITCH_ID);
            toggle.initialize(&mut body, Some(&mut control));

            let cookie_before = toggle.cookies().get(NSFW_COOKIE);
            let body_before = body.clone();

            toggle.on_control_input(&mut body, Some(&mut control));
            assert_ne!(body, body_before);
            toggle.on_control_input(&mut body, Some(&mut control));

            assert_eq!(toggle.cookies().get(NSFW_COOKIE), cookie_before);
            assert_eq!(body, body_before);
        }
    }

    #[test]
    fn test_unwired_control_ignores_input() {
        let mut toggle = NsfwToggle::new(MemoryCookieStore::new());
        let mut body = Body::new();
        let mut control = ToggleControl::new(NSFW_SWITCH_ID);

        toggle.on_control_input(&mut body, Some(&mut control));
        toggle.on_control_input(&mut body, None);
        assert_eq!(toggle.cookies().get(NSFW_COOKIE), None);
        assert!(!body.has_class(NSFW_CLASS));
    }

    #[test]
    fn test_visible_blocks_follow_body_class() {
        let blocks = vec![ContentBlock::plain("cats"), ContentBlock::marked("lewd cats")];
        let mut body = Body::new();
        assert_eq!(visible_blocks(&blocks, &body).count(), 1);
        body.add_class(NSFW_CLASS);
        assert_eq!(visible_blocks(&blocks, &body).count(), 2);
    }
}
