// src/cookies.rs

//! A tiny cookie jar: enough for the NSFW switch to survive a restart.

use crate::errors::{CatchatError, CatchatResult};
use log::{debug, warn};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

impl SameSite {
    fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "strict" => Some(SameSite::Strict),
            "lax" => Some(SameSite::Lax),
            "none" => Some(SameSite::None),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub path: String,
    pub same_site: SameSite,
}

impl Cookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            path: "/".to_string(),
            same_site: SameSite::Lax,
        }
    }

    /// Parses one `Set-Cookie`-style line. Unknown attributes are ignored.
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split(';').map(str::trim);
        let (name, value) = parts.next()?.split_once('=')?;
        if name.is_empty() {
            return None;
        }

        let mut cookie = Cookie::new(name, value);
        for attr in parts {
            match attr.split_once('=') {
                Some((key, val)) if key.eq_ignore_ascii_case("path") => {
                    cookie.path = val.to_string()
                }
                Some((key, val)) if key.eq_ignore_ascii_case("samesite") => {
                    if let Some(same_site) = SameSite::parse(val) {
                        cookie.same_site = same_site;
                    }
                }
                _ => {}
            }
        }
        Some(cookie)
    }
}

impl fmt::Display for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={}; Path={}; SameSite={}",
            self.name,
            self.value,
            self.path,
            self.same_site.as_str()
        )
    }
}

pub trait CookieStore {
    fn get(&self, name: &str) -> Option<String>;
    fn set(&mut self, cookie: Cookie);
}

impl<T: CookieStore + ?Sized> CookieStore for Box<T> {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }

    fn set(&mut self, cookie: Cookie) {
        (**self).set(cookie)
    }
}

#[derive(Debug, Default)]
pub struct MemoryCookieStore {
    cookies: HashMap<String, Cookie>,
}

impl MemoryCookieStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cookie(&self, name: &str) -> Option<&Cookie> {
        self.cookies.get(name)
    }
}

impl CookieStore for MemoryCookieStore {
    fn get(&self, name: &str) -> Option<String> {
        self.cookies.get(name).map(|c| c.value.clone())
    }

    fn set(&mut self, cookie: Cookie) {
        self.cookies.insert(cookie.name.clone(), cookie);
    }
}

/// Cookies kept on disk, one per line.
#[derive(Debug)]
pub struct FileCookieStore {
    path: PathBuf,
    cookies: MemoryCookieStore,
}

impl FileCookieStore {
    /// Opens the jar at `path`. A missing or unreadable file is an empty jar.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut cookies = MemoryCookieStore::new();

        match fs::read_to_string(&path) {
            Ok(contents) => {
                for line in contents.lines().filter(|l| !l.trim().is_empty()) {
                    match Cookie::parse(line) {
                        Some(cookie) => cookies.set(cookie),
                        None => debug!("Skipping malformed cookie line: {:?}", line),
                    }
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!("Failed to read cookie jar {}: {}", path.display(), e),
        }

        Self { path, cookies }
    }

    pub fn default_path() -> CatchatResult<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| CatchatError::cookie_error("Could not determine data directory"))?;
        Ok(data_dir.join("catchat").join("cookies.txt"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> CatchatResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut lines: Vec<String> = self.cookies.cookies.values().map(|c| c.to_string()).collect();
        lines.sort();
        fs::write(&self.path, lines.join("\n") + "\n")?;
        Ok(())
    }
}

impl CookieStore for FileCookieStore {
    fn get(&self, name: &str) -> Option<String> {
        self.cookies.get(name)
    }

    fn set(&mut self, cookie: Cookie) {
        self.cookies.set(cookie);
        if let Err(e) = self.save() {
            warn!("Failed to save cookie jar {}: {}", self.path.display(), e);
        }
    }
}
