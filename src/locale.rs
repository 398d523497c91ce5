use encoding_rs::Encoding;
use pure_rust_locales::{locale_match, Locale};
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;

/// The active locale for name lookups, standing in for the C library's
/// process-wide LC_TIME state.  Lookups from concurrent threads would
/// observe each other's switches; callers must serialize them.  The
/// intended single-shot CLI usage is single-threaded.
static ACTIVE: Mutex<Locale> = Mutex::new(Locale::POSIX);

fn state() -> MutexGuard<'static, Locale> {
    // The value is a plain Copy enum, so a poisoned lock cannot have left
    // it half-updated.
    ACTIVE.lock().unwrap_or_else(PoisonError::into_inner)
}

fn active() -> Locale {
    *state()
}

pub(crate) fn month_names() -> &'static [&'static str] {
    locale_match!(active() => LC_TIME::MON)
}

// Sunday-first, like ABDAY
pub(crate) fn weekday_names() -> &'static [&'static str] {
    locale_match!(active() => LC_TIME::DAY)
}

pub(crate) fn weekday_abbrs() -> &'static [&'static str] {
    locale_match!(active() => LC_TIME::ABDAY)
}

/// A locale identifier plus optional output encoding, resolved once at
/// construction and reused for every name lookup.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct LocaleSpec {
    locale: Locale,
    encoding: Option<&'static Encoding>,
}

impl LocaleSpec {
    pub(crate) fn new(name: &str, encoding: Option<&str>) -> Result<LocaleSpec, LocaleError> {
        let locale =
            Locale::try_from(name).map_err(|_| LocaleError::UnknownLocale(name.to_owned()))?;
        let encoding = match encoding {
            Some(label) => Some(
                Encoding::for_label(label.as_bytes())
                    .ok_or_else(|| LocaleError::UnknownEncoding(label.to_owned()))?,
            ),
            None => None,
        };
        Ok(LocaleSpec { locale, encoding })
    }

    pub(crate) fn encoding(&self) -> Option<&'static Encoding> {
        self.encoding
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub(crate) enum LocaleError {
    #[error("unknown locale: {0:?}")]
    UnknownLocale(String),
    #[error("unknown encoding: {0:?}")]
    UnknownEncoding(String),
}

/// Scoped switch of the active name-lookup locale.  Entering captures the
/// previously active locale and installs the requested one; dropping
/// restores the captured locale, on every exit path.
#[derive(Debug)]
pub(crate) struct LocaleGuard {
    prev: Locale,
    encoding: Option<&'static Encoding>,
}

impl LocaleGuard {
    pub(crate) fn enter(spec: &LocaleSpec) -> LocaleGuard {
        let prev = std::mem::replace(&mut *state(), spec.locale);
        LocaleGuard {
            prev,
            encoding: spec.encoding,
        }
    }

    /// The output encoding carried over from the locale selection, if
    /// one was given.
    pub(crate) fn encoding(&self) -> Option<&'static Encoding> {
        self.encoding
    }
}

impl Drop for LocaleGuard {
    fn drop(&mut self) {
        *state() = self.prev;
    }
}
