use std::collections::HashMap;
use time::Date;

// ANSI color templates for tagging dates in terminal output
pub(crate) const TAG_BLACK: &str = "\x1b[0;30m{}\x1b[0m";
pub(crate) const TAG_DARKGRAY: &str = "\x1b[1;30m{}\x1b[0m";
pub(crate) const TAG_LIGHTGRAY: &str = "\x1b[0;37m{}\x1b[0m";
pub(crate) const TAG_WHITE: &str = "\x1b[1;37m{}\x1b[0m";
pub(crate) const TAG_RED: &str = "\x1b[0;31m{}\x1b[0m";
pub(crate) const TAG_ORANGE: &str = "\x1b[1;31m{}\x1b[0m";
pub(crate) const TAG_DARKGREEN: &str = "\x1b[0;32m{}\x1b[0m";
pub(crate) const TAG_LIGHTGREEN: &str = "\x1b[1;32m{}\x1b[0m";
pub(crate) const TAG_DARKYELLOW: &str = "\x1b[0;33m{}\x1b[0m";
pub(crate) const TAG_LIGHTYELLOW: &str = "\x1b[1;33m{}\x1b[0m";
pub(crate) const TAG_DARKBLUE: &str = "\x1b[0;34m{}\x1b[0m";
pub(crate) const TAG_LIGHTBLUE: &str = "\x1b[1;34m{}\x1b[0m";
pub(crate) const TAG_DARKPURPLE: &str = "\x1b[0;35m{}\x1b[0m";
pub(crate) const TAG_LIGHTPURPLE: &str = "\x1b[1;35m{}\x1b[0m";
pub(crate) const TAG_DARKTEAL: &str = "\x1b[0;36m{}\x1b[0m";
pub(crate) const TAG_LIGHTTEAL: &str = "\x1b[1;36m{}\x1b[0m";
pub(crate) const TAG_NONE: &str = "\x1b[0m{}\x1b[0m";

/// A decoration template wrapped around a single rendered date field.
///
/// The template contains one `{}` substitution point, which is replaced
/// with the already-padded field text.  No validation is performed; a
/// template without a `{}` produces its text verbatim, which shows up as
/// malformed output rather than an error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Tag(String);

impl Tag {
    pub(crate) fn new<S: Into<String>>(template: S) -> Tag {
        Tag(template.into())
    }

    pub(crate) fn apply(&self, field: &str) -> String {
        self.0.replacen("{}", field, 1)
    }
}

/// Looks up the ANSI template for a color name accepted by the CLI's
/// `--<color>` options.
pub(crate) fn palette(name: &str) -> Option<&'static str> {
    Some(match name {
        "black" => TAG_BLACK,
        "darkgray" => TAG_DARKGRAY,
        "lightgray" => TAG_LIGHTGRAY,
        "white" => TAG_WHITE,
        "red" => TAG_RED,
        "orange" => TAG_ORANGE,
        "darkgreen" => TAG_DARKGREEN,
        "lightgreen" => TAG_LIGHTGREEN,
        "darkyellow" => TAG_DARKYELLOW,
        "lightyellow" => TAG_LIGHTYELLOW,
        "darkblue" => TAG_DARKBLUE,
        "lightblue" => TAG_LIGHTBLUE,
        "darkpurple" => TAG_DARKPURPLE,
        "lightpurple" => TAG_LIGHTPURPLE,
        "darkteal" => TAG_DARKTEAL,
        "lightteal" => TAG_LIGHTTEAL,
        "no-tag" => TAG_NONE,
        _ => return None,
    })
}

/// Mapping from dates to decoration tags.  At most one tag per date;
/// adding to a tagged date overwrites silently, and removing an untagged
/// date is a no-op.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct TagStore {
    tags: HashMap<Date, Tag>,
}

impl TagStore {
    pub(crate) fn new() -> TagStore {
        TagStore {
            tags: HashMap::new(),
        }
    }

    pub(crate) fn add(&mut self, date: Date, tag: Tag) {
        self.tags.insert(date, tag);
    }

    pub(crate) fn remove(&mut self, date: Date) {
        self.tags.remove(&date);
    }

    pub(crate) fn lookup(&self, date: Date) -> Option<&Tag> {
        self.tags.get(&date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_add_lookup_remove() {
        let mut store = TagStore::new();
        let d = date!(2023 - 02 - 14);
        assert_eq!(store.lookup(d), None);
        store.add(d, Tag::new(TAG_RED));
        assert_eq!(store.lookup(d), Some(&Tag::new(TAG_RED)));
        store.remove(d);
        assert_eq!(store.lookup(d), None);
    }

    #[test]
    fn test_add_overwrites() {
        let mut store = TagStore::new();
        let d = date!(2023 - 02 - 14);
        store.add(d, Tag::new(TAG_RED));
        store.add(d, Tag::new(TAG_DARKBLUE));
        assert_eq!(store.lookup(d), Some(&Tag::new(TAG_DARKBLUE)));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut store = TagStore::new();
        store.add(date!(2023 - 02 - 14), Tag::new(TAG_RED));
        store.remove(date!(2023 - 02 - 15));
        assert_eq!(
            store.lookup(date!(2023 - 02 - 14)),
            Some(&Tag::new(TAG_RED))
        );
    }

    #[test]
    fn test_apply_substitutes_once() {
        let tag = Tag::new(TAG_RED);
        assert_eq!(tag.apply(" 14 "), "\x1b[0;31m 14 \x1b[0m");
    }

    #[test]
    fn test_apply_without_placeholder() {
        let tag = Tag::new("plain");
        assert_eq!(tag.apply("14"), "plain");
    }

    #[test]
    fn test_palette() {
        assert_eq!(palette("red"), Some(TAG_RED));
        assert_eq!(palette("lightteal"), Some(TAG_LIGHTTEAL));
        assert_eq!(palette("no-tag"), Some(TAG_NONE));
        assert_eq!(palette("mauve"), None);
    }
}
