use super::util::{center, truncate};
use crate::locale::{self, LocaleGuard, LocaleSpec};
use time::{Month, Weekday};

/// Width below which abbreviated weekday names are used.
const ABBR_THRESHOLD: usize = 9;

/// Provider of month and weekday names for the formatters.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Names {
    /// English names from `time`'s `Display` impls
    Plain,
    /// Names from the locale's LC_TIME tables, each lookup performed
    /// inside a locale scope guard
    Localized(LocaleSpec),
}

impl Names {
    /// Formats a weekday name: abbreviated below the width threshold,
    /// truncated to `width` characters, and centered in `width` columns.
    pub(crate) fn weekday(&self, weekday: Weekday, width: usize) -> String {
        let name = match self {
            Names::Plain => {
                let full = weekday.to_string();
                if width >= ABBR_THRESHOLD {
                    full
                } else {
                    // The first three letters are the conventional English
                    // abbreviation for every weekday.
                    full[..3].to_owned()
                }
            }
            Names::Localized(spec) => {
                let _scope = LocaleGuard::enter(spec);
                let names = if width >= ABBR_THRESHOLD {
                    locale::weekday_names()
                } else {
                    locale::weekday_abbrs()
                };
                names[sunday_index(weekday)].to_owned()
            }
        };
        center(&truncate(&name, width), width)
    }

    /// Formats a month name centered in `width` columns, optionally with
    /// the year appended.  Names wider than `width` are not truncated.
    pub(crate) fn month(&self, year: i32, month: Month, width: usize, with_year: bool) -> String {
        let name = match self {
            Names::Plain => month.to_string(),
            Names::Localized(spec) => {
                let _scope = LocaleGuard::enter(spec);
                locale::month_names()[month_index(month)].to_owned()
            }
        };
        let header = if with_year {
            format!("{name} {year}")
        } else {
            name
        };
        center(&header, width)
    }
}

// LC_TIME weekday tables are Sunday-first
fn sunday_index(weekday: Weekday) -> usize {
    usize::from(weekday.number_days_from_sunday())
}

fn month_index(month: Month) -> usize {
    usize::from(u8::from(month)) - 1
}
