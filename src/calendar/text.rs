use super::grid::{Grid, Week, DAYS_IN_WEEK};
use super::names::Names;
use super::util::{center, format_columns};
use crate::tags::{Tag, TagStore};
use std::iter::successors;
use time::{Date, Month, Weekday};

/// Text renderer for month and year calendars with per-date tagging.
///
/// Dates occupy fixed-width columns.  A tag template wraps the full
/// padded field of its date rather than the bare digits, so terminal
/// colors cover the padding too; the decoration adds to the logical
/// string length but not to the rendered width.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct TaggedCalendar {
    grid: Grid,
    names: Names,
    tags: TagStore,
}

impl TaggedCalendar {
    /// Creates a calendar whose tag store is seeded with `tag_today` for
    /// `today`.  The seeded date is not re-evaluated afterwards; further
    /// tags are managed through [`TaggedCalendar::tags_mut`].
    pub(crate) fn new(
        today: Date,
        first_weekday: Weekday,
        names: Names,
        tag_today: Tag,
    ) -> TaggedCalendar {
        let mut tags = TagStore::new();
        tags.add(today, tag_today);
        TaggedCalendar {
            grid: Grid::new(first_weekday),
            names,
            tags,
        }
    }

    pub(crate) fn tags_mut(&mut self) -> &mut TagStore {
        &mut self.tags
    }

    /// Formats a single date field.  When `display` is false the field is
    /// blank padding, used for days that belong to a neighboring month.
    /// Either way the field is exactly `width` columns and is then passed
    /// through the date's tag, if any.
    pub(crate) fn format_day(&self, date: Date, display: bool, width: usize) -> String {
        let field = if display {
            center(&format!("{:2}", date.day()), width)
        } else {
            " ".repeat(width)
        };
        if let Some(tag) = self.tags.lookup(date) {
            tag.apply(&field)
        } else {
            field
        }
    }

    pub(crate) fn format_week(&self, days: &[(Date, bool)], width: usize, day_sep: &str) -> String {
        days.iter()
            .map(|&(date, display)| self.format_day(date, display, width))
            .collect::<Vec<_>>()
            .join(day_sep)
    }

    pub(crate) fn format_week_header(&self, width: usize) -> String {
        successors(Some(self.grid.first_weekday()), |wd| Some(wd.next()))
            .take(DAYS_IN_WEEK)
            .map(|wd| self.names.weekday(wd, width))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Formats one month as a text block: name header, weekday header,
    /// then one line per week, each line trimmed of trailing whitespace
    /// and followed by `pad` newlines.
    pub(crate) fn format_month(&self, year: i32, month: Month, width: usize, pad: usize) -> String {
        let width = width.max(2);
        let pad = pad.max(1);
        let colwidth = (width + 1) * DAYS_IN_WEEK - 1;
        let sep = "\n".repeat(pad);
        let mut lines = vec![
            self.names
                .month(year, month, colwidth, true)
                .trim_end()
                .to_owned(),
            self.format_week_header(width).trim_end().to_owned(),
        ];
        for week in self.grid.weeks_of_month(year, month) {
            let days = flag_days(&week, month);
            lines.push(self.format_week(&days, width, " ").trim_end().to_owned());
        }
        terminate_lines(&lines, &sep)
    }

    /// Formats all twelve months of a year, tiled into rows of `months`
    /// columns.  A row is as tall as its tallest month; shorter months
    /// are bottom-padded with empty columns.
    pub(crate) fn format_year(
        &self,
        year: i32,
        width: usize,
        pad: usize,
        spacing: usize,
        months: usize,
    ) -> String {
        let width = width.max(2);
        let pad = pad.max(1);
        let spacing = spacing.max(2);
        let months = months.max(1);
        let colwidth = (width + 1) * DAYS_IN_WEEK - 1;
        let sep = "\n".repeat(pad);
        let header = self.format_week_header(width);
        let total = colwidth * months + spacing * (months - 1);
        let mut lines = vec![center(&year.to_string(), total).trim_end().to_owned()];
        for row in self.grid.weeks_of_year(year, months) {
            lines.push(String::new());
            let names_row = row
                .iter()
                .map(|mg| self.names.month(year, mg.month(), colwidth, false))
                .collect::<Vec<_>>();
            lines.push(
                format_columns(&names_row, colwidth, spacing)
                    .trim_end()
                    .to_owned(),
            );
            let headers_row = vec![header.clone(); row.len()];
            lines.push(
                format_columns(&headers_row, colwidth, spacing)
                    .trim_end()
                    .to_owned(),
            );
            let height = row.iter().map(|mg| mg.weeks().len()).max().unwrap_or(0);
            for j in 0..height {
                let cols = row
                    .iter()
                    .map(|mg| {
                        mg.weeks().get(j).map_or_else(String::new, |week| {
                            self.format_week(&flag_days(week, mg.month()), width, " ")
                        })
                    })
                    .collect::<Vec<_>>();
                lines.push(
                    format_columns(&cols, colwidth, spacing)
                        .trim_end()
                        .to_owned(),
                );
            }
        }
        terminate_lines(&lines, &sep)
    }
}

fn flag_days(week: &Week, month: Month) -> Vec<(Date, bool)> {
    week.days().map(|date| (date, date.month() == month)).collect()
}

// Every line, the last included, is followed by the separator.
fn terminate_lines(lines: &[String], sep: &str) -> String {
    let mut result = lines.join(sep);
    result.push_str(sep);
    result
}
