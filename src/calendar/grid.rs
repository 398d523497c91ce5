use std::iter::successors;
use time::{Date, Month, Weekday};

pub(crate) const DAYS_IN_WEEK: usize = 7;

const MONTHS_IN_YEAR: usize = 12;

/// One calendar week: seven consecutive dates, the first of which falls on
/// the grid's first weekday.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Week([Date; DAYS_IN_WEEK]);

impl Week {
    fn from_start(start: Date) -> Week {
        let mut days = [start; DAYS_IN_WEEK];
        let mut d = start;
        for slot in days.iter_mut().skip(1) {
            d = d.next_day().expect("reached the end of the calendar");
            *slot = d;
        }
        Week(days)
    }

    pub(crate) fn days(&self) -> impl Iterator<Item = Date> + '_ {
        self.0.iter().copied()
    }
}

/// A month's worth of grid weeks, including the overflow days from
/// adjacent months that complete the first and last weeks.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MonthGrid {
    month: Month,
    weeks: Vec<Week>,
}

impl MonthGrid {
    pub(crate) fn month(&self) -> Month {
        self.month
    }

    pub(crate) fn weeks(&self) -> &[Week] {
        &self.weeks
    }
}

/// Produces the week-by-week structure of months.  Supported years are
/// 1 through 9998, enforced by the CLI; within that range no week can
/// walk off the calendar.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    first_weekday: Weekday,
}

impl Grid {
    pub(crate) fn new(first_weekday: Weekday) -> Grid {
        Grid { first_weekday }
    }

    pub(crate) fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    pub(crate) fn weeks_of_month(&self, year: i32, month: Month) -> Vec<Week> {
        let first = Date::from_calendar_date(year, month, 1)
            .expect("year should be within the supported range");
        let mut start = first;
        while start.weekday() != self.first_weekday {
            start = start
                .previous_day()
                .expect("reached the beginning of the calendar");
        }
        let last = last_of_month(year, month);
        let mut weeks = Vec::new();
        while start <= last {
            weeks.push(Week::from_start(start));
            start = n_days_after(start, DAYS_IN_WEEK);
        }
        weeks
    }

    /// The twelve months of `year`, chunked into rows of `months_per_row`
    /// grids for the year formatter.  The final row is short when
    /// `months_per_row` does not divide 12.
    pub(crate) fn weeks_of_year(&self, year: i32, months_per_row: usize) -> Vec<Vec<MonthGrid>> {
        let months = successors(Some(Month::January), |m| Some(m.next()))
            .take(MONTHS_IN_YEAR)
            .collect::<Vec<_>>();
        months
            .chunks(months_per_row.max(1))
            .map(|row| {
                row.iter()
                    .map(|&month| MonthGrid {
                        month,
                        weeks: self.weeks_of_month(year, month),
                    })
                    .collect()
            })
            .collect()
    }
}

fn last_of_month(year: i32, month: Month) -> Date {
    let (next_year, next_month) = if month == Month::December {
        (year + 1, Month::January)
    } else {
        (year, month.next())
    };
    Date::from_calendar_date(next_year, next_month, 1)
        .expect("year should be within the supported range")
        .previous_day()
        .expect("reached the beginning of the calendar")
}

fn n_days_after(mut date: Date, n: usize) -> Date {
    for _ in 0..n {
        date = date.next_day().expect("reached the end of the calendar");
    }
    date
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_february_2023_sunday_start() {
        let grid = Grid::new(Weekday::Sunday);
        let weeks = grid.weeks_of_month(2023, Month::February);
        assert_eq!(weeks.len(), 5);
        let first = weeks[0].days().collect::<Vec<_>>();
        assert_eq!(
            first,
            vec![
                date!(2023 - 01 - 29),
                date!(2023 - 01 - 30),
                date!(2023 - 01 - 31),
                date!(2023 - 02 - 01),
                date!(2023 - 02 - 02),
                date!(2023 - 02 - 03),
                date!(2023 - 02 - 04),
            ]
        );
        let last = weeks[4].days().collect::<Vec<_>>();
        assert_eq!(last[0], date!(2023 - 02 - 26));
        assert_eq!(last[6], date!(2023 - 03 - 04));
    }

    #[test]
    fn test_february_2023_monday_start() {
        let grid = Grid::new(Weekday::Monday);
        let weeks = grid.weeks_of_month(2023, Month::February);
        assert_eq!(weeks.len(), 5);
        let first = weeks[0].days().collect::<Vec<_>>();
        assert_eq!(first[0], date!(2023 - 01 - 30));
        assert_eq!(first[2], date!(2023 - 02 - 01));
        let last = weeks[4].days().collect::<Vec<_>>();
        assert_eq!(last[0], date!(2023 - 02 - 27));
        assert_eq!(last[6], date!(2023 - 03 - 05));
    }

    #[test]
    fn test_february_2015_exact_fit() {
        // Feb 2015 starts on a Sunday and has 28 days: four weeks, no
        // overflow days at either end.
        let grid = Grid::new(Weekday::Sunday);
        let weeks = grid.weeks_of_month(2015, Month::February);
        assert_eq!(weeks.len(), 4);
        assert_eq!(
            weeks[0].days().next(),
            Some(date!(2015 - 02 - 01)),
            "first week should start on February 1"
        );
        assert_eq!(weeks[3].days().last(), Some(date!(2015 - 02 - 28)));
    }

    #[test]
    fn test_six_week_month() {
        let grid = Grid::new(Weekday::Sunday);
        let weeks = grid.weeks_of_month(2023, Month::July);
        assert_eq!(weeks.len(), 6);
        assert_eq!(weeks[0].days().next(), Some(date!(2023 - 06 - 25)));
        assert_eq!(weeks[5].days().last(), Some(date!(2023 - 08 - 05)));
    }

    #[test]
    fn test_december_overflow_into_next_year() {
        let grid = Grid::new(Weekday::Sunday);
        let weeks = grid.weeks_of_month(2023, Month::December);
        let last = weeks.last().expect("December should have weeks");
        assert_eq!(last.days().last(), Some(date!(2024 - 01 - 06)));
    }

    #[test]
    fn test_year_rows_of_three() {
        let grid = Grid::new(Weekday::Sunday);
        let rows = grid.weeks_of_year(2023, 3);
        assert_eq!(rows.len(), 4);
        assert!(
            rows.iter().all(|row| row.len() == 3),
            "every row should hold three months"
        );
        assert_eq!(rows[0][0].month(), Month::January);
        assert_eq!(rows[3][2].month(), Month::December);
    }

    #[test]
    fn test_year_rows_of_five() {
        let grid = Grid::new(Weekday::Sunday);
        let rows = grid.weeks_of_year(2023, 5);
        let sizes = rows.iter().map(Vec::len).collect::<Vec<_>>();
        assert_eq!(sizes, vec![5, 5, 2]);
    }

    #[test]
    fn test_year_rows_zero_clamped() {
        let grid = Grid::new(Weekday::Sunday);
        let rows = grid.weeks_of_year(2023, 0);
        assert_eq!(rows.len(), 12);
    }
}
