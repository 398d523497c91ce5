mod calendar;
mod locale;
mod tags;
use crate::calendar::{Names, TaggedCalendar};
use crate::locale::LocaleSpec;
use crate::tags::{palette, Tag, TAG_RED};
use anyhow::Context;
use encoding_rs::Encoding;
use lexopt::{Arg, Parser, ValueExt};
use std::io::{self, Write};
use time::{Month, OffsetDateTime, Weekday};

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run(Options),
    Help,
    Version,
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct Options {
    year: Option<i32>,
    month: Option<u8>,
    width: usize,
    pad: usize,
    full_year: bool,
    spacing: usize,
    months: usize,
    locale: Option<String>,
    encoding: Option<String>,
    tag_today: Tag,
    first_weekday: Weekday,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            year: None,
            month: None,
            width: 2,
            pad: 1,
            full_year: false,
            spacing: 6,
            months: 3,
            locale: None,
            encoding: None,
            tag_today: Tag::new(TAG_RED),
            first_weekday: Weekday::Sunday,
        }
    }
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut opts = Options::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('y') | Arg::Long("year") => opts.year = Some(parser.value()?.parse()?),
                Arg::Short('m') | Arg::Long("month") => {
                    opts.month = Some(parser.value()?.parse()?);
                }
                Arg::Long("width") => opts.width = parser.value()?.parse()?,
                Arg::Long("pad") => opts.pad = parser.value()?.parse()?,
                Arg::Long("full-year") => opts.full_year = true,
                Arg::Long("spacing") => opts.spacing = parser.value()?.parse()?,
                Arg::Long("months") => opts.months = parser.value()?.parse()?,
                Arg::Short('l') | Arg::Long("locale") => {
                    opts.locale = Some(parser.value()?.string()?);
                }
                Arg::Short('e') | Arg::Long("encoding") => {
                    opts.encoding = Some(parser.value()?.string()?);
                }
                Arg::Short('t') | Arg::Long("tag-today") => {
                    opts.tag_today = Tag::new(parser.value()?.string()?);
                }
                Arg::Long("monday-start") => opts.first_weekday = Weekday::Monday,
                Arg::Long(name) => {
                    if let Some(template) = palette(name) {
                        opts.tag_today = Tag::new(template);
                    } else {
                        return Err(Arg::Long(name).unexpected());
                    }
                }
                Arg::Short(_) | Arg::Value(_) => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run(opts))
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run(opts) => {
                let today = OffsetDateTime::now_local()
                    .context("failed to determine local date")?
                    .date();
                let year = opts.year.unwrap_or_else(|| today.year());
                anyhow::ensure!(
                    (1..=9998).contains(&year),
                    "year must be between 1 and 9998"
                );
                let month = if let Some(m) = opts.month {
                    Month::try_from(m).context("month must be between 1 and 12")?
                } else {
                    today.month()
                };
                let spec = match (&opts.locale, &opts.encoding) {
                    (Some(name), Some(label)) => {
                        Some(LocaleSpec::new(name, Some(label.as_str()))?)
                    }
                    (Some(_), None) => {
                        anyhow::bail!("--encoding is required when --locale is given")
                    }
                    (None, _) => None,
                };
                let names = spec.map_or(Names::Plain, Names::Localized);
                let cal = TaggedCalendar::new(today, opts.first_weekday, names, opts.tag_today);
                let text = if opts.full_year {
                    cal.format_year(year, opts.width, opts.pad, opts.spacing, opts.months)
                } else {
                    cal.format_month(year, month, opts.width, opts.pad)
                };
                write_output(&text, spec.and_then(|spec| spec.encoding()))
            }
            Command::Help => {
                println!("Usage: tagcal [options]");
                println!();
                println!("Print a month or year calendar with the current date tagged");
                println!();
                println!("Options:");
                println!("  -y, --year <YEAR>       Year to display [default: the current year]");
                println!("  -m, --month <MONTH>     Month to display [default: the current month]");
                println!("      --width <N>         Column width of each date [minimum: 2]");
                println!("      --pad <N>           Newlines after each calendar line [minimum: 1]");
                println!("      --full-year         Display the calendar for the whole year");
                println!("      --spacing <N>       Columns between months (with --full-year)");
                println!("      --months <N>        Months per row (with --full-year)");
                println!("  -l, --locale <LOCALE>   Locale for month and weekday names");
                println!("  -e, --encoding <ENC>    Output encoding (required with --locale)");
                println!("  -t, --tag-today <TMPL>  Wrap today's date in a custom template");
                println!("                          containing one {{}} substitution point");
                println!("      --<color>           Tag today's date in a color: black, darkgray,");
                println!("                          lightgray, white, red, orange, darkgreen,");
                println!("                          lightgreen, darkyellow, lightyellow, darkblue,");
                println!("                          lightblue, darkpurple, lightpurple, darkteal,");
                println!("                          or lightteal");
                println!("      --no-tag            Do not color today's date");
                println!("      --monday-start      Start weeks on Monday instead of Sunday");
                println!("  -h, --help              Display this help message and exit");
                println!("  -V, --version           Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

/// Writes the formatted calendar to stdout, recoding it first when an
/// output encoding was requested.
fn write_output(text: &str, encoding: Option<&'static Encoding>) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    if let Some(encoding) = encoding {
        let (bytes, _, _) = encoding.encode(text);
        stdout.write_all(&bytes).context("failed to write output")?;
        stdout.write_all(b"\n").context("failed to write output")?;
    } else {
        writeln!(stdout, "{text}").context("failed to write output")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::TAG_DARKTEAL;

    fn parse(args: &[&str]) -> Command {
        Command::from_parser(Parser::from_args(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn test_defaults() {
        assert_eq!(parse(&[]), Command::Run(Options::default()));
    }

    #[test]
    fn test_month_and_year() {
        let opts = Options {
            year: Some(2024),
            month: Some(2),
            ..Options::default()
        };
        assert_eq!(parse(&["-y", "2024", "-m", "2"]), Command::Run(opts));
    }

    #[test]
    fn test_full_year_options() {
        let opts = Options {
            full_year: true,
            spacing: 4,
            months: 4,
            ..Options::default()
        };
        assert_eq!(
            parse(&["--full-year", "--spacing", "4", "--months", "4"]),
            Command::Run(opts)
        );
    }

    #[test]
    fn test_color_flag() {
        let opts = Options {
            tag_today: Tag::new(TAG_DARKTEAL),
            ..Options::default()
        };
        assert_eq!(parse(&["--darkteal"]), Command::Run(opts));
    }

    #[test]
    fn test_custom_template() {
        let opts = Options {
            tag_today: Tag::new("<{}>"),
            ..Options::default()
        };
        assert_eq!(parse(&["-t", "<{}>"]), Command::Run(opts));
    }

    #[test]
    fn test_monday_start() {
        let opts = Options {
            first_weekday: Weekday::Monday,
            ..Options::default()
        };
        assert_eq!(parse(&["--monday-start"]), Command::Run(opts));
    }

    #[test]
    fn test_locale_and_encoding() {
        let opts = Options {
            locale: Some(String::from("fr_FR")),
            encoding: Some(String::from("UTF-8")),
            ..Options::default()
        };
        assert_eq!(
            parse(&["-l", "fr_FR", "-e", "UTF-8"]),
            Command::Run(opts)
        );
    }

    #[test]
    fn test_unknown_option() {
        assert!(
            Command::from_parser(Parser::from_args(["--mauve"])).is_err(),
            "unknown colors should be rejected"
        );
    }

    #[test]
    fn test_help_short_circuits() {
        assert_eq!(parse(&["-y", "2024", "--help"]), Command::Help);
    }

    #[test]
    fn test_version() {
        assert_eq!(parse(&["-V"]), Command::Version);
    }
}
