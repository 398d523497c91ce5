mod grid;
mod names;
mod text;
mod util;
pub(crate) use self::names::Names;
pub(crate) use self::text::TaggedCalendar;
