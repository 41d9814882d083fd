//! Plain-text views of a day and of the calendar strip.

use std::fmt;

use crate::MonthDay;
use crate::staff::{Staff, StaffByDay};
use crate::types::DayIndex;

/// Heading and birthday list for one day.
pub fn render_day(month_day: MonthDay, staff: &[Staff]) -> String {
    DayCard { month_day, staff }.to_string()
}

/// Populated days grouped one month per line, the current day in brackets.
pub fn render_calendar(table: &StaffByDay, current: DayIndex) -> String {
    CalendarStrip {
        table,
        current,
        all: false,
    }
    .to_string()
}

/// All 366 days, one month per line. Populated days carry a `*` and the
/// current day is in brackets.
pub fn render_calendar_all(table: &StaffByDay, current: DayIndex) -> String {
    CalendarStrip {
        table,
        current,
        all: true,
    }
    .to_string()
}

struct DayCard<'a> {
    month_day: MonthDay,
    staff:     &'a [Staff],
}

impl fmt::Display for DayCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.month_day)?;
        if self.staff.is_empty() {
            return writeln!(f, "No one birthday");
        }
        writeln!(f, "birthday star:")?;
        for member in self.staff {
            writeln!(f, "- {} {}", member.first_name, member.last_name)?;
        }
        Ok(())
    }
}

struct CalendarStrip<'a> {
    table:   &'a StaffByDay,
    current: DayIndex,
    all:     bool,
}

impl fmt::Display for CalendarStrip<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = DayIndex::all()
            .filter(|&index| self.all || index == self.current || self.table.is_populated(index));

        let mut line_month = None;
        for index in shown {
            let md = index.month_day();
            match line_month {
                Some(month) if month == md.month() => write!(f, " ")?,
                Some(_) => writeln!(f)?,
                None => {},
            }
            line_month = Some(md.month());

            let mark = if self.all && self.table.is_populated(index) { "*" } else { "" };
            if index == self.current {
                write!(f, "[{md}{mark}]")?;
            } else {
                write!(f, "{md}{mark}")?;
            }
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::LEAP_DAY_INDEX;
    use crate::staff::test_utils::{staff, table_with};

    fn index(value: u16) -> DayIndex {
        DayIndex::new(value).unwrap()
    }

    #[test]
    fn test_render_empty_day() {
        let md = MonthDay::new(2, 29).unwrap();
        assert_eq!(render_day(md, &[]), "2/29\nNo one birthday\n");
    }

    #[test]
    fn test_render_day_with_staff() {
        let md = MonthDay::new(12, 10).unwrap();
        let people = [staff(1, "Ada", "Lovelace"), staff(2, "Grace", "Hopper")];
        assert_eq!(
            render_day(md, &people),
            "12/10\nbirthday star:\n- Ada Lovelace\n- Grace Hopper\n"
        );
    }

    #[test]
    fn test_render_calendar_groups_by_month() {
        // 1/5, 1/10, 2/29, 12/31
        let table = table_with(&[4, 9, LEAP_DAY_INDEX, 365]);
        assert_eq!(
            render_calendar(&table, index(9)),
            "1/5 [1/10]\n2/29\n12/31\n"
        );
    }

    #[test]
    fn test_render_calendar_marks_unpopulated_current() {
        let table = table_with(&[4]);
        assert_eq!(render_calendar(&table, index(60)), "1/5\n[3/1]\n");
    }

    #[test]
    fn test_render_calendar_empty_table() {
        assert_eq!(
            render_calendar(&StaffByDay::empty(), DayIndex::FIRST),
            "[1/1]\n"
        );
    }

    #[test]
    fn test_render_calendar_all_lists_every_slot() {
        let table = table_with(&[4, LEAP_DAY_INDEX]);
        let out = render_calendar_all(&table, index(60));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 12);
        assert_eq!(out.split_whitespace().count(), 366);
        assert!(lines[0].starts_with("1/1 1/2 1/3 1/4 1/5* 1/6 "));
        assert!(lines[0].ends_with(" 1/31"));
        assert!(lines[1].ends_with(" 2/28 2/29*"));
        assert!(lines[2].starts_with("[3/1] 3/2 "));
        assert!(lines[11].ends_with(" 12/31"));
    }

    #[test]
    fn test_render_calendar_all_marks_populated_current() {
        let table = table_with(&[0]);
        let out = render_calendar_all(&table, DayIndex::FIRST);
        assert!(out.starts_with("[1/1*] 1/2 "));
        assert_eq!(out.matches('*').count(), 1);
    }
}
