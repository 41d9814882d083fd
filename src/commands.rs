use anyhow::{Context, Result};
use birthday_calendar::{
    CalendarView, MonthDay, render_calendar, render_calendar_all, render_day, select_day,
};

use crate::cli::Command;

/// Moves the view as the command asks and renders the result.
pub fn execute(command: &Command, view: &mut CalendarView) -> Result<String> {
    match *command {
        Command::Show { date, index } => {
            if let Some(index) = index {
                view.jump_to(select_day(index)?);
            } else {
                jump_if_given(view, date);
            }
            Ok(render_current(view))
        },
        Command::Next { from } => {
            jump_if_given(view, from);
            view.advance().context("cannot move to the next birthday")?;
            Ok(render_current(view))
        },
        Command::Prev { from } => {
            jump_if_given(view, from);
            view.retreat().context("cannot move to the previous birthday")?;
            Ok(render_current(view))
        },
        Command::Calendar { date, all } => {
            jump_if_given(view, date);
            let render = if all { render_calendar_all } else { render_calendar };
            Ok(render(view.staff(), view.current()))
        },
    }
}

fn jump_if_given(view: &mut CalendarView, date: Option<MonthDay>) {
    if let Some(date) = date {
        view.jump_to(date.index());
    }
}

fn render_current(view: &CalendarView) -> String {
    render_day(view.current_month_day(), view.current_staff())
}
