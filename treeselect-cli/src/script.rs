//! Line-oriented command scripts driving a picker.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use treeselect_lib::{Row, TreeSelect};

/// Errors parsing a script line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
    #[error("'{0}' is not a valid index")]
    InvalidIndex(String),
}

/// One user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Open,
    Close,
    Search(String),
    Clear,
    Check(String),
    Uncheck(String),
    Toggle(String),
    Drill(usize),
    Up(usize),
    Root,
    Rows,
    Confirm,
    Show,
}

impl FromStr for Command {
    type Err = ScriptError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, Some(arg.trim())),
            None => (line, None),
        };
        let text = |cmd: &'static str| -> Result<String, ScriptError> {
            arg.filter(|a| !a.is_empty())
                .map(String::from)
                .ok_or(ScriptError::MissingArgument(cmd))
        };
        let index = |cmd: &'static str| -> Result<usize, ScriptError> {
            let arg = text(cmd)?;
            arg.parse::<usize>()
                .map_err(|_| ScriptError::InvalidIndex(arg))
        };

        Ok(match name {
            "open" => Self::Open,
            "close" => Self::Close,
            "search" => Self::Search(text("search")?),
            "clear" => Self::Clear,
            "check" => Self::Check(text("check")?),
            "uncheck" => Self::Uncheck(text("uncheck")?),
            "toggle" => Self::Toggle(text("toggle")?),
            "drill" => Self::Drill(index("drill")?),
            "up" => Self::Up(index("up")?),
            "root" => Self::Root,
            "rows" => Self::Rows,
            "confirm" => Self::Confirm,
            "show" => Self::Show,
            other => return Err(ScriptError::UnknownCommand(other.to_string())),
        })
    }
}

/// A picker plus the output it renders to.
pub struct Session<W: Write> {
    picker: TreeSelect,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(picker: TreeSelect, out: W) -> Self {
        Self { picker, out }
    }

    /// Execute every line of a script. Blank lines and `#` comments are skipped.
    pub fn run(&mut self, script: impl BufRead) -> io::Result<()> {
        for (number, line) in script.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            match trimmed.parse::<Command>() {
                Ok(command) => self.execute(command)?,
                Err(e) => {
                    log::warn!("Line {}: {}", number + 1, e);
                    writeln!(self.out, "error: line {}: {}", number + 1, e)?;
                }
            }
        }
        Ok(())
    }

    /// Apply one command and print its effect.
    pub fn execute(&mut self, command: Command) -> io::Result<()> {
        log::debug!("Execute {:?}", command);
        let result = match command {
            Command::Open => match self.picker.open() {
                Ok(()) => return self.render(),
                Err(e) => Err(e.into()),
            },
            Command::Close => {
                self.picker.close();
                Ok(())
            }
            Command::Search(term) => {
                self.picker.set_search(term);
                return self.render();
            }
            Command::Clear => {
                self.picker.clear_search();
                return self.render();
            }
            Command::Check(value) => self.picker.check(&value),
            Command::Uncheck(value) => self.picker.uncheck(&value),
            Command::Toggle(value) => self.picker.toggle(&value).map(|_| ()),
            Command::Drill(index) => {
                if !self.picker.drill_into(index) {
                    writeln!(self.out, "cannot drill into row {}", index)?;
                }
                return self.render();
            }
            Command::Up(depth) => {
                self.picker.drill_to(depth);
                return self.render();
            }
            Command::Root => {
                self.picker.reset_navigation();
                return self.render();
            }
            Command::Rows => return self.render(),
            Command::Confirm => {
                let value = self.picker.confirm();
                let json = serde_json::to_string(&value).map_err(io::Error::other)?;
                return writeln!(self.out, "confirmed: {}", json);
            }
            Command::Show => return self.show(),
        };

        if let Err(e) = result {
            writeln!(self.out, "error: {}", e)?;
        }
        Ok(())
    }

    /// Print the closed input's text and the footer count.
    fn show(&mut self) -> io::Result<()> {
        let display = match self.picker.display_value() {
            "" => format!("({})", self.picker.placeholder()),
            text => text.to_string(),
        };
        writeln!(self.out, "value: {}", display)?;
        writeln!(self.out, "{} selected", self.picker.selected_count())
    }

    /// Print the picker screen: title, breadcrumb, rows, footer.
    fn render(&mut self) -> io::Result<()> {
        writeln!(self.out, "== {}", self.picker.label())?;
        if self.picker.is_searching() {
            writeln!(self.out, "search: {}", self.picker.search_term())?;
        }
        let trail = self.picker.breadcrumb();
        if !trail.is_empty() {
            let titles: Vec<&str> = trail.iter().map(|n| n.label()).collect();
            writeln!(self.out, "All > {}", titles.join(" > "))?;
        }
        let rows = self.picker.rows();
        if rows.is_empty() {
            writeln!(self.out, "  (no options)")?;
        }
        for (index, row) in rows.iter().enumerate() {
            writeln!(self.out, "{}", format_row(index, row))?;
            if let Some(description) = row.description.as_deref().filter(|d| !d.is_empty()) {
                writeln!(self.out, "      {}", description)?;
            }
        }
        writeln!(self.out, "-- {} selected", self.picker.selected_count())
    }
}

fn format_row(index: usize, row: &Row) -> String {
    let mark = if row.checked {
        "[x]"
    } else if row.indeterminate {
        "[-]"
    } else {
        "[ ]"
    };
    let mut line = format!("{:>3} {} {}", index, mark, row.title);
    if let Some(count) = row.checked_count {
        line.push_str(&format!("  ({} selected)", count));
    }
    if row.has_children {
        line.push_str(" >");
    }
    line
}
