use chrono::Local;
use colored::*;

/// Console logger tagged with a component name and a color, shared by every
/// actor in the system.
#[derive(Debug, Clone)]
pub struct Logger {
    pub name: String,
    pub color: Color,
}

impl Logger {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into().to_uppercase(),
            color,
        }
    }

    fn timestamp() -> String {
        Local::now().format("%H:%M:%S").to_string()
    }

    fn tag(&self, level: &str) -> String {
        format!("[{}][{}][{}]", Self::timestamp(), level, self.name)
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        println!(
            "{} {} {}",
            self.tag("INFO").bold().color(self.color),
            "→".dimmed(),
            msg.as_ref()
        );
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        println!(
            "{} {} {}",
            self.tag("WARN").bold().yellow(),
            "→".dimmed(),
            msg.as_ref()
        );
    }

    pub fn error(&self, msg: impl AsRef<str>) {
        eprintln!(
            "{} {} {}",
            self.tag("ERROR").bold().red(),
            "→".dimmed(),
            msg.as_ref()
        );
    }

    /// Low-noise channel for swallowed UI races (stale responses,
    /// out-of-bounds indices).
    pub fn debug(&self, msg: impl AsRef<str>) {
        println!(
            "{} {} {}",
            self.tag("DEBUG").dimmed(),
            "→".dimmed(),
            msg.as_ref().dimmed()
        );
    }
}
