//! Text output formatting: practitioner cards with colors.

use medidex_core::Doctor;
use medidex_store::Theme;

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";
const BRIGHT_GREEN: &str = "\x1b[92m";
const BRIGHT_RED: &str = "\x1b[91m";
const BRIGHT_CYAN: &str = "\x1b[96m";

// Card border characters
const CORNER_TOP: char = '┌';
const CORNER_BOTTOM: char = '└';
const EDGE: char = '│';
const RULE: char = '─';

/// Text formatter with optional colors, palette keyed off the theme.
pub struct TextFormatter {
    use_colors: bool,
    theme: Theme,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool, theme: Theme) -> Self {
        Self { use_colors, theme }
    }

    /// Formats the full directory as a stack of cards.
    pub fn format_directory(&self, doctors: &[Doctor]) -> String {
        if doctors.is_empty() {
            return "No doctors in the directory.\n".to_string();
        }

        let mut out = String::new();
        for doctor in doctors {
            out.push_str(&self.format_card(doctor));
        }
        out.push_str(&format!(
            "{}\n",
            self.dim(&format!("{} practitioner(s)", doctors.len()))
        ));
        out
    }

    /// Formats a single practitioner card.
    pub fn format_card(&self, doctor: &Doctor) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "{CORNER_TOP}{RULE} {} {}",
            self.bold(&doctor.full_name()),
            self.dim(&format!("({})", doctor.state)),
        ));
        lines.push(format!("{EDGE} {}", self.license_badge(doctor.license_active)));
        lines.push(format!(
            "{CORNER_BOTTOM}{RULE} {}",
            self.dim(&format!("id {}", doctor.id)),
        ));

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    /// Formats the detail view for a single practitioner.
    pub fn format_detail(&self, doctor: &Doctor) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "{CORNER_TOP}{RULE} {} {}",
            self.bold(&doctor.full_name()),
            self.dim(&format!("({})", doctor.state)),
        ));
        lines.push(format!("{EDGE} {}", self.license_badge(doctor.license_active)));
        lines.push(format!(
            "{EDGE} Born       {}",
            self.accent(&doctor.date_of_birth.to_string())
        ));
        lines.push(format!(
            "{EDGE} Registered {}",
            self.accent(&doctor.registered_at.to_string())
        ));
        lines.push(format!(
            "{CORNER_BOTTOM}{RULE} {}",
            self.dim(&format!("id {}", doctor.id)),
        ));

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    fn license_badge(&self, active: bool) -> String {
        if active {
            self.color(self.palette_green(), "● license active")
        } else {
            self.color(self.palette_red(), "○ license inactive")
        }
    }

    // The dark palette uses bright variants so badges stay readable on
    // dark backgrounds.
    fn palette_green(&self) -> &'static str {
        match self.theme {
            Theme::Dark => BRIGHT_GREEN,
            Theme::Light => GREEN,
        }
    }

    fn palette_red(&self) -> &'static str {
        match self.theme {
            Theme::Dark => BRIGHT_RED,
            Theme::Light => RED,
        }
    }

    fn palette_accent(&self) -> &'static str {
        match self.theme {
            Theme::Dark => BRIGHT_CYAN,
            Theme::Light => CYAN,
        }
    }

    fn color(&self, code: &str, text: &str) -> String {
        if self.use_colors {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        self.color(BOLD, text)
    }

    fn dim(&self, text: &str) -> String {
        self.color(DIM, text)
    }

    fn accent(&self, text: &str) -> String {
        self.color(self.palette_accent(), text)
    }
}
