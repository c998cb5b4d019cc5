// Display labels
pub const NO_DURATION_LABEL: &str = "Sin duración";
pub const HOUR_RANGE_SEPARATOR: &str = " a ";
pub const UNKNOWN_CLOCK_LABEL: &str = "--:--";

// Chart label formats (chrono strftime)
pub const WEEK_LABEL_FORMAT: &str = "%d/%m/%Y";
pub const MONTH_LABEL_FORMAT: &str = "%m/%Y";
pub const CLOCK_FORMAT: &str = "%H:%M";

// Date patterns accepted by the hour range formatter
pub const ISO_DATE_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}$";
pub const DAY_FIRST_DATE_PATTERN: &str = r"^\d{2}/\d{2}/\d{4}$";

// Period help text
pub const PERIOD_HELP_TEXT: &str = "Period (YYYY or YYYYMM format, e.g., 202401)";

// Chart period aliases
pub const WEEK_ALIASES: &[&str] = &["week", "weekly", "w"];
pub const MONTH_ALIASES: &[&str] = &["month", "monthly", "m"];

// Width of the text bar chart
pub const DEFAULT_CHART_WIDTH: usize = 40;
pub const MAX_CHART_WIDTH: usize = 500;
