mod datetime;
mod filesystem;
mod string;

pub use datetime::format_excel_datetime;
pub use filesystem::write_output;
pub use string::normalize_string;
