use clap::Parser;
use std::fmt;

/// Command-line arguments shared by the MOT and VOC converters.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct Args {
    /// Directory containing the ground-truth annotation files
    #[arg(long = "input_dir_gt")]
    pub input_dir_gt: String,

    /// Directory for the converted ground-truth output
    #[arg(long = "output_dir_gt")]
    pub output_dir_gt: String,

    /// Class ID to keep, or "all" to keep every class
    #[arg(long = "class_id_filter", default_value = "all", value_parser = parse_class_filter)]
    pub class_id_filter: ClassFilter,

    /// Width in pixels of the video image frame
    #[arg(long = "img_w")]
    pub img_w: u32,

    /// Height in pixels of the video image frame
    #[arg(long = "img_h")]
    pub img_h: u32,
}

/// Restriction on which classes survive conversion.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ClassFilter {
    /// Keep every record regardless of class
    All,
    /// Keep only records with this class_id
    Id(i64),
}

impl ClassFilter {
    pub fn keeps(&self, class_id: i64) -> bool {
        match self {
            ClassFilter::All => true,
            ClassFilter::Id(id) => class_id == *id,
        }
    }
}

impl fmt::Display for ClassFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassFilter::All => write!(f, "all classes"),
            ClassFilter::Id(id) => write!(f, "class_id {}", id),
        }
    }
}

// Accept "all" (any case) or a decimal class id
pub fn parse_class_filter(s: &str) -> Result<ClassFilter, String> {
    if s.eq_ignore_ascii_case("all") {
        return Ok(ClassFilter::All);
    }
    match s.parse::<i64>() {
        Ok(id) => Ok(ClassFilter::Id(id)),
        Err(_) => Err(format!(
            "expected \"all\" or an integer class id, got \"{}\"",
            s
        )),
    }
}
