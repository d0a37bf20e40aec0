// One parsed ground-truth row: class, persistent object id, and a
// center/extent bounding box in [0,1]-relative coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    pub class_id: i64,
    pub object_id: i64,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Detection {
    /// True when every box field lies inside the unit interval. Out-of-range
    /// values still convert (no clamping), this only drives a warning.
    pub fn in_unit_range(&self) -> bool {
        [self.x, self.y, self.w, self.h]
            .iter()
            .all(|v| (0.0..=1.0).contains(v))
    }
}

// Struct to hold per-run processing statistics
#[derive(Debug, Default, Clone)]
pub struct ConversionStats {
    pub frames_processed: usize,
    pub rows_written: usize,
    pub rows_dropped: usize,
}

impl ConversionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_frames(&mut self) {
        self.frames_processed += 1;
    }

    pub fn increment_written(&mut self) {
        self.rows_written += 1;
    }

    pub fn increment_dropped(&mut self) {
        self.rows_dropped += 1;
    }

    pub fn print_summary(&self) {
        log::info!("=== Conversion Summary ===");
        log::info!("Frames processed: {}", self.frames_processed);
        log::info!("Rows written: {}", self.rows_written);
        if self.rows_dropped > 0 {
            log::info!("Rows dropped by class filter: {}", self.rows_dropped);
        }
    }
}
