use crate::types::Detection;

/// Linear rescale of `value` from `[min, max]` onto `[a, b]`. Used with
/// `min=0, max=1` to map relative coordinates into pixel space. No clamping:
/// out-of-range inputs pass through into out-of-range pixel values.
pub fn normalize(value: f64, min: f64, max: f64, a: f64, b: f64) -> f64 {
    (value - min) / (max - min) * (b - a) + a
}

/// A bounding box in pixel units: top-left corner plus extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AbsoluteBox {
    pub x1: f64,
    pub y1: f64,
    pub w: f64,
    pub h: f64,
}

impl AbsoluteBox {
    /// Derive the pixel-space box from a relative-coordinate detection.
    pub fn from_detection(det: &Detection, img_w: u32, img_h: u32) -> Self {
        let x = normalize(det.x, 0.0, 1.0, 0.0, img_w as f64);
        let y = normalize(det.y, 0.0, 1.0, 0.0, img_h as f64);
        let w = normalize(det.w, 0.0, 1.0, 0.0, img_w as f64);
        let h = normalize(det.h, 0.0, 1.0, 0.0, img_h as f64);

        AbsoluteBox {
            x1: x - w / 2.0,
            y1: y - h / 2.0,
            w,
            h,
        }
    }

    pub fn x2(&self) -> f64 {
        self.x1 + self.w
    }

    pub fn y2(&self) -> f64 {
        self.y1 + self.h
    }
}

/// Format one MOT challenge row:
/// `frame,id,x1,y1,w,h,conf,x,y,z` with confidence fixed to 1 (ground
/// truth, not a detector score) and the 3-D position fields fixed to -1.
pub fn mot_row(frame: u64, object_id: i64, bbox: &AbsoluteBox) -> String {
    format!(
        "{},{},{},{},{},{},1,-1,-1,-1",
        frame, object_id, bbox.x1, bbox.y1, bbox.w, bbox.h
    )
}

/// Format one PASCAL VOC row: `class_id x1 y1 x2 y2`.
pub fn voc_row(class_id: i64, bbox: &AbsoluteBox) -> String {
    format!(
        "{} {} {} {} {}",
        class_id,
        bbox.x1,
        bbox.y1,
        bbox.x2(),
        bbox.y2()
    )
}
