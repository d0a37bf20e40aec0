use log::{info, warn};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::Args;
use crate::conversion::{voc_row, AbsoluteBox};
use crate::error::{ConvertError, Result};
use crate::io::{enumerate_frame_files, read_detection_file};
use crate::types::ConversionStats;
use crate::utils::{create_progress_bar, ensure_output_directory};

/// Convert a directory of per-frame ground-truth files into PASCAL VOC
/// files, one per frame, named like their input files.
///
/// The per-frame output file is created even when the class filter drops
/// every record; downstream mAP tooling expects one file per frame.
pub fn process_voc_dataset(args: &Args) -> Result<ConversionStats> {
    let input_dir = Path::new(&args.input_dir_gt);
    let output_dir = Path::new(&args.output_dir_gt);

    let files = enumerate_frame_files(input_dir)?;
    ensure_output_directory(output_dir)?;

    let pb = create_progress_bar(files.len() as u64, "VOC");
    let mut stats = ConversionStats::new();
    let mut out_of_range_seen = false;

    for path in &files {
        let detections = read_detection_file(path)?;

        // Glob matches always carry a file name
        let out_path = output_dir.join(path.file_name().unwrap_or_default());
        let write_err = |source| ConvertError::WriteFile {
            path: out_path.clone(),
            source,
        };
        let file = File::create(&out_path).map_err(write_err)?;
        let mut writer = BufWriter::new(file);

        for det in detections {
            if !det.in_unit_range() && !out_of_range_seen {
                warn!(
                    "{}: relative coordinates outside [0,1] pass through unclamped",
                    path.display()
                );
                out_of_range_seen = true;
            }

            if !args.class_id_filter.keeps(det.class_id) {
                stats.increment_dropped();
                continue;
            }

            let bbox = AbsoluteBox::from_detection(&det, args.img_w, args.img_h);
            writeln!(writer, "{}", voc_row(det.class_id, &bbox)).map_err(write_err)?;
            stats.increment_written();
        }

        writer.flush().map_err(write_err)?;
        stats.increment_frames();
        pb.inc(1);
    }

    pb.finish_with_message("VOC conversion complete");

    info!(
        "Wrote {} frame files to {}",
        stats.frames_processed,
        output_dir.display()
    );
    stats.print_summary();
    Ok(stats)
}
