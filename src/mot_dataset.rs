use log::{info, warn};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::{Args, ClassFilter};
use crate::conversion::{mot_row, AbsoluteBox};
use crate::error::{ConvertError, Result};
use crate::io::{enumerate_frame_files, frame_index, read_detection_file};
use crate::remap::IdentityRemapper;
use crate::types::ConversionStats;
use crate::utils::{create_progress_bar, ensure_output_directory};

/// Convert a directory of per-frame ground-truth files into a single MOT
/// challenge `gt.txt` in the output directory.
///
/// Frames are processed strictly in enumerator order because identifier
/// assignment depends on first-sighting order. With the "all" filter every
/// object is renumbered through an [`IdentityRemapper`]; with a specific
/// class filter the raw id is kept, shifted from 0-based to 1-based.
pub fn process_mot_dataset(args: &Args) -> Result<ConversionStats> {
    let input_dir = Path::new(&args.input_dir_gt);
    let output_dir = Path::new(&args.output_dir_gt);

    let files = enumerate_frame_files(input_dir)?;
    ensure_output_directory(output_dir)?;

    // File::create truncates a pre-existing gt.txt, so re-runs never append
    let gt_path = output_dir.join("gt.txt");
    let file = File::create(&gt_path).map_err(|source| ConvertError::WriteFile {
        path: gt_path.clone(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    let write_err = |source| ConvertError::WriteFile {
        path: gt_path.clone(),
        source,
    };

    let pb = create_progress_bar(files.len() as u64, "MOT");
    let mut remapper = IdentityRemapper::new();
    let mut stats = ConversionStats::new();
    let mut out_of_range_seen = false;

    for path in &files {
        let frame = frame_index(path)? + 1;
        for det in read_detection_file(path)? {
            if !det.in_unit_range() && !out_of_range_seen {
                warn!(
                    "{}: relative coordinates outside [0,1] pass through unclamped",
                    path.display()
                );
                out_of_range_seen = true;
            }

            let object_id = match args.class_id_filter {
                ClassFilter::All => remapper.resolve(det.class_id, det.object_id),
                ClassFilter::Id(class_id) => {
                    if det.class_id != class_id {
                        stats.increment_dropped();
                        continue;
                    }
                    // Raw ids of a single class are assumed dense and
                    // 0-based; shift to the 1-based MOT id space
                    det.object_id + 1
                }
            };

            let bbox = AbsoluteBox::from_detection(&det, args.img_w, args.img_h);
            writeln!(writer, "{}", mot_row(frame, object_id, &bbox)).map_err(write_err)?;
            stats.increment_written();
        }
        stats.increment_frames();
        pb.inc(1);
    }

    writer.flush().map_err(write_err)?;
    pb.finish_with_message("MOT conversion complete");

    info!("Wrote {}", gt_path.display());
    stats.print_summary();
    Ok(stats)
}
