//! Tests for initial image choice, bounded scaling and background loading

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use mosaic_mural::MuralError;
    use mosaic_mural::io::configuration::{MAX_HEIGHT, MAX_WIDTH};
    use mosaic_mural::io::loader::{
        ImageLoader, LoadEvent, LoadRequester, choose_initial, read_bitmap, scale_to_fit,
    };
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::path::PathBuf;

    // Tests images within bounds keep their natural size
    // Verified by always scaling to the maximum width
    #[test]
    fn test_scale_within_bounds_unchanged() {
        assert_eq!(scale_to_fit(800, 600, MAX_WIDTH, MAX_HEIGHT).unwrap(), (800, 600));
        assert_eq!(scale_to_fit(1000, 650, MAX_WIDTH, MAX_HEIGHT).unwrap(), (1000, 650));
        assert_eq!(scale_to_fit(1, 1, MAX_WIDTH, MAX_HEIGHT).unwrap(), (1, 1));
    }

    // Tests a single over-limit side is pinned with the other scaled to match
    // Verified by swapping the width and height checks
    #[test]
    fn test_scale_single_side() {
        assert_eq!(scale_to_fit(2000, 500, MAX_WIDTH, MAX_HEIGHT).unwrap(), (1000, 250));
        assert_eq!(scale_to_fit(500, 1300, MAX_WIDTH, MAX_HEIGHT).unwrap(), (250, 650));
    }

    // Tests both steps apply in order when both sides exceed their limits
    // Verified by scaling once with the smaller factor
    #[test]
    fn test_scale_both_sides() {
        // 2000x1500 -> 1000x750 -> 866x650
        assert_eq!(scale_to_fit(2000, 1500, MAX_WIDTH, MAX_HEIGHT).unwrap(), (866, 650));
        assert_eq!(scale_to_fit(3000, 3000, MAX_WIDTH, MAX_HEIGHT).unwrap(), (650, 650));
    }

    // Tests degenerate dimensions are rejected
    // Verified by letting a side truncate to zero
    #[test]
    fn test_scale_rejects_zero() {
        assert!(matches!(
            scale_to_fit(0, 10, MAX_WIDTH, MAX_HEIGHT),
            Err(MuralError::InvalidSourceData { .. })
        ));
        assert!(matches!(
            scale_to_fit(10000, 1, MAX_WIDTH, MAX_HEIGHT),
            Err(MuralError::InvalidSourceData { .. })
        ));
    }

    // Tests the initial pick is a member and an empty list is an error
    // Verified by indexing past the end
    #[test]
    fn test_choose_initial() {
        let candidates = vec![
            PathBuf::from("ocean.jpg"),
            PathBuf::from("bird.jpg"),
            PathBuf::from("tree.jpg"),
        ];
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let choice = choose_initial(&candidates, &mut rng).unwrap();
            assert!(candidates.contains(choice));
        }

        assert!(matches!(
            choose_initial(&[], &mut rng),
            Err(MuralError::EmptyCandidates)
        ));
    }

    // Tests every candidate can be chosen
    // Verified by always returning the first candidate
    #[test]
    fn test_choose_initial_reaches_all() {
        let candidates = vec![PathBuf::from("a"), PathBuf::from("b"), PathBuf::from("c")];
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = std::collections::BTreeSet::new();

        for _ in 0..200 {
            seen.insert(choose_initial(&candidates, &mut rng).unwrap().clone());
        }

        assert_eq!(seen.len(), 3);
    }

    // Tests a background load delivers the decoded bitmap
    // Verified by sending the event before decoding
    #[test]
    fn test_loader_round_trip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("pixel.png");
        RgbaImage::from_pixel(3, 2, Rgba([9, 8, 7, 255]))
            .save(&path)
            .unwrap();

        let loader = ImageLoader::new();
        loader.request_load(path.clone());

        match loader.wait().unwrap() {
            LoadEvent::Loaded {
                path: loaded,
                bitmap,
            } => {
                assert_eq!(loaded, path);
                assert_eq!(bitmap.to_rgba8().dimensions(), (3, 2));
            }
            LoadEvent::Failed { error, .. } => panic!("load failed: {error}"),
        }
        assert!(loader.poll().is_none());
    }

    // Tests a missing file reports a failed load instead of panicking
    // Verified by unwrapping the read result on the worker
    #[test]
    fn test_loader_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("missing.png");

        let loader = ImageLoader::default();
        loader.request_load(path.clone());

        match loader.wait().unwrap() {
            LoadEvent::Failed { path: failed, error } => {
                assert_eq!(failed, path);
                assert!(matches!(error, MuralError::FileSystem { .. }));
            }
            LoadEvent::Loaded { .. } => panic!("missing file loaded"),
        }
    }

    // Tests undecodable bytes are reported as a load error
    // Verified by treating any file as an image
    #[test]
    fn test_read_bitmap_rejects_garbage() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("notes.png");
        std::fs::write(&path, b"not an image").unwrap();

        assert!(matches!(
            read_bitmap(&path),
            Err(MuralError::ImageLoad { .. })
        ));
    }
}
