//! Tests for color formatting, table sampling and coordinate lookup

#[cfg(test)]
mod tests {
    use mosaic_mural::mural::color::{Color, ColorTable, pixel_index};
    use mosaic_mural::mural::surface::Surface;

    fn is_hex_color(value: &str) -> bool {
        value.len() == 7
            && value.starts_with('#')
            && value
                .chars()
                .skip(1)
                .all(|ch| ch.is_ascii_digit() || ('a'..='f').contains(&ch))
    }

    // Tests hex formatting is lowercase and zero padded
    // Verified by switching the format to uppercase without padding
    #[test]
    fn test_color_hex_formatting() {
        assert_eq!(Color::new(0, 0, 0).to_hex(), "#000000");
        assert_eq!(Color::new(255, 255, 255).to_hex(), "#ffffff");
        assert_eq!(Color::new(0x0a, 0xb0, 0x01).to_hex(), "#0ab001");
        assert_eq!(Color::new(0x12, 0x34, 0x56).to_string(), "#123456");
    }

    // Tests alpha is discarded when reading an RGBA sample
    // Verified by folding alpha into the blue channel
    #[test]
    fn test_color_from_rgba_drops_alpha() {
        let color = Color::from_rgba([1, 2, 3, 0]);
        assert_eq!(color, Color::new(1, 2, 3));
        assert_eq!(color.to_rgba(), [1, 2, 3, 255]);
    }

    // Tests the row offset of the coordinate mapping
    // Verified by removing the minus one from the row term
    #[test]
    fn test_pixel_index_row_offset() {
        assert_eq!(pixel_index(0, 1, 10), 0);
        assert_eq!(pixel_index(3, 2, 10), 13);
        assert_eq!(pixel_index(0, 0, 10), -10);
        assert_eq!(pixel_index(5, 0, 10), -5);
        assert_eq!(pixel_index(10, 10, 10), 100);
    }

    // Tests table length and entry format for an arbitrary bitmap
    // Verified by emitting one entry per byte instead of per pixel
    #[test]
    fn test_table_has_one_hex_entry_per_pixel() {
        let (width, height) = (7u32, 5u32);
        let bytes: Vec<u8> = (0..width * height * 4).map(|i| (i * 37 % 256) as u8).collect();

        let table = ColorTable::from_rgba_bytes(width, height, &bytes).unwrap();

        assert_eq!(table.len(), (width * height) as usize);
        assert_eq!(table.width(), width);
        assert_eq!(table.height(), height);
        for hex in table.hex_strings() {
            assert!(is_hex_color(&hex), "not a hex color: {hex}");
        }
    }

    // Tests a byte count that does not match the dimensions is rejected
    // Verified by truncating silently instead of erroring
    #[test]
    fn test_table_rejects_mismatched_bytes() {
        assert!(ColorTable::from_rgba_bytes(2, 2, &[0; 15]).is_err());
        assert!(ColorTable::from_rgba_bytes(2, 2, &[0; 17]).is_err());
        assert!(ColorTable::from_rgba_bytes(0, 0, &[]).unwrap().is_empty());
    }

    // Tests lookups outside the table miss instead of wrapping
    // Verified by wrapping negative indices modulo length
    #[test]
    fn test_color_at_misses_outside_table() {
        let bytes = [
            10, 0, 0, 255, 20, 0, 0, 255, //
            30, 0, 0, 255, 40, 0, 0, 255,
        ];
        let table = ColorTable::from_rgba_bytes(2, 2, &bytes).unwrap();

        assert_eq!(table.color_at(0, 1), Some(Color::new(10, 0, 0)));
        assert_eq!(table.color_at(1, 2), Some(Color::new(40, 0, 0)));
        assert_eq!(table.color_at(1, 0), None);
        assert_eq!(table.color_at(0, 0), None);
        assert_eq!(table.color_at(2, 2), None);
        assert_eq!(table.get(-1), None);
    }

    // Tests sampling a surface reads its pixels in row-major order
    // Verified by iterating columns before rows
    #[test]
    fn test_sample_surface_row_major() {
        let mut surface = Surface::new(2, 2);
        surface.fill_rect(1.0, 0.0, 1.0, 1.0, Color::new(1, 1, 1));
        surface.fill_rect(0.0, 1.0, 1.0, 1.0, Color::new(2, 2, 2));

        let table = ColorTable::sample(&surface);

        assert_eq!(
            table.hex_strings(),
            vec!["#000000", "#010101", "#020202", "#000000"]
        );
    }
}
