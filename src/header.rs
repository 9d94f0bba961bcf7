use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use log::{debug, info};
use regex::Regex;

use crate::error::ConvertError;
use crate::grid::PixelGrid;

pub const ARRAY_STORAGE_ATTRIBUTE: &str = "PROGMEM";
pub const VALUES_PER_LINE: u32 = 16;
pub const HEADER_EXTENSION: &str = "h";

fn forbidden_name_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[ :,\r?]").unwrap())
}

/// Array identifier for `input`: the file name without its extension and
/// without spaces, colons, commas, carriage returns or question marks.
pub fn array_name(input: &Path) -> Result<String, ConvertError> {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    let name = forbidden_name_chars().replace_all(&stem, "").into_owned();
    if name.is_empty() {
        return Err(ConvertError::EmptyName {
            path: input.to_path_buf(),
        });
    }
    Ok(name)
}

pub fn header_path(output_dir: &Path, name: &str) -> PathBuf {
    output_dir.join(format!("{}.{}", name, HEADER_EXTENSION))
}

/// Renders `grid` as a C array declaration, row by row.
///
/// Values are `0x`-prefixed two digit lowercase hex joined by `", "`, with a
/// line break after every 16th value counted over the whole grid. The last
/// value is followed by `"\n};"` instead of a separator.
pub fn format_array(name: &str, grid: &PixelGrid) -> String {
    let total = grid.width() * grid.height();
    let mut s = String::with_capacity(64 + total as usize * 6 + (total / VALUES_PER_LINE) as usize);
    s.push_str(&format!(
        "const unsigned char {}[] {} = {{\n",
        name, ARRAY_STORAGE_ATTRIBUTE
    ));

    for (idx, val) in (0_u32..).zip(grid.row_major()) {
        s.push_str(&format!("{:#04x}", val));
        if idx + 1 == total {
            break;
        }
        s.push_str(", ");
        if idx % VALUES_PER_LINE == VALUES_PER_LINE - 1 {
            s.push('\n');
        }
    }
    s.push_str("\n};");
    s
}

pub fn write_header(path: &Path, text: &str) -> Result<(), ConvertError> {
    std::fs::write(path, text).map_err(|source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote {} ({} bytes)", path.display(), text.len());
    Ok(())
}

/// Formats `grid` and writes it to `<output_dir>/<name>.h`, replacing any
/// existing file. Returns the written path and text.
pub fn output(grid: &PixelGrid, input: &Path, output_dir: &Path) -> Result<(PathBuf, String), ConvertError> {
    let name = array_name(input)?;
    let path = header_path(output_dir, &name);
    debug!("Array name {:?}, output {}", name, path.display());

    let text = format_array(&name, grid);
    write_header(&path, &text)?;
    Ok((path, text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Size;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("pic2oled-header-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_array_name_sanitized() {
        assert_eq!(array_name(Path::new("My Pic: 1.png")).unwrap(), "MyPic1");
        assert_eq!(array_name(Path::new("/some/dir/a,b?c\r.bmp")).unwrap(), "abc");
        assert_eq!(array_name(Path::new("dir/face.tar.gz")).unwrap(), "face.tar");
        assert_eq!(array_name(Path::new("noext")).unwrap(), "noext");
    }

    #[test]
    fn test_array_name_empty() {
        assert!(matches!(
            array_name(Path::new("dir/ ? .png")),
            Err(ConvertError::EmptyName { .. })
        ));
    }

    #[test]
    fn test_header_path() {
        assert_eq!(header_path(Path::new("out"), "MyPic1"), Path::new("out/MyPic1.h"));
        // the dot in the name must survive
        assert_eq!(header_path(Path::new("out"), "face.tar"), Path::new("out/face.tar.h"));
    }

    #[test]
    fn test_format_all_zero_display() {
        let grid = PixelGrid::new(Size { width: 200, height: 200 });
        let s = format_array("img", &grid);

        assert!(s.starts_with("const unsigned char img[] PROGMEM = {\n0x00, 0x00, "));
        assert!(s.ends_with("0x00\n};"));
        assert!(!s.contains(",\n};"));

        let body = &s["const unsigned char img[] PROGMEM = {\n".len()..s.len() - "\n};".len()];
        let lines: Vec<&str> = body.split('\n').collect();
        assert_eq!(lines.len(), 40000 / 16);
        assert_eq!(lines[0], format!("{}0x00", "0x00, ".repeat(15)) + ", ");
        assert_eq!(*lines.last().unwrap(), format!("{}0x00", "0x00, ".repeat(15)));
        assert_eq!(s.matches("0x00").count(), 40000);
    }

    #[test]
    fn test_format_hex_boundaries() {
        let grid = PixelGrid::from_fn((3_u32, 1_u32).into(), |x, _| [0x00, 0xff, 0x1a][x as usize]);
        assert_eq!(
            format_array("t", &grid),
            "const unsigned char t[] PROGMEM = {\n0x00, 0xff, 0x1a\n};"
        );
    }

    #[test]
    fn test_format_row_order() {
        // 4 columns x 5 rows, value encodes (x, y); 20 values, one line break
        let grid = PixelGrid::from_fn((4_u32, 5_u32).into(), |x, y| (y << 4 | x) as u8);
        let s = format_array("t", &grid);
        let expected_values: Vec<String> = (0..5)
            .flat_map(|y| (0..4).map(move |x| format!("{:#04x}", y << 4 | x)))
            .collect();
        let expected = format!(
            "const unsigned char t[] PROGMEM = {{\n{}, \n{}\n}};",
            expected_values[..16].join(", "),
            expected_values[16..].join(", ")
        );
        assert_eq!(s, expected);
    }

    #[test]
    fn test_format_line_break_not_after_last() {
        let grid = PixelGrid::new(Size { width: 16, height: 1 });
        let s = format_array("t", &grid);
        assert!(s.ends_with("0x00, 0x00\n};"));
        assert_eq!(s.matches('\n').count(), 2);
    }

    #[test]
    fn test_output_writes_and_overwrites() {
        let dir = scratch_dir("output");
        let path = dir.join("MyPic1.h");
        std::fs::write(&path, "stale").unwrap();

        let grid = PixelGrid::new(Size { width: 200, height: 200 });
        let (written, text) = output(&grid, Path::new("pics/My Pic: 1.png"), &dir).unwrap();
        assert_eq!(written, path);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), text);
        assert!(text.starts_with("const unsigned char MyPic1[] PROGMEM = {\n"));
    }

    #[test]
    fn test_output_missing_dir() {
        let dir = scratch_dir("missing").join("nope");
        let grid = PixelGrid::new(Size { width: 2, height: 2 });
        assert!(matches!(
            output(&grid, Path::new("a.png"), &dir),
            Err(ConvertError::Write { .. })
        ));
    }
}
