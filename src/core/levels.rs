//! Built-in level layouts and the plain-text level file loader.
//!
//! Layouts are written with the default legend (`#` wall, `.` floor,
//! `S` start, `E` exit) and translated when a custom legend is configured.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::Legend;
use crate::error::ConfigError;

pub const BUILTIN: &[&[&str]] = &[
    &[
        "###############",
        "#S....#.......#",
        "#.###.#.#####.#",
        "#.#...#.#...#.#",
        "#.#.###.#.#.#.#",
        "#.#.....#.#...#",
        "#.#######.###.#",
        "#.........#..E#",
        "###############",
    ],
    &[
        "###################",
        "#S#.......#.......#",
        "#.#.#####.#.#####.#",
        "#.#.#...#.#.#...#.#",
        "#.#.#.#.#.#.#.#.#.#",
        "#...#.#...#...#...#",
        "#####.###########.#",
        "#.....#.........#.#",
        "#.#####.#######.#.#",
        "#.......#.....#..E#",
        "###################",
    ],
    &[
        "#####################",
        "#S..#.......#.......#",
        "###.#.#####.#.###.#.#",
        "#...#.#...#...#...#.#",
        "#.###.#.#.#####.###.#",
        "#.#...#.#.....#.#...#",
        "#.#.###.#####.#.#.###",
        "#.#.#...#...#.#.#...#",
        "#.#.#.###.#.#.#.###.#",
        "#...#.....#...#....E#",
        "#####################",
    ],
];

/// Built-in rows rewritten into `legend`'s characters.
pub fn builtin_rows(legend: &Legend) -> Vec<Vec<String>> {
    let default = Legend::default();
    BUILTIN
        .iter()
        .map(|rows| {
            rows.iter()
                .map(|row| {
                    row.chars()
                        .map(|ch| match default.tile_for(ch) {
                            Some(tile) => legend.char_for(tile),
                            None => ch,
                        })
                        .collect()
                })
                .collect()
        })
        .collect()
}

/// Splits level text into levels: one row per line, levels separated by empty lines.
/// Whitespace is kept, since a legend may map spaces to tiles.
pub fn parse_levels_text(text: &str) -> Vec<Vec<String>> {
    split_levels(text.lines().map(str::to_string))
}

/// Reads a level file in the format accepted by [`parse_levels_text`].
pub fn read_levels_file(path: &Path) -> Result<Vec<Vec<String>>, ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_err)?;
    let lines = BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(io_err)?;
    let levels = split_levels(lines);
    log::info!("Read {} level(s) from {}", levels.len(), path.display());
    Ok(levels)
}

fn split_levels<I: IntoIterator<Item = String>>(lines: I) -> Vec<Vec<String>> {
    let mut levels = Vec::new();
    let mut current: Vec<String> = Vec::new();
    for line in lines {
        let row = line.strip_suffix('\r').unwrap_or(&line);
        if row.is_empty() {
            if !current.is_empty() {
                levels.push(std::mem::take(&mut current));
            }
        } else {
            current.push(row.to_string());
        }
    }
    if !current.is_empty() {
        levels.push(current);
    }
    levels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LevelSet, Position};

    #[test]
    fn blank_lines_separate_levels() {
        let text = "#####\n#S.E#\n#####\n\n\n###\n#S#\n#E#\n###\n";
        let levels = parse_levels_text(text);
        assert_eq!(levels.len(), 2);
        assert_eq!(levels[0], vec!["#####", "#S.E#", "#####"]);
        assert_eq!(levels[1].len(), 4);
    }

    #[test]
    fn crlf_line_endings_are_stripped() {
        let levels = parse_levels_text("#####\r\n#S.E#\r\n#####\r\n\r\n###\r\n#S#\r\n#E#\r\n###\r\n");
        assert_eq!(levels.len(), 2);
        assert_eq!(levels[0], vec!["#####", "#S.E#", "#####"]);
    }

    #[test]
    fn space_floor_rows_survive_loading() {
        let legend = Legend {
            wall: 'X',
            floor: ' ',
            start: 'p',
            exit: 'g',
        };
        let levels = parse_levels_text("XXXX\nXpg \nXXXX\n\n    \n p g\n    \n");
        assert_eq!(levels.len(), 2);
        assert_eq!(levels[0][1], "Xpg ");
        assert_eq!(levels[1], vec!["    ", " p g", "    "]);

        let set = LevelSet::parse(levels, &legend).unwrap();
        assert_eq!(set.level_at(0).unwrap().width(), 4);
        assert_eq!(set.level_at(1).unwrap().height(), 3);
        assert_eq!(set.level_at(1).unwrap().start(), Position::new(1, 1));
    }

    #[test]
    fn empty_text_has_no_levels() {
        assert!(parse_levels_text("\n\n").is_empty());
    }

    #[test]
    fn builtin_rows_follow_custom_legend() {
        let legend = Legend {
            wall: 'X',
            floor: ' ',
            start: 'p',
            exit: 'g',
        };
        let rows = builtin_rows(&legend);
        assert_eq!(rows.len(), BUILTIN.len());
        assert!(rows[0][1].starts_with("Xp"));
        assert!(!rows.iter().flatten().any(|r| r.contains('#')));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = read_levels_file(Path::new("no/such/levels.txt")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
