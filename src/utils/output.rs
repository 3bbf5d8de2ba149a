//! Plain-text form of a grid: one physical row per line, halo included,
//! every cell written as `0` or `1` followed by a space.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{CellState, Grid, LifeError, Result};

pub fn write_grid<W: Write>(grid: &Grid, mut out: W) -> std::io::Result<()> {
    for row in grid.physical_rows() {
        for &cell in row {
            write!(out, "{} ", cell as u8)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Snapshot for the console: a header line, the grid, then a blank line
/// separating it from the next snapshot.
pub fn render_snapshot(grid: &Grid, generation: u64) -> String {
    let mut buf = format!("Life after {} iterations:\n", generation).into_bytes();
    // writing into a Vec cannot fail
    let _ = write_grid(grid, &mut buf);
    buf.push(b'\n');
    String::from_utf8_lossy(&buf).into_owned()
}

pub fn output_file_name(grid: &Grid, iterations: u64) -> String {
    format!("project_output.{}.{}.txt", grid.rows(), iterations)
}

/// Write `grid` into `dir` and return the path of the created file.
pub fn save_to_dir(grid: &Grid, dir: &Path, iterations: u64) -> Result<PathBuf> {
    let path = dir.join(output_file_name(grid, iterations));
    let mut out = BufWriter::new(File::create(&path)?);
    write_grid(grid, &mut out)?;
    out.flush()?;
    log::info!("wrote {}x{} grid to {}", grid.rows(), grid.cols(), path.display());
    Ok(path)
}

/// Read a grid written by [`write_grid`]. Blank lines are skipped, and the
/// halo has to be dead.
pub fn parse_grid(text: &str) -> Result<Grid> {
    let mut rows: Vec<(usize, Vec<CellState>)> = Vec::new();
    for (n, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|token| match token {
                "0" => Ok(CellState::Dead),
                "1" => Ok(CellState::Alive),
                _ => Err(LifeError::Parse {
                    line: n + 1,
                    message: format!("unexpected token '{}'", token),
                }),
            })
            .collect::<Result<Vec<_>>>()?;
        if let Some((_, first)) = rows.first() {
            if first.len() != row.len() {
                return Err(LifeError::Parse {
                    line: n + 1,
                    message: format!("expected {} cells, got {}", first.len(), row.len()),
                });
            }
        }
        rows.push((n + 1, row));
    }

    let width = rows.first().map_or(0, |(_, row)| row.len());
    if rows.len() < 3 || width < 3 {
        return Err(LifeError::Parse {
            line: rows.last().map_or(0, |(n, _)| *n),
            message: format!(
                "a grid needs at least 3x3 cells with its halo, got {}x{}",
                rows.len(),
                width
            ),
        });
    }

    let mut grid = Grid::new(rows.len() - 2, width - 2)?;
    for (i, (n, row)) in rows.iter().enumerate() {
        for (j, &cell) in row.iter().enumerate() {
            if cell.is_alive() && grid.is_halo(i, j) {
                return Err(LifeError::Parse {
                    line: *n,
                    message: format!("halo cell ({}, {}) is alive", i, j),
                });
            }
            grid.set(i, j, cell)?;
        }
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glider() -> Grid {
        let mut grid = Grid::new(3, 4).unwrap();
        for (i, j) in [(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)] {
            grid.set(i, j, CellState::Alive).unwrap();
        }
        grid
    }

    #[test]
    fn test_write_includes_halo() {
        let mut buf = Vec::new();
        write_grid(&glider(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "0 0 0 0 0 0 \n\
             0 0 1 0 0 0 \n\
             0 0 0 1 0 0 \n\
             0 1 1 1 0 0 \n\
             0 0 0 0 0 0 \n"
        );
    }

    #[test]
    fn test_snapshot() {
        let grid = Grid::square(1).unwrap();
        assert_eq!(
            render_snapshot(&grid, 7),
            "Life after 7 iterations:\n0 0 0 \n0 0 0 \n0 0 0 \n\n"
        );
    }

    #[test]
    fn test_parse_written() {
        let grid = glider();
        let mut buf = Vec::new();
        write_grid(&grid, &mut buf).unwrap();
        let parsed = parse_grid(std::str::from_utf8(&buf).unwrap()).unwrap();
        assert_eq!(parsed, grid);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_grid("0 0 0\n0 2 0\n0 0 0\n"),
            Err(LifeError::Parse { line: 2, .. })
        ));
        assert!(matches!(
            parse_grid("0 0 0\n0 1 0 0\n0 0 0\n"),
            Err(LifeError::Parse { line: 2, .. })
        ));
        assert!(matches!(
            parse_grid("0 0 0\n0 1 1\n0 0 0\n"),
            Err(LifeError::Parse { line: 2, .. })
        ));
        assert!(matches!(
            parse_grid("0 0\n0 0\n"),
            Err(LifeError::Parse { .. })
        ));
    }

    #[test]
    fn test_save_to_dir() {
        let dir = std::env::temp_dir().join(format!("halo_life_output_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let grid = glider();
        let path = save_to_dir(&grid, &dir, 12).unwrap();
        assert_eq!(path.file_name().unwrap(), "project_output.3.12.txt");
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(parse_grid(&text).unwrap(), grid);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
