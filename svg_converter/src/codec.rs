// codec.rs - Text encodings of a parsed maze
//
// CSV layout:
//   entranceX,entranceY
//   exitX,exitY
//   cellX,cellY[,blockedX,blockedY]*    one line per grid cell, grid order

use std::collections::HashSet;

use maze_core::{BlockedNeighborMap, Cell, CellPair, MazeInfo};
use serde::{Deserialize, Serialize};

use crate::error_handling::{ConvertError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }

    pub fn encode(&self, info: &MazeInfo) -> Result<String> {
        match self {
            OutputFormat::Csv => Ok(encode_csv(info)),
            OutputFormat::Json => encode_json(info),
        }
    }
}

fn sorted_neighbors(blocked: &BlockedNeighborMap, cell: &Cell) -> Vec<Cell> {
    let mut neighbors: Vec<Cell> = blocked
        .blocked(cell)
        .map(|set| set.iter().copied().collect())
        .unwrap_or_default();
    neighbors.sort_unstable();
    neighbors
}

fn csv_line(cells: impl IntoIterator<Item = Cell>) -> String {
    let fields: Vec<String> = cells
        .into_iter()
        .map(|cell| format!("{},{}", cell.x, cell.y))
        .collect();
    fields.join(",")
}

pub fn encode_csv(info: &MazeInfo) -> String {
    let blocked = info.blocked_neighbors();
    let mut out = String::with_capacity(info.cells().len() * 16);

    for endpoint in [info.entrance(), info.exit()] {
        out.push_str(&csv_line([endpoint]));
        out.push('\n');
    }

    for cell in info.cells() {
        let row = std::iter::once(*cell).chain(sorted_neighbors(blocked, cell));
        out.push_str(&csv_line(row));
        out.push('\n');
    }
    out
}

/// Contents of a CSV file read back in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMaze {
    pub entrance: Cell,
    pub exit: Cell,
    pub blocked: BlockedNeighborMap,
}

fn parse_cells(line_no: usize, line: &str) -> Result<Vec<Cell>> {
    let values = line
        .split(',')
        .map(|field| {
            field.trim().parse::<i32>().map_err(|_| {
                ConvertError::decode(line_no, format!("\"{field}\" is not an integer"))
            })
        })
        .collect::<Result<Vec<i32>>>()?;

    if values.len() % 2 != 0 {
        return Err(ConvertError::decode(line_no, "odd number of coordinates"));
    }
    Ok(values.chunks_exact(2).map(|xy| Cell::new(xy[0], xy[1])).collect())
}

fn parse_single_cell(line_no: usize, line: Option<&str>) -> Result<Cell> {
    let line = line.ok_or_else(|| ConvertError::decode(line_no, "unexpected end of file"))?;
    match parse_cells(line_no, line)?.as_slice() {
        [cell] => Ok(*cell),
        _ => Err(ConvertError::decode(line_no, "expected exactly one x,y pair")),
    }
}

pub fn decode_csv(text: &str) -> Result<ParsedMaze> {
    let mut lines = text.lines();
    let entrance = parse_single_cell(1, lines.next())?;
    let exit = parse_single_cell(2, lines.next())?;

    let mut rows = Vec::new();
    for (index, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = index + 3;
        let cells = parse_cells(line_no, line)?;
        let (cell, neighbors) = cells
            .split_first()
            .ok_or_else(|| ConvertError::decode(line_no, "missing cell coordinates"))?;
        if neighbors.contains(cell) {
            return Err(ConvertError::decode(line_no, format!("{cell} lists itself as blocked")));
        }
        rows.push((line_no, *cell, neighbors.to_vec()));
    }

    let declared: HashSet<Cell> = rows.iter().map(|(_, cell, _)| *cell).collect();
    let mut blocked = BlockedNeighborMap::seeded(rows.iter().map(|(_, cell, _)| *cell));
    for (line_no, cell, neighbors) in rows {
        for neighbor in neighbors {
            if !declared.contains(&neighbor) {
                return Err(ConvertError::decode(
                    line_no,
                    format!("blocked neighbor {neighbor} has no row of its own"),
                ));
            }
            blocked.insert_pair(CellPair::new(cell, neighbor));
        }
    }

    Ok(ParsedMaze {
        entrance,
        exit,
        blocked,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeRecord {
    pub width: i32,
    pub height: i32,
    pub entrance: Cell,
    pub exit: Cell,
    pub cells: Vec<CellRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRecord {
    pub x: i32,
    pub y: i32,
    pub blocked: Vec<Cell>,
}

impl From<&MazeInfo> for MazeRecord {
    fn from(info: &MazeInfo) -> Self {
        let blocked = info.blocked_neighbors();
        Self {
            width: info.dims().width(),
            height: info.dims().height(),
            entrance: info.entrance(),
            exit: info.exit(),
            cells: info
                .cells()
                .iter()
                .map(|cell| CellRecord {
                    x: cell.x,
                    y: cell.y,
                    blocked: sorted_neighbors(blocked, cell),
                })
                .collect(),
        }
    }
}

pub fn encode_json(info: &MazeInfo) -> Result<String> {
    let mut json = serde_json::to_string_pretty(&MazeRecord::from(info))?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::{load_maze_info, GridScale, RawSegment, DEFAULT_BLOCK_SIZE, DEFAULT_OFFSET};
    use proptest::prelude::*;

    fn px(index: i32) -> i32 {
        DEFAULT_OFFSET + index * DEFAULT_BLOCK_SIZE
    }

    fn line(x1: i32, y1: i32, x2: i32, y2: i32) -> RawSegment {
        RawSegment::new(px(x1), px(y1), px(x2), px(y2))
    }

    fn small_maze() -> MazeInfo {
        let segments = vec![
            line(0, 0, 0, 2),
            line(2, 0, 2, 2),
            line(1, 0, 2, 0),
            line(0, 2, 1, 2),
            line(1, 1, 1, 2),
        ];
        load_maze_info(segments, 2, 2, &GridScale::default()).unwrap()
    }

    #[test]
    fn test_csv_layout() {
        let csv = encode_csv(&small_maze());
        assert_eq!(csv, "1,0\n0,1\n0,0,1,0\n0,1\n1,0,0,0\n1,1\n");
    }

    #[test]
    fn test_csv_round_trip() {
        let info = small_maze();
        let parsed = decode_csv(&encode_csv(&info)).unwrap();
        assert_eq!(parsed.entrance, info.entrance());
        assert_eq!(parsed.exit, info.exit());
        assert_eq!(&parsed.blocked, info.blocked_neighbors());
    }

    #[test]
    fn test_decode_errors_name_the_line() {
        let err = decode_csv("1,0\n0,1\n0,0,1\n").unwrap_err();
        assert_eq!(err.to_string(), "Line 3: odd number of coordinates");

        let err = decode_csv("1,0\n").unwrap_err();
        assert_eq!(err.to_string(), "Line 2: unexpected end of file");

        let err = decode_csv("1,0,2,2\n0,1\n").unwrap_err();
        assert_eq!(err.to_string(), "Line 1: expected exactly one x,y pair");

        let err = decode_csv("1,0\n0,1\n0,a\n").unwrap_err();
        assert_eq!(err.to_string(), "Line 3: \"a\" is not an integer");

        let err = decode_csv("1,0\n0,1\n0,0,0,0\n").unwrap_err();
        assert_eq!(err.to_string(), "Line 3: (0, 0) lists itself as blocked");

        let err = decode_csv("1,0\n0,1\n0,0,1,0\n0,1\n1,0,0,0\n1,1,5,5\n").unwrap_err();
        assert_eq!(err.to_string(), "Line 6: blocked neighbor (5, 5) has no row of its own");
    }

    #[test]
    fn test_json_record() {
        let info = small_maze();
        let json = encode_json(&info).unwrap();
        let record: MazeRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record.width, 2);
        assert_eq!(record.entrance, Cell::new(1, 0));
        assert_eq!(record.cells.len(), 4);
        assert_eq!(record.cells[0].blocked, vec![Cell::new(1, 0)]);
        assert_eq!(OutputFormat::Json.extension(), "json");
    }

    /// A maze of width `w`, height 3, fully closed except one gap at the top and one at the bottom
    fn comb_maze(w: i32, gap_bottom: i32, gap_top: i32, walls: &[(i32, i32)]) -> MazeInfo {
        let mut segments = vec![line(0, 0, 0, 3), line(w, 0, w, 3)];
        for x in 0..w {
            if x != gap_top {
                segments.push(line(x, 0, x + 1, 0));
            }
            if x != gap_bottom {
                segments.push(line(x, 3, x + 1, 3));
            }
        }
        for &(column, row) in walls {
            segments.push(line(column, row, column, row + 1));
        }
        load_maze_info(segments, w, 3, &GridScale::default()).unwrap()
    }

    proptest! {
        #[test]
        fn csv_round_trip_preserves_blockages(
            w in 2i32..8,
            gaps in (0i32..8, 0i32..8),
            walls in prop::collection::vec((1i32..8, 0i32..3), 0..12),
        ) {
            let walls: Vec<(i32, i32)> = walls.into_iter().filter(|(c, _)| *c < w).collect();
            let info = comb_maze(w, gaps.0 % w, gaps.1 % w, &walls);
            let parsed = decode_csv(&encode_csv(&info)).unwrap();

            prop_assert_eq!(parsed.entrance, info.entrance());
            prop_assert_eq!(parsed.exit, info.exit());
            prop_assert_eq!(&parsed.blocked, info.blocked_neighbors());
        }
    }
}
