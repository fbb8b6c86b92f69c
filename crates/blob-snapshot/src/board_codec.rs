//! Text encoding of boards.

use blob_board::{Board, CellState};

use crate::error::SnapshotError;
use crate::warning::{Decoded, LoadWarning};

/// Encode `board` as text.
///
/// Numbers use Rust's shortest round-tripping float formatting, so
/// [`decode_board`] reconstructs the board exactly.
pub fn encode_board(board: &Board) -> String {
    let mut out = format!("{} {}", board.width(), board.height());
    let mut row = None;
    for (cell, state) in board.cells() {
        if row != Some(cell.y) {
            out.push('\n');
            row = Some(cell.y);
        } else {
            out.push(' ');
        }
        out.push_str(&format!(
            "{},{},{}",
            u8::from(state.touched),
            state.food,
            state.intensity
        ));
    }
    out
}

fn parse_cell(record: &str) -> Option<CellState> {
    let mut fields = record.split(',');
    let (Some(touched), Some(food), Some(intensity), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return None;
    };
    let touched = match touched {
        "1" => true,
        "0" => false,
        _ => return None,
    };
    let food: f64 = food.parse().ok().filter(|v: &f64| v.is_finite())?;
    let intensity: f64 = intensity.parse().ok().filter(|v: &f64| v.is_finite())?;
    Some(CellState {
        touched,
        food,
        intensity,
    })
}

fn dimension(token: Option<&str>, name: &str) -> Result<i64, SnapshotError> {
    let token = token.ok_or_else(|| SnapshotError::MalformedHeader {
        detail: format!("missing {name}"),
    })?;
    token.parse().map_err(|_| SnapshotError::MalformedHeader {
        detail: format!("{name} {token:?} is not an integer"),
    })
}

/// Decode a board written by [`encode_board`].
///
/// The declared dimensions always win: short or long rows, a wrong row
/// count and unreadable cell records are repaired (missing or bad cells
/// stay empty, surplus data is dropped) and reported as warnings.
///
/// # Errors
///
/// [`SnapshotError::MalformedHeader`] when the first line is not two
/// integers, [`SnapshotError::InvalidDimensions`] when either is not
/// positive.
pub fn decode_board(text: &str) -> Result<Decoded<Board>, SnapshotError> {
    let mut lines = text.lines();
    let header = lines.next().ok_or_else(|| SnapshotError::MalformedHeader {
        detail: "empty input".to_owned(),
    })?;
    let mut tokens = header.split_whitespace();
    let width = dimension(tokens.next(), "width")?;
    let height = dimension(tokens.next(), "height")?;
    if tokens.next().is_some() {
        return Err(SnapshotError::MalformedHeader {
            detail: format!("trailing data in {header:?}"),
        });
    }
    let (Ok(w), Ok(h)) = (u32::try_from(width), u32::try_from(height)) else {
        return Err(SnapshotError::InvalidDimensions { width, height });
    };
    if w == 0 || h == 0 {
        return Err(SnapshotError::InvalidDimensions { width, height });
    }

    let mut board = Board::new(w, h);
    let mut warnings = Vec::new();
    let mut rows = 0usize;
    for line in lines.filter(|line| !line.trim().is_empty()) {
        let y = rows;
        rows += 1;
        if y >= h as usize {
            continue;
        }
        let records: Vec<&str> = line.split_whitespace().collect();
        if records.len() != w as usize {
            warnings.push(LoadWarning::RowWidthMismatch {
                row: y as u32,
                found: records.len(),
                expected: w,
            });
        }
        for (x, record) in records.into_iter().take(w as usize).enumerate() {
            match parse_cell(record) {
                Some(state) => {
                    board.set_cell_state(x as i32, y as i32, state);
                }
                None => warnings.push(LoadWarning::MalformedCell {
                    x: x as u32,
                    y: y as u32,
                    record: record.to_owned(),
                }),
            }
        }
    }
    if rows != h as usize {
        warnings.push(LoadWarning::RowCountMismatch {
            found: rows,
            expected: h,
        });
    }

    for warning in &warnings {
        tracing::warn!(%warning, "board snapshot repaired");
    }
    Ok(Decoded {
        value: board,
        warnings,
    })
}
