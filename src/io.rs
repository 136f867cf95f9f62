use regex::Regex;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};

use crate::types::{Connection, Problem};

pub fn read_problem_json(path: &str) -> Result<Problem, io::Error> {
    let mut text = String::new();
    File::open(path)?.read_to_string(&mut text)?;
    parse_problem_json(&text)
}

pub fn parse_problem_json(text: &str) -> Result<Problem, io::Error> {
    serde_json::from_str(text).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Invalid problem description: {e}"),
        )
    })
}

/// Reads `from,to,capacity` lines. Blank lines and lines starting with `#`
/// are skipped.
pub fn read_connections_csv(path: &str) -> Result<Vec<Connection>, io::Error> {
    parse_connections_csv(BufReader::new(File::open(path)?))
}

pub fn parse_connections_csv(reader: impl BufRead) -> Result<Vec<Connection>, io::Error> {
    let line_pattern = Regex::new(r"^\s*(\d+)\s*,\s*(\d+)\s*,\s*([+-]?\d+)\s*$")
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    let mut connections = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let invalid = || {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Line {}: expected from,to,capacity, but got {line}",
                    number + 1
                ),
            )
        };
        let fields = line_pattern.captures(trimmed).ok_or_else(invalid)?;
        let from = fields[1].parse().map_err(|_| invalid())?;
        let to = fields[2].parse().map_err(|_| invalid())?;
        let capacity = fields[3].parse().map_err(|_| invalid())?;
        connections.push(Connection { from, to, capacity });
    }
    Ok(connections)
}
